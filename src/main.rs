// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Eventstay API Server
//!
//! Serves hotel and room listings for event attendees, gating access by
//! each attendee's enrollment and ticket entitlements.

use eventstay::{config::Config, db::FirestoreStore, services::HotelsService, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging for GCP
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Eventstay API");

    // Initialize Firestore-backed store
    let store = FirestoreStore::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");
    let store: Arc<dyn eventstay::db::BookingStore> = Arc::new(store);

    let hotels_service = HotelsService::new(store.clone());

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        hotels_service,
    });

    // Build router
    let app = eventstay::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("eventstay=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
