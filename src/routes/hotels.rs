// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hotel listing routes for authenticated users.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{Hotel, HotelWithRooms};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;

/// Hotel routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/hotels", get(list_hotels))
        .route("/hotels/{hotel_id}", get(list_hotel_rooms))
}

/// List all hotels available to the current user.
async fn list_hotels(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Hotel>>> {
    tracing::debug!(user_id = user.user_id, "Fetching hotels");

    let hotels = state.hotels_service.get_hotels(user.user_id).await?;
    Ok(Json(hotels))
}

/// Get one hotel with its rooms.
///
/// The path parameter is taken raw so a malformed ID maps to 400 rather
/// than the extractor's rejection.
async fn list_hotel_rooms(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(hotel_id): Path<String>,
) -> Result<Json<HotelWithRooms>> {
    let hotel_id = parse_hotel_id(&hotel_id)?;
    tracing::debug!(user_id = user.user_id, hotel_id, "Fetching hotel rooms");

    let hotel = state
        .hotels_service
        .get_hotel_rooms(hotel_id, user.user_id)
        .await?;
    Ok(Json(hotel))
}

/// Parse a hotel ID path segment. Must be a positive integer.
fn parse_hotel_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| {
            crate::error::AppError::BadRequest(format!(
                "Invalid hotel id '{}': must be a positive integer",
                raw
            ))
        })
}
