// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Implements [`BookingStore`] over these collections:
//! - Enrollments (keyed by enrollment ID, queried by user)
//! - Tickets (keyed by ticket ID, queried by enrollment)
//! - Ticket types (keyed by type ID)
//! - Hotels and rooms

use crate::db::{collections, BookingStore};
use crate::error::AppError;
use crate::models::{Enrollment, Hotel, HotelWithRooms, Room, Ticket, TicketType};
use async_trait::async_trait;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreStore {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreStore {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }
}

#[async_trait]
impl BookingStore for FirestoreStore {
    /// Get a user's enrollment by their user ID.
    async fn find_enrollment_by_user(
        &self,
        user_id: i64,
    ) -> Result<Option<Enrollment>, AppError> {
        let enrollments: Vec<Enrollment> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::ENROLLMENTS)
            .filter(move |q| q.field("user_id").eq(user_id))
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(enrollments.into_iter().next())
    }

    /// Get the ticket for an enrollment. An enrollment has at most one
    /// active ticket; the first match is returned.
    async fn find_ticket_by_enrollment(
        &self,
        enrollment_id: i64,
    ) -> Result<Option<Ticket>, AppError> {
        let tickets: Vec<Ticket> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::TICKETS)
            .filter(move |q| q.field("enrollment_id").eq(enrollment_id))
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(tickets.into_iter().next())
    }

    /// Get a ticket type by ID. A missing document means a ticket holds a
    /// dangling type reference, which is a data integrity failure.
    async fn find_ticket_type(&self, ticket_type_id: i64) -> Result<TicketType, AppError> {
        let ticket_type: Option<TicketType> = self
            .get_client()?
            .fluent()
            .select()
            .by_id_in(collections::TICKET_TYPES)
            .obj()
            .one(&ticket_type_id.to_string())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        ticket_type.ok_or_else(|| {
            AppError::Database(format!("ticket type {} does not exist", ticket_type_id))
        })
    }

    /// Get all hotels.
    async fn find_all_hotels(&self) -> Result<Vec<Hotel>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::HOTELS)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a hotel and its rooms.
    async fn find_hotel_with_rooms(
        &self,
        hotel_id: i64,
    ) -> Result<Option<HotelWithRooms>, AppError> {
        let hotel: Option<Hotel> = self
            .get_client()?
            .fluent()
            .select()
            .by_id_in(collections::HOTELS)
            .obj()
            .one(&hotel_id.to_string())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let Some(hotel) = hotel else {
            return Ok(None);
        };

        let rooms: Vec<Room> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::ROOMS)
            .filter(move |q| q.field("hotel_id").eq(hotel_id))
            .order_by([("name", firestore::FirestoreQueryDirection::Ascending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(Some(HotelWithRooms { hotel, rooms }))
    }
}
