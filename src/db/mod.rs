// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer.
//!
//! All reads go through the [`BookingStore`] trait so the eligibility and
//! hotel listing logic can run against any backing store (Firestore in
//! production, an in-memory fake in tests).

pub mod firestore;

pub use firestore::FirestoreStore;

use crate::error::AppError;
use crate::models::{Enrollment, Hotel, HotelWithRooms, Ticket, TicketType};
use async_trait::async_trait;

/// Read-only queries backing the hotel listing service, one method per query.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Find a user's enrollment, if any.
    async fn find_enrollment_by_user(&self, user_id: i64)
        -> Result<Option<Enrollment>, AppError>;

    /// Find the ticket associated with an enrollment, if any.
    async fn find_ticket_by_enrollment(
        &self,
        enrollment_id: i64,
    ) -> Result<Option<Ticket>, AppError>;

    /// Load a ticket type by ID. A ticket's type reference is expected to
    /// resolve; a dangling reference surfaces as a database error.
    async fn find_ticket_type(&self, ticket_type_id: i64) -> Result<TicketType, AppError>;

    /// List all hotels.
    async fn find_all_hotels(&self) -> Result<Vec<Hotel>, AppError>;

    /// Load a hotel together with its rooms, if the hotel exists.
    async fn find_hotel_with_rooms(
        &self,
        hotel_id: i64,
    ) -> Result<Option<HotelWithRooms>, AppError>;
}

/// Collection names as constants.
pub mod collections {
    pub const ENROLLMENTS: &str = "enrollments";
    pub const TICKETS: &str = "tickets";
    pub const TICKET_TYPES: &str = "ticket_types";
    pub const HOTELS: &str = "hotels";
    pub const ROOMS: &str = "rooms";
}
