// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hotel listing service.
//!
//! Each request runs the same chain: resolve the user's eligibility first,
//! then fetch the requested hotel data. The data queries themselves carry
//! no eligibility logic.

use crate::db::BookingStore;
use crate::error::{AppError, Result};
use crate::models::{Hotel, HotelWithRooms};
use crate::services::EligibilityService;
use std::sync::Arc;

/// Serves hotel and room listings to eligible attendees.
#[derive(Clone)]
pub struct HotelsService {
    store: Arc<dyn BookingStore>,
    eligibility: EligibilityService,
}

impl HotelsService {
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self {
            eligibility: EligibilityService::new(store.clone()),
            store,
        }
    }

    /// List all hotels for an eligible user.
    ///
    /// An empty hotel table is reported as NotFound, matching the room
    /// listing's behavior for a missing hotel.
    pub async fn get_hotels(&self, user_id: i64) -> Result<Vec<Hotel>> {
        self.eligibility.ensure_can_book(user_id).await?;

        let hotels = self.store.find_all_hotels().await?;
        if hotels.is_empty() {
            return Err(AppError::NotFound("no hotels available".to_string()));
        }

        tracing::debug!(user_id, count = hotels.len(), "Listing hotels");
        Ok(hotels)
    }

    /// Get one hotel with its rooms for an eligible user.
    ///
    /// Callers validate that `hotel_id` is positive before invoking this.
    pub async fn get_hotel_rooms(&self, hotel_id: i64, user_id: i64) -> Result<HotelWithRooms> {
        self.eligibility.ensure_can_book(user_id).await?;

        self.store
            .find_hotel_with_rooms(hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("hotel {} not found", hotel_id)))
    }
}
