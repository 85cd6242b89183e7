// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Hotel and room models.

use serde::{Deserialize, Serialize};

/// Hotel available to eligible attendees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    /// Hotel ID (also used as document ID)
    pub id: i64,
    /// Hotel name
    pub name: String,
    /// Cover image URL
    pub image: String,
}

/// Room belonging to a hotel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Room ID (also used as document ID)
    pub id: i64,
    /// Room name/number
    pub name: String,
    /// Guest capacity
    pub capacity: i32,
    /// Owning hotel ID
    pub hotel_id: i64,
}

/// A hotel together with its rooms, as returned by the room listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelWithRooms {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}
