// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Ticket and ticket type models.

use serde::{Deserialize, Serialize};

/// Payment state of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    /// Reserved but not yet paid
    Reserved,
    /// Payment confirmed
    Paid,
}

/// Ticket purchased for an enrollment. An enrollment has at most one
/// active ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Ticket ID (also used as document ID)
    pub id: i64,
    /// Owning enrollment ID
    pub enrollment_id: i64,
    /// Reference to the ticket type
    pub ticket_type_id: i64,
    /// Payment status
    pub status: TicketStatus,
}

/// Ticket category defining what the holder is entitled to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketType {
    /// Ticket type ID (also used as document ID)
    pub id: i64,
    /// Display name (e.g. "In-person + hotel")
    pub name: String,
    /// Price in cents
    pub price: i64,
    /// Remote-attendance ticket (no physical presence)
    pub is_remote: bool,
    /// Whether the ticket includes a hotel stay
    pub includes_hotel: bool,
}
