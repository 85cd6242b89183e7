// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hotel eligibility resolution.
//!
//! Decides whether an attendee may view hotels, in strict order:
//! 1. Enrollment must exist for the user
//! 2. A ticket must exist for the enrollment
//! 3. The ticket must be paid, in-person, and include a hotel stay
//!
//! Missing prerequisites (steps 1-2) take priority over entitlement
//! failures (step 3) and surface as NotFound; entitlement failures
//! surface as PaymentRequired.

use crate::db::BookingStore;
use crate::error::{AppError, Result};
use crate::models::{Ticket, TicketStatus, TicketType};
use std::sync::Arc;

/// Resolves whether a user is entitled to in-person hotel benefits.
#[derive(Clone)]
pub struct EligibilityService {
    store: Arc<dyn BookingStore>,
}

impl EligibilityService {
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self { store }
    }

    /// Check that a user may view hotels and rooms.
    ///
    /// Read-and-classify only; no side effects. Returns Ok(()) when the
    /// user is eligible, otherwise the typed failure for the first check
    /// that did not hold.
    pub async fn ensure_can_book(&self, user_id: i64) -> Result<()> {
        let enrollment = self
            .store
            .find_enrollment_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no enrollment for user {}", user_id)))?;

        let ticket = self
            .store
            .find_ticket_by_enrollment(enrollment.id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("no ticket for enrollment {}", enrollment.id))
            })?;

        let ticket_type = self.store.find_ticket_type(ticket.ticket_type_id).await?;

        if let Some(reason) = ineligibility_reason(&ticket, &ticket_type) {
            tracing::debug!(user_id, ticket_id = ticket.id, reason, "Ticket not eligible");
            return Err(AppError::PaymentRequired(reason.to_string()));
        }

        Ok(())
    }
}

/// Why a ticket does not grant hotel access, or None if it does.
///
/// Checked in order: unpaid first, then remote-only, then hotel exclusion.
fn ineligibility_reason(ticket: &Ticket, ticket_type: &TicketType) -> Option<&'static str> {
    if ticket.status == TicketStatus::Reserved {
        return Some("ticket has not been paid");
    }
    if ticket_type.is_remote {
        return Some("remote tickets do not include a hotel stay");
    }
    if !ticket_type.includes_hotel {
        return Some("ticket type does not include a hotel stay");
    }
    None
}
