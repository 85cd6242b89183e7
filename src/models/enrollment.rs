// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Enrollment model for storage and API.

use serde::{Deserialize, Serialize};

/// Attendee enrollment record. Created by the onboarding flow; read-only
/// from this service's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    /// Enrollment ID (also used as document ID)
    pub id: i64,
    /// Owning user ID (exactly one enrollment per user)
    pub user_id: i64,
    /// Full name
    pub name: String,
    /// National ID (CPF)
    pub cpf: String,
    /// Contact phone
    pub phone: String,
    /// Mailing address
    pub address: Address,
}

/// Address attached to an enrollment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}
