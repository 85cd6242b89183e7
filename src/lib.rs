// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Eventstay: hotel listings for event attendees
//!
//! This crate provides the backend API that serves hotel and room listings,
//! gated by each attendee's enrollment and ticket entitlements.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use config::Config;
use db::BookingStore;
use services::HotelsService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn BookingStore>,
    pub hotels_service: HotelsService,
}
