// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod eligibility;
pub mod hotels;

pub use eligibility::EligibilityService;
pub use hotels::HotelsService;
