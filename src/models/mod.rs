// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod enrollment;
pub mod hotel;
pub mod ticket;

pub use enrollment::{Address, Enrollment};
pub use hotel::{Hotel, HotelWithRooms, Room};
pub use ticket::{Ticket, TicketStatus, TicketType};
