// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use dashmap::DashMap;
use eventstay::config::Config;
use eventstay::db::BookingStore;
use eventstay::error::AppError;
use eventstay::models::{
    Address, Enrollment, Hotel, HotelWithRooms, Room, Ticket, TicketStatus, TicketType,
};
use eventstay::routes::create_router;
use eventstay::services::HotelsService;
use eventstay::AppState;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// In-memory [`BookingStore`] for driving the HTTP surface in tests.
#[derive(Default)]
pub struct MemoryStore {
    enrollments: DashMap<i64, Enrollment>,
    tickets: DashMap<i64, Ticket>,
    ticket_types: DashMap<i64, TicketType>,
    hotels: DashMap<i64, Hotel>,
    rooms: DashMap<i64, Room>,
    next_id: AtomicI64,
}

impl MemoryStore {
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    // ─── Fixture factories ───────────────────────────────────────

    /// Create an enrollment (with address) for a user.
    #[allow(dead_code)]
    pub fn enrollment_for(&self, user_id: i64) -> Enrollment {
        let enrollment = Enrollment {
            id: self.next_id(),
            user_id,
            name: "Ada Attendee".to_string(),
            cpf: "12345678900".to_string(),
            phone: "+55 11 99999-0000".to_string(),
            address: Address {
                street: "Rua das Laranjeiras".to_string(),
                number: "42".to_string(),
                city: "Rio de Janeiro".to_string(),
                state: "RJ".to_string(),
                postal_code: "22240-000".to_string(),
            },
        };
        self.enrollments.insert(enrollment.id, enrollment.clone());
        enrollment
    }

    /// Create a ticket for an enrollment.
    #[allow(dead_code)]
    pub fn ticket(
        &self,
        enrollment_id: i64,
        ticket_type_id: i64,
        status: TicketStatus,
    ) -> Ticket {
        let ticket = Ticket {
            id: self.next_id(),
            enrollment_id,
            ticket_type_id,
            status,
        };
        self.tickets.insert(ticket.id, ticket.clone());
        ticket
    }

    fn insert_ticket_type(&self, name: &str, is_remote: bool, includes_hotel: bool) -> TicketType {
        let ticket_type = TicketType {
            id: self.next_id(),
            name: name.to_string(),
            price: 60_000,
            is_remote,
            includes_hotel,
        };
        self.ticket_types
            .insert(ticket_type.id, ticket_type.clone());
        ticket_type
    }

    /// Ticket type that grants hotel access: in-person, hotel included.
    #[allow(dead_code)]
    pub fn ticket_type_with_hotel(&self) -> TicketType {
        self.insert_ticket_type("In-person + hotel", false, true)
    }

    /// Remote-only ticket type.
    #[allow(dead_code)]
    pub fn ticket_type_remote(&self) -> TicketType {
        self.insert_ticket_type("Remote", true, false)
    }

    /// In-person ticket type without a hotel stay.
    #[allow(dead_code)]
    pub fn ticket_type_without_hotel(&self) -> TicketType {
        self.insert_ticket_type("In-person", false, false)
    }

    /// Create one hotel.
    #[allow(dead_code)]
    pub fn hotel(&self, name: &str) -> Hotel {
        let hotel = Hotel {
            id: self.next_id(),
            name: name.to_string(),
            image: "https://images.example.com/hotels/palace.jpg".to_string(),
        };
        self.hotels.insert(hotel.id, hotel.clone());
        hotel
    }

    /// Create the standard three-hotel fixture.
    #[allow(dead_code)]
    pub fn seed_hotels(&self) -> Vec<Hotel> {
        vec![
            self.hotel("Hotel Copacabana"),
            self.hotel("Hotel Ipanema"),
            self.hotel("Hotel Leblon"),
        ]
    }

    /// Create a room in a hotel.
    #[allow(dead_code)]
    pub fn room(&self, hotel_id: i64, capacity: i32) -> Room {
        let room = Room {
            id: self.next_id(),
            name: "101".to_string(),
            capacity,
            hotel_id,
        };
        self.rooms.insert(room.id, room.clone());
        room
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn find_enrollment_by_user(
        &self,
        user_id: i64,
    ) -> Result<Option<Enrollment>, AppError> {
        Ok(self
            .enrollments
            .iter()
            .find(|e| e.user_id == user_id)
            .map(|e| e.value().clone()))
    }

    async fn find_ticket_by_enrollment(
        &self,
        enrollment_id: i64,
    ) -> Result<Option<Ticket>, AppError> {
        Ok(self
            .tickets
            .iter()
            .find(|t| t.enrollment_id == enrollment_id)
            .map(|t| t.value().clone()))
    }

    async fn find_ticket_type(&self, ticket_type_id: i64) -> Result<TicketType, AppError> {
        self.ticket_types
            .get(&ticket_type_id)
            .map(|t| t.value().clone())
            .ok_or_else(|| {
                AppError::Database(format!("ticket type {} does not exist", ticket_type_id))
            })
    }

    async fn find_all_hotels(&self) -> Result<Vec<Hotel>, AppError> {
        let mut hotels: Vec<Hotel> = self.hotels.iter().map(|h| h.value().clone()).collect();
        hotels.sort_by_key(|h| h.id);
        Ok(hotels)
    }

    async fn find_hotel_with_rooms(
        &self,
        hotel_id: i64,
    ) -> Result<Option<HotelWithRooms>, AppError> {
        let Some(hotel) = self.hotels.get(&hotel_id).map(|h| h.value().clone()) else {
            return Ok(None);
        };

        let mut rooms: Vec<Room> = self
            .rooms
            .iter()
            .filter(|r| r.hotel_id == hotel_id)
            .map(|r| r.value().clone())
            .collect();
        rooms.sort_by_key(|r| r.id);

        Ok(Some(HotelWithRooms { hotel, rooms }))
    }
}

/// Create a test app backed by an in-memory store.
/// Returns the router, the shared state, and the store for seeding.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>, Arc<MemoryStore>) {
    let config = Config::default();
    let store = Arc::new(MemoryStore::default());
    let store_dyn: Arc<dyn BookingStore> = store.clone();

    let hotels_service = HotelsService::new(store_dyn.clone());

    let state = Arc::new(AppState {
        config,
        store: store_dyn,
        hotels_service,
    });

    (create_router(state.clone()), state, store)
}

/// Create a signed JWT for a test user.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: i64, signing_key: &[u8]) -> String {
    eventstay::middleware::auth::create_jwt(user_id, signing_key)
        .expect("Failed to create test JWT")
}
