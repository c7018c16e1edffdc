//! Screen state containers
//!
//! One struct per screen of the app. Each owns its local state and its API
//! wrapper; actions take `&mut self`, so a screen never has two requests in
//! flight. Outcomes the user must see are queued as notices.

pub mod new_reservation;
pub mod reservations;
pub mod restaurants;

pub use new_reservation::NewReservationScreen;
pub use reservations::{ReservationRow, ReservationsScreen};
pub use restaurants::{RestaurantEditor, RestaurantsScreen};

use crate::ClientError;

/// Server text when present, else the screen's generic message
pub(crate) fn failure_message(err: &ClientError, fallback: &str) -> String {
    err.server_message().unwrap_or(fallback).to_string()
}
