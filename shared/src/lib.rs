//! Shared types for Mesa
//!
//! Wire types used by the client crates: the API response envelope,
//! restaurant and reservation models, and calendar-date helpers.

pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use models::{
    NewReservation, Reservation, ReservationStatus, Restaurant, RestaurantInput,
};
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
