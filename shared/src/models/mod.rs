//! Data models
//!
//! Mirror the JSON the reservations API produces. Field names on the wire
//! are the API's Spanish names; all IDs are `i64`.

pub mod reservation;
pub mod restaurant;

// Re-exports
pub use reservation::*;
pub use restaurant::*;
