//! Mesa Client - HTTP client and screen state for the reservations API
//!
//! Provides the typed API wrappers, the client-side restaurant filter,
//! reservation status derivation, new-reservation validation, and one state
//! container per app screen.

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod http;
pub mod notice;
pub mod screens;
pub mod status;

pub use api::{ReservationApi, RestaurantApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use filter::RestaurantFilter;
pub use form::{FormError, ReservationForm};
pub use http::{HttpClient, NetworkHttpClient};
pub use notice::{Notice, NoticeKind};
pub use screens::{NewReservationScreen, ReservationsScreen, RestaurantsScreen};
pub use status::{Clock, DisplayStatus, FixedClock, SystemClock};

// Re-export shared types for convenience
pub use shared::{ApiResponse, NewReservation, Reservation, Restaurant, RestaurantInput};
