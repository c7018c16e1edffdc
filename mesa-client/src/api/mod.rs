//! Typed wrappers over the two API resources
//!
//! Each wrapper owns an [`HttpClient`] and maps one method to one endpoint.
//! Envelope handling is shared: a response with `success: false` becomes
//! [`ClientError::Rejected`].

mod reservations;
mod restaurants;

pub use reservations::ReservationApi;
pub use restaurants::RestaurantApi;

use serde::de::IgnoredAny;
use shared::ApiResponse;

use crate::{ClientError, ClientResult};

/// Envelope of endpoints whose `data` the client does not use
pub type Ack = ApiResponse<IgnoredAny>;

/// Reject envelopes the server flagged as unsuccessful
pub(crate) fn accept<T>(resp: ApiResponse<T>) -> ClientResult<ApiResponse<T>> {
    if resp.success {
        Ok(resp)
    } else {
        Err(ClientError::Rejected(resp.reason().map(str::to_owned)))
    }
}

/// Accept the envelope and require its `data`
pub(crate) fn accept_data<T>(resp: ApiResponse<T>, what: &str) -> ClientResult<T> {
    accept(resp)?
        .data
        .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {what} data")))
}
