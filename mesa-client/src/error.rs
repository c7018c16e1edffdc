//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Client error type
///
/// Screens do not distinguish between the variants when reporting to the
/// user; they only ask for [`ClientError::server_message`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Api {
        status: StatusCode,
        message: Option<String>,
    },

    /// Server answered 2xx but flagged `success: false`
    #[error("Request rejected: {}", .0.as_deref().unwrap_or("no details"))]
    Rejected(Option<String>),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// 2xx body that does not decode as the expected JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Server-supplied explanation, if the server sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            Self::Rejected(message) => message.as_deref(),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_from_api_error() {
        let err = ClientError::Api {
            status: StatusCode::BAD_REQUEST,
            message: Some("No se pueden hacer reservas para fechas pasadas".into()),
        };
        assert_eq!(
            err.server_message(),
            Some("No se pueden hacer reservas para fechas pasadas")
        );
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn no_server_message_for_local_failures() {
        let err = ClientError::InvalidResponse("Missing data".into());
        assert!(err.server_message().is_none());

        let err = ClientError::Rejected(None);
        assert!(err.server_message().is_none());
        assert_eq!(err.to_string(), "Request rejected: no details");
    }
}
