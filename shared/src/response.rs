//! API Response types
//!
//! Envelope carried by every response of the reservations API

use serde::{Deserialize, Serialize};

/// Unified API response structure
///
/// All API responses follow this format:
/// ```json
/// {
///     "success": true,
///     "data": { ... },
///     "message": "Reserva creada exitosamente",
///     "error": null,
///     "count": 3
/// }
/// ```
///
/// Only `success` is always present. `count` is set by the bulk
/// operations that report how many records they touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the server accepted the request
    pub success: bool,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable confirmation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Human-readable rejection reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Number of affected records (bulk operations)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            count: None,
        }
    }

    /// Create a successful response with custom message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }

    /// Create an error response
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
            count: None,
        }
    }

    /// Attach an affected-records count
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    /// Best human-readable reason for a rejection: `error`, then `message`
    pub fn reason(&self) -> Option<&str> {
        fn non_empty(s: &Option<String>) -> Option<&str> {
            s.as_deref().filter(|s| !s.is_empty())
        }
        non_empty(&self.error).or_else(|| non_empty(&self.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::IgnoredAny;

    #[test]
    fn decodes_minimal_envelope() {
        let resp: ApiResponse<IgnoredAny> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(resp.success);
        assert!(resp.data.is_none());
        assert!(resp.count.is_none());
    }

    #[test]
    fn decodes_count_and_message() {
        let resp: ApiResponse<IgnoredAny> = serde_json::from_str(
            r#"{"success":true,"message":"3 reservas vencidas eliminadas","count":3}"#,
        )
        .unwrap();
        assert_eq!(resp.count, Some(3));
        assert_eq!(resp.message.as_deref(), Some("3 reservas vencidas eliminadas"));
    }

    #[test]
    fn reason_prefers_error_over_message() {
        let mut resp = ApiResponse::<()>::error("El restaurante no existe");
        resp.message = Some("ignored".into());
        assert_eq!(resp.reason(), Some("El restaurante no existe"));

        let resp = ApiResponse::<()> {
            success: false,
            data: None,
            message: Some("fallback".into()),
            error: Some(String::new()),
            count: None,
        };
        assert_eq!(resp.reason(), Some("fallback"));
    }

    #[test]
    fn decodes_envelope_around_entity() {
        let resp: ApiResponse<crate::Restaurant> = serde_json::from_str(
            r#"{"success":true,"data":{"id":4,"nombre":"Botín","ciudad":"Madrid"}}"#,
        )
        .unwrap();
        let r = resp.data.unwrap();
        assert_eq!(r.id, 4);
        assert_eq!(r.name, "Botín");

        let missing: ApiResponse<crate::Restaurant> =
            serde_json::from_str(r#"{"success":false,"error":"No encontrado"}"#).unwrap();
        assert!(missing.data.is_none());
        assert_eq!(missing.reason(), Some("No encontrado"));
    }

    #[test]
    fn ok_envelope_skips_empty_fields() {
        let json = serde_json::to_value(ApiResponse::ok(1).with_count(2)).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": 1, "count": 2}));
    }
}
