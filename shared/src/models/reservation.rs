//! Reservation Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reservation lifecycle status
///
/// Transitions are owned by the server. The API only exposes the
/// `completada` flag; cancelled reservations are deleted server-side, so
/// `Cancelled` is never decoded from a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Completed,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    #[serde(rename = "restaurante_id")]
    pub restaurant_id: i64,
    /// Joined by the server from the restaurant row
    #[serde(rename = "restaurante_nombre", default)]
    pub restaurant_name: Option<String>,
    #[serde(rename = "nombre_cliente")]
    pub customer_name: String,
    #[serde(rename = "email_cliente")]
    pub customer_email: String,
    #[serde(rename = "telefono_cliente")]
    pub customer_phone: String,
    /// Calendar date, no time zone (`YYYY-MM-DD`)
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    /// Time of day as entered (`HH:MM`)
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "numero_personas")]
    pub party_size: i64,
    #[serde(rename = "completada", default)]
    pub completed: bool,
    #[serde(rename = "fecha_creacion", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Reservation {
    pub fn status(&self) -> ReservationStatus {
        if self.completed {
            ReservationStatus::Completed
        } else {
            ReservationStatus::Pending
        }
    }
}

/// Create reservation payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReservation {
    #[serde(rename = "restaurante_id")]
    pub restaurant_id: i64,
    #[serde(rename = "nombre_cliente")]
    pub customer_name: String,
    #[serde(rename = "email_cliente")]
    pub customer_email: String,
    #[serde(rename = "telefono_cliente")]
    pub customer_phone: String,
    /// Sent as typed; the server does the calendar check
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "numero_personas")]
    pub party_size: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> serde_json::Value {
        serde_json::json!({
            "id": 3,
            "restaurante_id": 7,
            "restaurante_nombre": "La Tagliatella",
            "nombre_cliente": "Ana",
            "email_cliente": "ana@example.com",
            "telefono_cliente": "600000000",
            "fecha": "2026-10-20",
            "hora": "21:30",
            "numero_personas": 4,
            "fecha_creacion": "2026-10-01T09:00:00",
            "completada": false
        })
    }

    #[test]
    fn decodes_api_reservation() {
        let r: Reservation = serde_json::from_value(sample()).unwrap();
        assert_eq!(r.date, NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
        assert_eq!(r.restaurant_name.as_deref(), Some("La Tagliatella"));
        assert_eq!(r.party_size, 4);
        assert_eq!(r.status(), ReservationStatus::Pending);
    }

    #[test]
    fn completed_flag_maps_to_status() {
        let mut json = sample();
        json["completada"] = serde_json::json!(true);
        let r: Reservation = serde_json::from_value(json).unwrap();
        assert_eq!(r.status(), ReservationStatus::Completed);
    }

    #[test]
    fn missing_restaurant_name_is_tolerated() {
        let mut json = sample();
        json["restaurante_nombre"] = serde_json::Value::Null;
        let r: Reservation = serde_json::from_value(json).unwrap();
        assert!(r.restaurant_name.is_none());
    }
}
