//! New-reservation form and its local validation
//!
//! Validation runs before any request is built. The first failing rule
//! wins and carries the message shown to the user.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use shared::{NewReservation, Restaurant};
use thiserror::Error;

/// Default time of a fresh form
pub const DEFAULT_TIME: &str = "12:00";

/// Default party size of a fresh form
pub const DEFAULT_PARTY_SIZE: &str = "1";

/// Inclusive party size bounds
pub const MIN_PARTY_SIZE: i64 = 1;
pub const MAX_PARTY_SIZE: i64 = 10;

// Shape only: 2024-13-40 passes, the server does the calendar check
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid")
});

// Hour may be written with one digit (9:30)
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").expect("time pattern is valid")
});

/// Local validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Debes seleccionar un restaurante")]
    NoRestaurant,
    #[error("El nombre del cliente es requerido")]
    MissingName,
    #[error("El email del cliente es requerido")]
    MissingEmail,
    #[error("El teléfono del cliente es requerido")]
    MissingPhone,
    #[error("La fecha debe estar en formato YYYY-MM-DD")]
    BadDate,
    #[error("La hora debe estar en formato HH:MM")]
    BadTime,
    #[error("El número de personas debe estar entre 1 y 10")]
    BadPartySize,
}

/// Raw form state, exactly as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationForm {
    pub restaurant: Option<Restaurant>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub party_size: String,
}

impl ReservationForm {
    /// Empty form dated `today`, at noon, for one person
    pub fn new(today: NaiveDate) -> Self {
        Self {
            restaurant: None,
            customer_name: String::new(),
            customer_email: String::new(),
            customer_phone: String::new(),
            date: shared::util::format_iso_date(today),
            time: DEFAULT_TIME.into(),
            party_size: DEFAULT_PARTY_SIZE.into(),
        }
    }

    /// Check every rule in order and build the request body
    pub fn validate(&self) -> Result<NewReservation, FormError> {
        let restaurant = self.restaurant.as_ref().ok_or(FormError::NoRestaurant)?;

        let customer_name = required(&self.customer_name, FormError::MissingName)?;
        let customer_email = required(&self.customer_email, FormError::MissingEmail)?;
        let customer_phone = required(&self.customer_phone, FormError::MissingPhone)?;

        if !DATE_RE.is_match(&self.date) {
            return Err(FormError::BadDate);
        }
        if !TIME_RE.is_match(&self.time) {
            return Err(FormError::BadTime);
        }

        let party_size = self
            .party_size
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|n| (MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(n))
            .ok_or(FormError::BadPartySize)?;

        Ok(NewReservation {
            restaurant_id: restaurant.id,
            customer_name,
            customer_email,
            customer_phone,
            date: self.date.clone(),
            time: self.time.clone(),
            party_size,
        })
    }
}

fn required(value: &str, err: FormError) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(err)
    } else {
        Ok(trimmed.to_string())
    }
}
