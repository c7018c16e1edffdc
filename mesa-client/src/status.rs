//! Display status of a reservation relative to today
//!
//! Purely presentational: nothing here changes the persisted lifecycle
//! status of a reservation.

use chrono::NaiveDate;
use shared::Reservation;

/// Source of "today"
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the machine
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        shared::util::today_local()
    }
}

/// Clock pinned to one date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Colour family a status is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// red
    Critical,
    /// orange
    Warning,
    /// blue
    Neutral,
}

impl Tone {
    pub fn color(&self) -> &'static str {
        match self {
            Self::Critical => "red",
            Self::Warning => "orange",
            Self::Neutral => "blue",
        }
    }
}

/// Derived, non-persisted status of a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayStatus {
    Upcoming,
    Today,
    Expired,
}

impl DisplayStatus {
    /// Classify `date` against `today`; both are plain calendar dates
    pub fn classify(date: NaiveDate, today: NaiveDate) -> Self {
        use std::cmp::Ordering;
        match date.cmp(&today) {
            Ordering::Less => Self::Expired,
            Ordering::Equal => Self::Today,
            Ordering::Greater => Self::Upcoming,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Today => "today",
            Self::Expired => "expired",
        }
    }

    /// Chip text.
    ///
    /// Expired entries read "Hoy" as well; the cancel button is what tells
    /// them apart ("Vencida"). Kept as shipped until product decides.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Upcoming => "Próxima",
            Self::Today | Self::Expired => "Hoy",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Expired => Tone::Critical,
            Self::Today => Tone::Warning,
            Self::Upcoming => Tone::Neutral,
        }
    }

    /// Whether cancel is offered for the entry
    pub fn actions_enabled(&self) -> bool {
        !matches!(self, Self::Expired)
    }

    /// Text of the cancel button
    pub fn cancel_label(&self) -> &'static str {
        if self.actions_enabled() {
            "Cancelar"
        } else {
            "Vencida"
        }
    }
}

impl std::fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort ascending by date; equal dates keep fetch order
pub fn sort_by_date(reservations: &mut [Reservation]) {
    // slice::sort_by_key is stable
    reservations.sort_by_key(|r| r.date);
}
