//! New reservation form screen

use std::sync::Arc;

use shared::Restaurant;

use super::failure_message;
use crate::api::{ReservationApi, RestaurantApi};
use crate::form::ReservationForm;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::notice::{Notice, Notices};
use crate::status::{Clock, SystemClock};

pub const LOAD_FAILED: &str = "No se pudieron cargar los restaurantes";
pub const CREATE_FAILED: &str = "No se pudo crear la reserva";

/// Reservation creation screen
pub struct NewReservationScreen<C = NetworkHttpClient> {
    restaurants_api: RestaurantApi<C>,
    reservations_api: ReservationApi<C>,
    clock: Arc<dyn Clock>,
    restaurants: Vec<Restaurant>,
    form: ReservationForm,
    submitting: bool,
    notices: Notices,
}

impl<C: HttpClient + Clone> NewReservationScreen<C> {
    pub fn new(http: C) -> Self {
        Self::with_clock(http, Arc::new(SystemClock))
    }

    pub fn with_clock(http: C, clock: Arc<dyn Clock>) -> Self {
        let form = ReservationForm::new(clock.today());
        Self {
            restaurants_api: RestaurantApi::new(http.clone()),
            reservations_api: ReservationApi::new(http),
            clock,
            restaurants: Vec::new(),
            form,
            submitting: false,
            notices: Notices::default(),
        }
    }
}

impl<C: HttpClient> NewReservationScreen<C> {
    // ========== State ==========

    /// Restaurants offered in the picker
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn form(&self) -> &ReservationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ReservationForm {
        &mut self.form
    }

    pub fn selected(&self) -> Option<&Restaurant> {
        self.form.restaurant.as_ref()
    }

    /// Whether the confirm button is enabled
    pub fn can_submit(&self) -> bool {
        self.form.restaurant.is_some() && !self.submitting
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.take()
    }

    // ========== Actions ==========

    /// GET /restaurantes for the picker
    pub async fn load_restaurants(&mut self) {
        match self.restaurants_api.get_all().await {
            Ok(restaurants) => self.restaurants = restaurants,
            Err(e) => {
                tracing::error!(error = %e, "failed to load restaurants for picker");
                self.notices.push(Notice::error(LOAD_FAILED));
            }
        }
    }

    /// Pick a restaurant from the loaded list. Returns false for unknown ids.
    pub fn select_restaurant(&mut self, id: i64) -> bool {
        match self.restaurants.iter().find(|r| r.id == id) {
            Some(r) => {
                self.form.restaurant = Some(r.clone());
                true
            }
            None => false,
        }
    }

    /// Validate and POST /reservas.
    ///
    /// Validation failures never reach the network. On success the form is
    /// reset; on failure it keeps what the user typed.
    pub async fn submit(&mut self) -> bool {
        let body = match self.form.validate() {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(error = %e, "reservation form rejected locally");
                self.notices.push(Notice::error(e.to_string()));
                return false;
            }
        };

        self.submitting = true;
        let result = self.reservations_api.create(&body).await;
        self.submitting = false;

        match result {
            Ok(created) => {
                tracing::info!(id = created.id, restaurant_id = body.restaurant_id, "reservation created");
                let restaurant = self
                    .form
                    .restaurant
                    .as_ref()
                    .map(|r| r.name.as_str())
                    .unwrap_or_default();
                let when = chrono::NaiveDate::parse_from_str(&body.date, "%Y-%m-%d")
                    .map(shared::util::format_long_date_es)
                    .unwrap_or_else(|_| body.date.clone());
                self.notices.push(Notice::success_titled(
                    "¡Reserva creada!",
                    format!(
                        "Tu reserva en {restaurant} ha sido confirmada para el {when} a las {}",
                        body.time
                    ),
                ));
                self.reset();
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to create reservation");
                self.notices
                    .push(Notice::error(failure_message(&e, CREATE_FAILED)));
                false
            }
        }
    }

    /// Back to an empty form dated today
    pub fn reset(&mut self) {
        self.form = ReservationForm::new(self.clock.today());
    }
}
