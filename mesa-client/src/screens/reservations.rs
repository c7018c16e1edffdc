//! Pending reservations: status chips, actions and expired cleanup

use std::sync::Arc;

use shared::Reservation;

use crate::api::ReservationApi;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::notice::{Notice, Notices};
use crate::status::{Clock, DisplayStatus, SystemClock, sort_by_date};

pub const LOAD_FAILED: &str = "No se pudieron cargar las reservas";
pub const EMPTY_TEXT: &str = "No tienes reservas pendientes";
pub const EMPTY_HINT: &str = "Ve a la pestaña \"Nueva Reserva\" para crear tu primera reserva";

pub const CONFIRM_CANCEL: &str = "¿Estás seguro de que quieres cancelar esta reserva?";
pub const CONFIRM_COMPLETE: &str =
    "¿Estás seguro de que quieres marcar esta reserva como completada?";
pub const CONFIRM_DELETE_COMPLETED: &str = "¿Estás seguro de que quieres eliminar todas las reservas completadas? Esta acción no se puede deshacer.";

/// One rendered entry of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRow<'a> {
    pub reservation: &'a Reservation,
    pub status: DisplayStatus,
    /// e.g. "domingo, 18 de octubre de 2026"
    pub long_date: String,
    pub can_cancel: bool,
}

/// Pending reservations screen
pub struct ReservationsScreen<C = NetworkHttpClient> {
    api: ReservationApi<C>,
    clock: Arc<dyn Clock>,
    reservations: Vec<Reservation>,
    loading: bool,
    notices: Notices,
}

impl<C: HttpClient> ReservationsScreen<C> {
    pub fn new(http: C) -> Self {
        Self::with_clock(http, Arc::new(SystemClock))
    }

    pub fn with_clock(http: C, clock: Arc<dyn Clock>) -> Self {
        Self {
            api: ReservationApi::new(http),
            clock,
            reservations: Vec::new(),
            loading: false,
            notices: Notices::default(),
        }
    }

    // ========== State ==========

    /// Reservations sorted by date, as last fetched
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.take()
    }

    pub fn status_of(&self, reservation: &Reservation) -> DisplayStatus {
        DisplayStatus::classify(reservation.date, self.clock.today())
    }

    /// Rows in display order, each classified against today
    pub fn rows(&self) -> Vec<ReservationRow<'_>> {
        let today = self.clock.today();
        self.reservations
            .iter()
            .map(|r| {
                let status = DisplayStatus::classify(r.date, today);
                ReservationRow {
                    reservation: r,
                    status,
                    long_date: shared::util::format_long_date_es(r.date),
                    can_cancel: status.actions_enabled(),
                }
            })
            .collect()
    }

    // ========== Loading ==========

    /// Entering the screen: load, then purge expired reservations
    pub async fn enter(&mut self) {
        self.load().await;
        self.cleanup_expired().await;
    }

    /// GET /reservas/pendientes; the list is kept on failure
    pub async fn load(&mut self) {
        self.loading = true;
        match self.api.get_pending().await {
            Ok(mut reservations) => {
                sort_by_date(&mut reservations);
                tracing::debug!(count = reservations.len(), "reservations loaded");
                self.reservations = reservations;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load reservations");
                self.notices.push(Notice::error(LOAD_FAILED));
            }
        }
        self.loading = false;
    }

    pub async fn refresh(&mut self) {
        self.load().await;
    }

    /// Ask the server to drop reservations dated before today.
    ///
    /// Returns the number removed. A positive count is reported to the user
    /// and triggers one reload; failures are only logged.
    pub async fn cleanup_expired(&mut self) -> u64 {
        match self.api.delete_expired().await {
            Ok(0) => 0,
            Ok(count) => {
                tracing::info!(count, "expired reservations removed automatically");
                self.notices.push(Notice::info(
                    "Limpieza automática",
                    format!(
                        "Se eliminaron {count} reserva(s) con fecha(s) pasada(s) automáticamente."
                    ),
                ));
                self.load().await;
                count
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to remove expired reservations");
                0
            }
        }
    }

    // ========== Actions ==========

    /// DELETE /reservas/{id}, then reload.
    ///
    /// Refused locally when the listed entry is expired.
    pub async fn cancel(&mut self, id: i64) -> bool {
        let expired = self
            .reservations
            .iter()
            .find(|r| r.id == id)
            .is_some_and(|r| !self.status_of(r).actions_enabled());
        if expired {
            tracing::warn!(id, "cancel refused for expired reservation");
            return false;
        }

        match self.api.cancel(id).await {
            Ok(_) => {
                tracing::info!(id, "reservation cancelled");
                self.notices
                    .push(Notice::success("Reserva cancelada correctamente"));
                self.load().await;
                true
            }
            Err(e) => {
                tracing::error!(id, error = %e, "failed to cancel reservation");
                self.notices
                    .push(Notice::error("No se pudo cancelar la reserva"));
                false
            }
        }
    }

    /// PUT /reservas/{id}/completar, then reload
    pub async fn complete(&mut self, id: i64) -> bool {
        match self.api.mark_completed(id).await {
            Ok(_) => {
                tracing::info!(id, "reservation completed");
                self.notices
                    .push(Notice::success("Reserva marcada como completada"));
                self.load().await;
                true
            }
            Err(e) => {
                tracing::error!(id, error = %e, "failed to complete reservation");
                self.notices.push(Notice::error(
                    "No se pudo marcar la reserva como completada",
                ));
                false
            }
        }
    }

    /// DELETE /reservas/completadas, then reload
    pub async fn delete_completed(&mut self) -> bool {
        match self.api.delete_completed().await {
            Ok(resp) => {
                let message = resp
                    .message
                    .unwrap_or_else(|| "Reservas completadas eliminadas".into());
                tracing::info!(%message, "completed reservations deleted");
                self.notices.push(Notice::success(message));
                self.load().await;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to delete completed reservations");
                self.notices.push(Notice::error(
                    "No se pudieron eliminar las reservas completadas",
                ));
                false
            }
        }
    }
}
