use shared::{ApiResponse, NewReservation, Reservation};

use super::{Ack, accept, accept_data};
use crate::http::{HttpClient, NetworkHttpClient};
use crate::ClientResult;

/// `/reservas` endpoints
#[derive(Debug, Clone)]
pub struct ReservationApi<C = NetworkHttpClient> {
    http: C,
}

impl<C: HttpClient> ReservationApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// GET /reservas
    pub async fn get_all(&self) -> ClientResult<Vec<Reservation>> {
        let resp: ApiResponse<Vec<Reservation>> = self.http.get("reservas").await?;
        accept_data(resp, "reservation list")
    }

    /// GET /reservas/pendientes
    pub async fn get_pending(&self) -> ClientResult<Vec<Reservation>> {
        let resp: ApiResponse<Vec<Reservation>> = self.http.get("reservas/pendientes").await?;
        accept_data(resp, "reservation list")
    }

    /// GET /reservas/restaurante/{id}
    pub async fn get_by_restaurant(&self, restaurant_id: i64) -> ClientResult<Vec<Reservation>> {
        let resp: ApiResponse<Vec<Reservation>> = self
            .http
            .get(&format!("reservas/restaurante/{restaurant_id}"))
            .await?;
        accept_data(resp, "reservation list")
    }

    /// POST /reservas
    pub async fn create(&self, reservation: &NewReservation) -> ClientResult<Reservation> {
        let resp: ApiResponse<Reservation> = self.http.post("reservas", reservation).await?;
        accept_data(resp, "reservation")
    }

    /// DELETE /reservas/{id}
    pub async fn cancel(&self, id: i64) -> ClientResult<Ack> {
        let resp: Ack = self.http.delete(&format!("reservas/{id}")).await?;
        accept(resp)
    }

    /// PUT /reservas/{id}/completar
    pub async fn mark_completed(&self, id: i64) -> ClientResult<Ack> {
        let resp: Ack = self.http.put_empty(&format!("reservas/{id}/completar")).await?;
        accept(resp)
    }

    /// DELETE /reservas/completadas
    pub async fn delete_completed(&self) -> ClientResult<Ack> {
        let resp: Ack = self.http.delete("reservas/completadas").await?;
        accept(resp)
    }

    /// PUT /reservas/marcar-vencidas
    ///
    /// Returns how many past reservations the server marked completed.
    pub async fn mark_expired(&self) -> ClientResult<u64> {
        let resp: Ack = self.http.put_empty("reservas/marcar-vencidas").await?;
        Ok(accept(resp)?.count.unwrap_or(0))
    }

    /// DELETE /reservas/eliminar-vencidas
    ///
    /// Returns how many past reservations the server removed.
    pub async fn delete_expired(&self) -> ClientResult<u64> {
        let resp: Ack = self.http.delete("reservas/eliminar-vencidas").await?;
        Ok(accept(resp)?.count.unwrap_or(0))
    }
}
