use shared::{ApiResponse, Restaurant, RestaurantInput};

use super::{Ack, accept, accept_data};
use crate::http::{HttpClient, NetworkHttpClient};
use crate::ClientResult;

/// `/restaurantes` endpoints
#[derive(Debug, Clone)]
pub struct RestaurantApi<C = NetworkHttpClient> {
    http: C,
}

impl<C: HttpClient> RestaurantApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// GET /restaurantes
    pub async fn get_all(&self) -> ClientResult<Vec<Restaurant>> {
        let resp: ApiResponse<Vec<Restaurant>> = self.http.get("restaurantes").await?;
        accept_data(resp, "restaurant list")
    }

    /// GET /restaurantes/{id}
    pub async fn get_by_id(&self, id: i64) -> ClientResult<Restaurant> {
        let resp: ApiResponse<Restaurant> = self.http.get(&format!("restaurantes/{id}")).await?;
        accept_data(resp, "restaurant")
    }

    /// POST /restaurantes
    pub async fn create(&self, input: &RestaurantInput) -> ClientResult<Restaurant> {
        let resp: ApiResponse<Restaurant> = self.http.post("restaurantes", input).await?;
        accept_data(resp, "restaurant")
    }

    /// PUT /restaurantes/{id}
    pub async fn update(&self, id: i64, input: &RestaurantInput) -> ClientResult<Restaurant> {
        let resp: ApiResponse<Restaurant> =
            self.http.put(&format!("restaurantes/{id}"), input).await?;
        accept_data(resp, "restaurant")
    }

    /// DELETE /restaurantes/{id}
    pub async fn delete(&self, id: i64) -> ClientResult<Ack> {
        let resp: Ack = self.http.delete(&format!("restaurantes/{id}")).await?;
        accept(resp)
    }

    /// GET /restaurantes/filtrar
    ///
    /// Server-side variant of the letter/city filter. Empty criteria are
    /// left out of the query string.
    pub async fn filter(&self, letter: &str, city: &str) -> ClientResult<Vec<Restaurant>> {
        let mut query = Vec::with_capacity(2);
        if !letter.is_empty() {
            query.push(("letra", letter));
        }
        if !city.is_empty() {
            query.push(("ciudad", city));
        }
        let resp: ApiResponse<Vec<Restaurant>> =
            self.http.get_with_query("restaurantes/filtrar", &query).await?;
        accept_data(resp, "restaurant list")
    }
}
