// src/api/order_repo.rs

use reqwest::Client;

use crate::{
    common::{
        error::AppError,
        http_utils::{endpoint, read_json},
    },
    models::order::{Order, OrderStatus, UpdateStatusPayload, UpdateStatusResponse},
};

// Acesso HTTP aos pedidos. Sem regra de negócio aqui.
#[derive(Clone)]
pub struct OrderRepository {
    client: Client,
    base_url: String,
}

impl OrderRepository {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    // GET /orders
    pub async fn get_all_orders(&self, token: &str) -> Result<Vec<Order>, AppError> {
        let response = self
            .client
            .get(endpoint(&self.base_url, "orders"))
            .bearer_auth(token)
            .send()
            .await?;

        read_json(response).await
    }

    // PUT /orders/{id}/status
    pub async fn update_order_status(
        &self,
        token: &str,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<UpdateStatusResponse, AppError> {
        let response = self
            .client
            .put(endpoint(&self.base_url, &format!("orders/{order_id}/status")))
            .bearer_auth(token)
            .json(&UpdateStatusPayload { status })
            .send()
            .await?;

        read_json(response).await
    }
}
