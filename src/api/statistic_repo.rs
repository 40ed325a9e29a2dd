// src/api/statistic_repo.rs

use reqwest::Client;

use crate::{
    common::{
        error::AppError,
        http_utils::{endpoint, read_json},
    },
    models::statistic::{StatisticQuery, StatisticSnapshot},
};

#[derive(Clone)]
pub struct StatisticRepository {
    client: Client,
    base_url: String,
}

impl StatisticRepository {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    // GET /statistics?month=&year=
    pub async fn get_statistic(
        &self,
        token: &str,
        query: &StatisticQuery,
    ) -> Result<StatisticSnapshot, AppError> {
        let response = self
            .client
            .get(endpoint(&self.base_url, "statistics"))
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;

        read_json(response).await
    }
}
