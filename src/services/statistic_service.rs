// src/services/statistic_service.rs

use chrono::{Datelike, NaiveDate};
use validator::Validate;

use crate::{
    api::StatisticRepository,
    common::error::AppError,
    middleware::auth::AuthenticatedSession,
    models::statistic::{StatisticQuery, StatisticSnapshot},
};

#[derive(Clone)]
pub struct StatisticService {
    repo: StatisticRepository,
}

impl StatisticService {
    pub fn new(repo: StatisticRepository) -> Self {
        Self { repo }
    }

    pub async fn get_statistic(
        &self,
        session: &AuthenticatedSession,
        query: StatisticQuery,
    ) -> Result<StatisticSnapshot, AppError> {
        query.validate()?;
        let snapshot = self.repo.get_statistic(session.token(), &query).await?;
        tracing::info!(
            "📈 Estatística {:02}/{}: faturamento {}",
            query.month,
            query.year,
            snapshot.income
        );
        Ok(snapshot)
    }
}

/// Mês/ano ausentes (ou zero) caem no mês/ano de `today`.
pub fn resolve_period(month: Option<u32>, year: Option<i32>, today: NaiveDate) -> StatisticQuery {
    StatisticQuery {
        month: month.filter(|m| *m != 0).unwrap_or_else(|| today.month()),
        year: year.filter(|y| *y != 0).unwrap_or_else(|| today.year()),
    }
}
