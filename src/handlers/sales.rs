// src/handlers/sales.rs

use std::ops::RangeInclusive;

use chrono::Local;
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    config::AdminContext,
    middleware::auth::AuthenticatedSession,
    models::statistic::StatisticSnapshot,
    services::statistic_service::resolve_period,
};

pub const DEFAULT_MONTH: u32 = 12;
pub const DEFAULT_YEAR: i32 = 2023;

// Tela de vendas: faturamento do mês escolhido
pub struct SalesPage {
    ctx: AdminContext,
    data: Option<StatisticSnapshot>,
    is_loading: bool,
    selected_month: Option<u32>,
    selected_year: Option<i32>,
}

impl SalesPage {
    pub fn new(ctx: AdminContext) -> Self {
        Self {
            ctx,
            data: None,
            is_loading: true,
            selected_month: Some(DEFAULT_MONTH),
            selected_year: Some(DEFAULT_YEAR),
        }
    }

    /// Abre a tela já num período; `None` cai no mês/ano corrente.
    pub fn with_period(ctx: AdminContext, month: Option<u32>, year: Option<i32>) -> Self {
        Self {
            selected_month: month,
            selected_year: year,
            ..Self::new(ctx)
        }
    }

    pub async fn mount(&mut self) -> Result<(), AppError> {
        AuthenticatedSession::from_store(&self.ctx.store)?;
        self.fetch_data().await;
        Ok(())
    }

    pub async fn select_month(&mut self, month: Option<u32>) {
        self.selected_month = month;
        self.fetch_data().await;
    }

    pub async fn select_year(&mut self, year: Option<i32>) {
        self.selected_year = year;
        self.fetch_data().await;
    }

    /// Uma busca por mudança de mês/ano; mês/ano vazios viram o atual.
    pub async fn fetch_data(&mut self) {
        let session = match AuthenticatedSession::from_store(&self.ctx.store) {
            Ok(session) => session,
            Err(err) => return self.ctx.report_read_failure("estatísticas", &err),
        };

        let query = resolve_period(
            self.selected_month,
            self.selected_year,
            Local::now().date_naive(),
        );

        match self.ctx.statistic_service.get_statistic(&session, query).await {
            Ok(snapshot) => {
                self.data = Some(snapshot);
                self.is_loading = false;
            }
            Err(err) => self.ctx.report_read_failure("estatísticas", &err),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn snapshot(&self) -> Option<&StatisticSnapshot> {
        self.data.as_ref()
    }

    pub fn income(&self) -> Option<Decimal> {
        self.data.as_ref().map(|s| s.income)
    }

    pub fn selected_month(&self) -> Option<u32> {
        self.selected_month
    }

    pub fn selected_year(&self) -> Option<i32> {
        self.selected_year
    }

    pub fn month_options() -> RangeInclusive<u32> {
        1..=12
    }

    pub fn year_options() -> RangeInclusive<i32> {
        DEFAULT_YEAR..=DEFAULT_YEAR + 4
    }
}
