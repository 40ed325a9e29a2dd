// src/models/statistic.rs

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

// Resposta do GET /statistics: o faturamento do mês + as séries do gráfico.
// As séries são repassadas como vieram, o gráfico não é problema nosso.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticSnapshot {
    #[serde(default, deserialize_with = "crate::common::serde_utils::null_as_default")]
    pub income: Decimal,
    #[serde(flatten)]
    pub series: BTreeMap<String, Value>,
}

// Parâmetros da consulta (?month=&year=)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Validate)]
pub struct StatisticQuery {
    #[validate(range(min = 1, max = 12, message = "Mês inválido."))]
    pub month: u32,
    #[validate(range(min = 1, message = "Ano inválido."))]
    pub year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_chart_series_opaque() {
        let snapshot: StatisticSnapshot = serde_json::from_str(
            r#"{"income": 3500000, "dailyIncome": [100, 200], "orderCount": 7}"#,
        )
        .unwrap();
        assert_eq!(snapshot.income, Decimal::from(3_500_000));
        assert_eq!(snapshot.series.len(), 2);
        assert_eq!(snapshot.series["orderCount"], 7);
    }

    #[test]
    fn month_out_of_range_is_invalid() {
        assert!(StatisticQuery { month: 13, year: 2023 }.validate().is_err());
        assert!(StatisticQuery { month: 12, year: 2023 }.validate().is_ok());
    }
}
