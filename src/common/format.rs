// src/common/format.rs

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

/// Preço em VND: sem casas decimais, milhar com ponto, sufixo "₫".
pub fn format_price(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}{grouped} ₫")
}

/// dd/mm/aaaa; vazio quando a data não veio.
pub fn format_date(value: Option<NaiveDateTime>) -> String {
    value
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}
