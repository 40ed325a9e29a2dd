// src/common/datetime.rs

// O backend manda datas ora em RFC 3339 ("2023-12-01T10:00:00Z"), ora como
// LocalDateTime sem fuso ("2023-12-01T10:00:00.123"). Guardamos tudo como
// NaiveDateTime no horário em que veio.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de::Error as _, Deserialize, Deserializer};

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| raw.parse::<NaiveDateTime>().ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Para usar com `#[serde(default, deserialize_with = ...)]`.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_timestamp(&s)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("data inválida: {s}"))),
    }
}
