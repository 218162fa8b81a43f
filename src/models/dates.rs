//! Date fields as the API sends them
//!
//! Days arrive either as `2024-06-03` or as full timestamps like
//! `2024-06-03T10:00:00.000Z`. Only the calendar day is kept.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

fn parse_day<E: serde::de::Error>(raw: &str) -> Result<NaiveDate, E> {
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(E::custom)
}

pub(crate) fn de_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_day(&raw)
}

/// Like `de_day`, but `null` or a missing field reads as `None`
pub(crate) fn de_opt_day<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_day(&raw).map(Some),
        None => Ok(None),
    }
}
