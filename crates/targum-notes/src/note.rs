use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    /// ISO-8601 creation timestamp
    pub date: String,
}

impl Note {
    /// Empty draft with a fresh id, stamped now
    pub fn draft() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: String::new(),
            content: String::new(),
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// `dd/MM/yyyy HH:mm` in local time, or the raw string if it doesn't parse
pub fn format_date(date: &str) -> String {
    format_date_in(date, &Local)
}

pub fn format_date_in<Tz>(date: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(date) {
        Ok(parsed) => parsed.with_timezone(tz).format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => date.to_string(),
    }
}
