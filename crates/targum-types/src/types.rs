use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Interface language for labels and text direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Hebrew,
    English,
}

impl Language {
    pub fn direction(self) -> TextDirection {
        match self {
            Language::Hebrew => TextDirection::Rtl,
            Language::English => TextDirection::Ltr,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Hebrew => f.write_str("hebrew"),
            Language::English => f.write_str("english"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hebrew" | "he" => Ok(Language::Hebrew),
            "english" | "en" => Ok(Language::English),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Rtl,
    Ltr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_follows_language() {
        assert_eq!(Language::Hebrew.direction(), TextDirection::Rtl);
        assert_eq!(Language::English.direction(), TextDirection::Ltr);
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("Hebrew".parse::<Language>(), Ok(Language::Hebrew));
        assert_eq!("en".parse::<Language>(), Ok(Language::English));
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_serde_lowercase() {
        let json = serde_json::to_string(&Language::English).unwrap();
        assert_eq!(json, "\"english\"");
        let parsed: Language = serde_json::from_str("\"hebrew\"").unwrap();
        assert_eq!(parsed, Language::Hebrew);
    }
}
