use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuickTranslateError;

/// Languages offered by the source and target selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    /// All selectable languages, in display order
    pub const ALL: [Language; 7] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Japanese,
        Language::Chinese,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::Italian => "it",
            Self::Japanese => "ja",
            Self::Chinese => "zh",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Italian => "Italian",
            Self::Japanese => "Japanese",
            Self::Chinese => "Chinese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = QuickTranslateError;

    /// Accepts either a two-letter code or a language name, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == needle || lang.name().to_lowercase() == needle)
            .ok_or_else(|| QuickTranslateError::UnsupportedLanguage(s.trim().to_string()))
    }
}

/// Ordered (source, target) pair sent to the endpoint as `source|target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: Language,
    pub target: Language,
}

impl LanguagePair {
    pub fn new(source: Language, target: Language) -> Self {
        Self { source, target }
    }

    pub fn swapped(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }

    pub fn langpair(&self) -> String {
        format!("{}|{}", self.source.code(), self.target.code())
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new(Language::English, Language::Spanish)
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order_and_codes() {
        let codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, ["en", "es", "fr", "de", "it", "ja", "zh"]);
    }

    #[test]
    fn test_parse_code_or_name() {
        assert_eq!("ja".parse::<Language>().unwrap(), Language::Japanese);
        assert_eq!("German".parse::<Language>().unwrap(), Language::German);
        assert_eq!(" chinese ".parse::<Language>().unwrap(), Language::Chinese);
        assert_eq!("FR".parse::<Language>().unwrap(), Language::French);
    }

    #[test]
    fn test_parse_unknown_language() {
        let err = "ko".parse::<Language>().unwrap_err();
        assert!(matches!(err, QuickTranslateError::UnsupportedLanguage(code) if code == "ko"));
    }

    #[test]
    fn test_pair_swap_and_wire_format() {
        let pair = LanguagePair::default();
        assert_eq!(pair.langpair(), "en|es");
        assert_eq!(pair.swapped().langpair(), "es|en");
        assert_eq!(pair.swapped().swapped(), pair);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Italian).unwrap();
        assert_eq!(json, "\"it\"");
        let lang: Language = serde_json::from_str("\"zh\"").unwrap();
        assert_eq!(lang, Language::Chinese);
    }
}
