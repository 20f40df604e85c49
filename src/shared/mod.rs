//! Shared types used across the API module.
//!
//! `Language` and `Platform` are the typed forms of the `Language` and
//! `Platform` request headers. They serialize to exactly the strings the
//! backend expects.

pub mod slug;

pub use slug::format_name;

use crate::api::error::ApiError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Language
// ============================================================================

/// Response language, sent as the `Language` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "zh-hans")]
    ChineseSimplified,
    #[serde(rename = "zh-hant")]
    ChineseTraditional,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "uk")]
    Ukrainian,
}

impl Language {
    pub const ALL: [Language; 12] = [
        Self::English,
        Self::Russian,
        Self::Korean,
        Self::German,
        Self::French,
        Self::Portuguese,
        Self::ChineseSimplified,
        Self::ChineseTraditional,
        Self::Spanish,
        Self::Italian,
        Self::Polish,
        Self::Ukrainian,
    ];

    /// Header value for this language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
            Self::Korean => "ko",
            Self::German => "de",
            Self::French => "fr",
            Self::Portuguese => "pt",
            Self::ChineseSimplified => "zh-hans",
            Self::ChineseTraditional => "zh-hant",
            Self::Spanish => "es",
            Self::Italian => "it",
            Self::Polish => "pl",
            Self::Ukrainian => "uk",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ApiError::InvalidParameter(format!("unsupported language '{}'", s)))
    }
}

// ============================================================================
// Platform
// ============================================================================

/// Trading platform, sent as the `Platform` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Pc,
    Xbox,
    Ps4,
    Switch,
}

impl Platform {
    pub const ALL: [Platform; 4] = [Self::Pc, Self::Xbox, Self::Ps4, Self::Switch];

    /// Header value for this platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pc => "pc",
            Self::Xbox => "xbox",
            Self::Ps4 => "ps4",
            Self::Switch => "switch",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ApiError::InvalidParameter(format!("unsupported platform '{}'", s)))
    }
}
