//! The fixed set of documented endpoints.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::shared::{format_name, Language, Platform};

const LANGUAGE: HeaderName = HeaderName::from_static("language");
const PLATFORM: HeaderName = HeaderName::from_static("platform");

/// One documented endpoint with its arguments already defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `GET /items`
    Items { language: Language },
    /// `GET /items/{slug}`
    Item { name: &'a str, platform: Platform },
    /// `GET /items/{slug}/orders[?include=item]`
    Orders {
        name: &'a str,
        include_items: bool,
        platform: Platform,
    },
    /// `GET /items/{slug}/droptables[?include=item]`
    DropTables {
        name: &'a str,
        include_items: bool,
        language: Language,
    },
}

impl Endpoint<'_> {
    /// Path relative to the API root, with the item name slugified.
    pub fn path(&self) -> String {
        match *self {
            Self::Items { .. } => "/items".to_string(),
            Self::Item { name, .. } => item_path(name),
            Self::Orders {
                name,
                include_items,
                ..
            } => with_include(format!("{}/orders", item_path(name)), include_items),
            Self::DropTables {
                name,
                include_items,
                ..
            } => with_include(format!("{}/droptables", item_path(name)), include_items),
        }
    }

    /// Endpoint-specific request headers.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        match *self {
            Self::Items { language } | Self::DropTables { language, .. } => {
                headers.insert(LANGUAGE, HeaderValue::from_static(language.as_str()));
            }
            Self::Item { platform, .. } | Self::Orders { platform, .. } => {
                headers.insert(PLATFORM, HeaderValue::from_static(platform.as_str()));
            }
        }
        headers
    }

    /// Whether the response carries an `include` block.
    pub fn includes_items(&self) -> bool {
        match *self {
            Self::Orders { include_items, .. } | Self::DropTables { include_items, .. } => {
                include_items
            }
            _ => false,
        }
    }
}

fn item_path(name: &str) -> String {
    format!("/items/{}", item_segment(&format_name(name)))
}

/// Percent-encode a slug as one path segment.
///
/// URL parsers collapse `.` and `..` (and their `%2E` spellings) as dot
/// segments, so an all-dot slug has its `%` escaped as well and reaches the
/// item route as a literal, unknown slug.
fn item_segment(slug: &str) -> String {
    if !slug.is_empty() && slug.bytes().all(|b| b == b'.') {
        return "%252E".repeat(slug.len());
    }
    urlencoding::encode(slug).into_owned()
}

fn with_include(path: String, include_items: bool) -> String {
    if include_items {
        format!("{}?include=item", path)
    } else {
        path
    }
}
