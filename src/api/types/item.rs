//! Item-related types for the warframe.market REST API.

use serde::{Deserialize, Serialize};

use crate::shared::Language;

/// Entry of `GET /items`: minimal item identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemShort {
    /// Item id (hex object id)
    pub id: String,
    /// URL slug used in item paths
    pub url_name: String,
    /// Thumbnail path relative to the static asset root
    pub thumb: String,
    /// Name in the requested language
    pub item_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vaulted: Option<bool>,
}

/// Where a part drops, as listed on the item page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDrop {
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Per-language block of an [`ItemFull`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemLocale {
    pub item_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub wiki_link: Option<String>,
    #[serde(default)]
    pub drop: Vec<ItemDrop>,
}

/// Full item detail, one entry of `items_in_set`.
///
/// Items that belong to a set are always returned together with the rest of
/// the set; `set_root` marks the set object itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFull {
    pub id: String,
    pub url_name: String,
    pub icon: String,
    pub thumb: String,
    #[serde(default)]
    pub icon_format: Option<String>,
    #[serde(default)]
    pub sub_icon: Option<String>,
    pub tags: Vec<String>,
    pub set_root: bool,
    #[serde(default)]
    pub trading_tax: Option<u32>,
    #[serde(default)]
    pub ducats: Option<u32>,
    #[serde(default)]
    pub mastery_level: Option<u32>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub mod_max_rank: Option<u32>,
    #[serde(default)]
    pub quantity_for_set: Option<u32>,
    #[serde(default)]
    pub subtypes: Option<Vec<String>>,

    pub en: ItemLocale,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ru: Option<ItemLocale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ko: Option<ItemLocale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub de: Option<ItemLocale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fr: Option<ItemLocale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pt: Option<ItemLocale>,
    #[serde(default, rename = "zh-hans", skip_serializing_if = "Option::is_none")]
    pub zh_hans: Option<ItemLocale>,
    #[serde(default, rename = "zh-hant", skip_serializing_if = "Option::is_none")]
    pub zh_hant: Option<ItemLocale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub es: Option<ItemLocale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub it: Option<ItemLocale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pl: Option<ItemLocale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uk: Option<ItemLocale>,
}

impl ItemFull {
    /// Locale block for `language`, falling back to English when the
    /// response did not include that language.
    pub fn locale(&self, language: Language) -> &ItemLocale {
        let block = match language {
            Language::English => None,
            Language::Russian => self.ru.as_ref(),
            Language::Korean => self.ko.as_ref(),
            Language::German => self.de.as_ref(),
            Language::French => self.fr.as_ref(),
            Language::Portuguese => self.pt.as_ref(),
            Language::ChineseSimplified => self.zh_hans.as_ref(),
            Language::ChineseTraditional => self.zh_hant.as_ref(),
            Language::Spanish => self.es.as_ref(),
            Language::Italian => self.it.as_ref(),
            Language::Polish => self.pl.as_ref(),
            Language::Ukrainian => self.uk.as_ref(),
        };
        block.unwrap_or(&self.en)
    }

    /// English display name.
    pub fn name(&self) -> &str {
        &self.en.item_name
    }
}
