//! Order-related types for the warframe.market REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::Platform;

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Sell,
    Buy,
}

/// Presence of the user who placed an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Ingame,
    Online,
    Offline,
}

/// The user attached to an order row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserShort {
    pub id: String,
    pub ingame_name: String,
    pub status: UserStatus,
    pub region: String,
    pub reputation: i32,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
}

/// A single sell or buy order from `GET /items/{slug}/orders`.
///
/// Orders reference their item only through the request that fetched them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub id: String,
    /// Price per unit in platinum
    pub platinum: u32,
    pub quantity: u32,
    pub order_type: OrderType,
    pub platform: Platform,
    pub region: String,
    pub visible: bool,
    pub creation_date: DateTime<Utc>,
    pub last_update: DateTime<Utc>,
    /// Rank for mods and arcanes
    #[serde(default)]
    pub mod_rank: Option<u32>,
    /// Subtype for relics, fish, etc. (e.g. `"radiant"`)
    #[serde(default)]
    pub subtype: Option<String>,
    pub user: UserShort,
}

impl OrderRow {
    pub fn is_sell(&self) -> bool {
        self.order_type == OrderType::Sell
    }

    pub fn is_buy(&self) -> bool {
        self.order_type == OrderType::Buy
    }
}
