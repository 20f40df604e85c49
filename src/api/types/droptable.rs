//! Drop table types: which sources yield an item and how often.

use serde::{Deserialize, Serialize};

/// Drop rarity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// Drop chance (percent) for each relic refinement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelicRates {
    pub intact: f64,
    pub exceptional: f64,
    pub flawless: f64,
    pub radiant: f64,
}

/// A relic that contains the item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelicDrop {
    /// Relic item id
    pub id: String,
    pub rarity: Rarity,
    pub rates: RelicRates,
}

/// A mission node that rewards the item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub mission_id: String,
    pub node_id: String,
    pub rarity: Rarity,
    /// Drop chance in percent
    pub rate: f64,
    #[serde(default)]
    pub rotation: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub item_subtype: Option<String>,
}

/// An enemy that drops the item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub npc_id: String,
    pub rarity: Rarity,
    /// Drop chance in percent
    pub rate: f64,
}

/// Every known source of one item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DropTable {
    #[serde(default)]
    pub relics: Vec<RelicDrop>,
    #[serde(default)]
    pub missions: Vec<Mission>,
    #[serde(default)]
    pub npc: Vec<Npc>,
}

impl DropTable {
    pub fn is_empty(&self) -> bool {
        self.relics.is_empty() && self.missions.is_empty() && self.npc.is_empty()
    }
}
