use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PackdexError;

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Card rarity, ordered from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythical,
}

impl Rarity {
    pub const ALL: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythical => "Mythical",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = PackdexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| PackdexError::InvalidArgument(format!("Unknown rarity: {}", s)))
    }
}

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

/// An immutable catalog card.
///
/// `(name, number, variant)` identifies a card uniquely; see [`Card::key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub name: String,
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(rename = "type", default)]
    pub types: Vec<String>,
    pub rarity: Rarity,
    #[serde(rename = "move", default, skip_serializing_if = "Option::is_none")]
    pub move_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
}

impl Card {
    /// Canonical key `"{name}-{number}[-{variant}]"`.
    pub fn key(&self) -> String {
        card_key(&self.name, self.number, self.variant.as_deref())
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t == type_name)
    }

    /// The card's variant, or `""` for the base form.
    pub fn variant_str(&self) -> &str {
        self.variant.as_deref().unwrap_or("")
    }

    pub fn is_base_form(&self) -> bool {
        self.variant.as_deref().map_or(true, str::is_empty)
    }
}

/// Build the canonical key for a `(name, number, variant)` triple.
///
/// An empty variant is treated the same as no variant.
pub fn card_key(name: &str, number: u32, variant: Option<&str>) -> String {
    match variant {
        Some(v) if !v.is_empty() => format!("{}-{}-{}", name, number, v),
        _ => format!("{}-{}", name, number),
    }
}
