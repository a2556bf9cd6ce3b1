use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{PackdexError, Result};

// ---------------------------------------------------------------------------
// Requirement
// ---------------------------------------------------------------------------

/// One required card of a card-list achievement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub card_key: String,
    /// Requirements sharing a base key form one completion group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_key_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// `Some(true)` only counts shiny copies; `Some(false)` and `None` count any copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_shiny: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_count: Option<u32>,
}

impl Requirement {
    pub fn card(card_key: &str) -> Self {
        Self {
            card_key: card_key.to_string(),
            ..Default::default()
        }
    }

    pub fn variant(card_key: &str, variant: &str) -> Self {
        Self {
            card_key: card_key.to_string(),
            variant: Some(variant.to_string()),
            ..Default::default()
        }
    }

    /// Collection key this requirement reads: `card_key`, suffixed with
    /// `-{variant}` when a variant is given.
    pub fn lookup_key(&self) -> String {
        match self.variant.as_deref() {
            Some(v) if !v.is_empty() => format!("{}-{}", self.card_key, v),
            _ => self.card_key.clone(),
        }
    }

    /// Completion group this requirement belongs to.
    pub fn group_key(&self) -> &str {
        self.card_key_base.as_deref().unwrap_or(&self.card_key)
    }

    /// Effective minimum count; zero or unset means 1.
    pub fn threshold(&self) -> u32 {
        self.min_count.filter(|n| *n > 0).unwrap_or(1)
    }

    pub fn requires_shiny(&self) -> bool {
        self.is_shiny == Some(true)
    }
}

// ---------------------------------------------------------------------------
// CollectionGoal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalProperty {
    Type,
    Rarity,
    IsShiny,
    Region,
}

/// A counting threshold over the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionGoal {
    pub property: GoalProperty,
    /// Ignored for [`GoalProperty::IsShiny`]; required by the other properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub target_count: u32,
}

// ---------------------------------------------------------------------------
// Achievement
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AchievementGoal {
    RequiredCards(Vec<Requirement>),
    Collection(CollectionGoal),
}

/// An achievement definition. Completion is always derived from the
/// collection, never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AchievementRecord", into = "AchievementRecord")]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub show_icons: bool,
    pub goal: AchievementGoal,
}

/// Wire shape of an achievement, with the two goal kinds as optional fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub show_icons: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_cards: Option<Vec<Requirement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_goal: Option<CollectionGoal>,
}

impl TryFrom<AchievementRecord> for Achievement {
    type Error = PackdexError;

    fn try_from(record: AchievementRecord) -> Result<Self> {
        let goal = match (record.required_cards, record.collection_goal) {
            (Some(cards), None) => AchievementGoal::RequiredCards(cards),
            (None, Some(goal)) => AchievementGoal::Collection(goal),
            (Some(_), Some(_)) => {
                return Err(PackdexError::InvalidArgument(format!(
                    "Achievement '{}' has both requiredCards and collectionGoal",
                    record.id
                )))
            }
            (None, None) => {
                return Err(PackdexError::InvalidArgument(format!(
                    "Achievement '{}' has neither requiredCards nor collectionGoal",
                    record.id
                )))
            }
        };
        Ok(Self {
            id: record.id,
            name: record.name,
            description: record.description,
            show_icons: record.show_icons,
            goal,
        })
    }
}

impl From<Achievement> for AchievementRecord {
    fn from(a: Achievement) -> Self {
        let (required_cards, collection_goal) = match a.goal {
            AchievementGoal::RequiredCards(cards) => (Some(cards), None),
            AchievementGoal::Collection(goal) => (None, Some(goal)),
        };
        Self {
            id: a.id,
            name: a.name,
            description: a.description,
            show_icons: a.show_icons,
            required_cards,
            collection_goal,
        }
    }
}

impl Achievement {
    pub fn cards(id: &str, name: &str, description: &str, requirements: Vec<Requirement>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            show_icons: true,
            goal: AchievementGoal::RequiredCards(requirements),
        }
    }

    pub fn goal(
        id: &str,
        name: &str,
        description: &str,
        property: GoalProperty,
        value: Option<&str>,
        target_count: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            show_icons: false,
            goal: AchievementGoal::Collection(CollectionGoal {
                property,
                value: value.map(str::to_string),
                target_count,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// AchievementSet
// ---------------------------------------------------------------------------

/// An ordered list of achievements with unique ids.
#[derive(Debug, Clone, Default)]
pub struct AchievementSet {
    achievements: Vec<Achievement>,
}

impl AchievementSet {
    pub fn new(achievements: Vec<Achievement>) -> Result<Self> {
        let mut seen = HashSet::new();
        for a in &achievements {
            if !seen.insert(a.id.as_str()) {
                return Err(PackdexError::InvalidArgument(format!(
                    "Duplicate achievement id: {}",
                    a.id
                )));
            }
        }
        Ok(Self { achievements })
    }

    /// Parse a JSON array of achievement records.
    pub fn from_json(json: &str) -> Result<Self> {
        let achievements: Vec<Achievement> = serde_json::from_str(json)?;
        Self::new(achievements)
    }

    pub fn get(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn as_slice(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn iter(&self) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter()
    }

    pub fn len(&self) -> usize {
        self.achievements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.achievements.is_empty()
    }

    /// The built-in achievement list.
    pub fn standard() -> Self {
        use GoalProperty::*;

        let mut list = vec![
            Achievement::cards(
                "starters",
                "First Picks",
                "Collect all First Partner Pokémon.",
                [
                    "Bulbasaur-1", "Charmander-4", "Squirtle-7", "Chikorita-152", "Cyndaquil-155",
                    "Totodile-158", "Treecko-252", "Torchic-255", "Mudkip-258", "Turtwig-387",
                    "Chimchar-390", "Piplup-393", "Snivy-495", "Tepig-498", "Oshawott-501",
                    "Chespin-650", "Fennekin-653", "Froakie-656", "Rowlet-722", "Litten-725",
                    "Popplio-728", "Grookey-810", "Scorbunny-813", "Sobble-816", "Sprigatito-906",
                    "Fuecoco-909", "Quaxly-912",
                ]
                .iter()
                .map(|k| Requirement::card(k))
                .collect(),
            ),
            Achievement::cards(
                "eevee",
                "Veevee Volley",
                "Collect Eevee and all of its Evolutions",
                vec![
                    Requirement::card("Eevee-133"),
                    Requirement::card("Vaporeon-134"),
                    Requirement::card("Jolteon-135"),
                    Requirement::card("Flareon-136"),
                    Requirement::card("Espeon-196"),
                    Requirement::card("Umbreon-197"),
                    Requirement::card("Leafeon-470"),
                    Requirement::card("Glaceon-471"),
                    Requirement::card("Sylveon-700"),
                    Requirement::variant("GMax Eevee-133", "GMax"),
                ],
            ),
            Achievement::cards(
                "regi",
                "ÜN ÜN ÜN",
                "Collect Regigigas and the Legendary Titans",
                [
                    "Regigigas-486",
                    "Regirock-377",
                    "Regice-378",
                    "Registeel-379",
                    "Regieleki-894",
                    "Regidrago-895",
                ]
                .iter()
                .map(|k| Requirement::card(k))
                .collect(),
            ),
            Achievement::cards(
                "tao",
                "Truth/Ideals",
                "Collect Reshiram, Zekrom, and Kyurem",
                vec![
                    Requirement::card("Reshiram-643"),
                    Requirement::variant("Kyurem (White)-646", "White"),
                    Requirement::card("Kyurem-646"),
                    Requirement::variant("Kyurem (Black)-646", "Black"),
                    Requirement::card("Zekrom-644"),
                ],
            ),
            Achievement::cards(
                "apple",
                "An Applin a Day",
                "Collect Applin and all of its Evolutions and Forms",
                vec![
                    Requirement::card("Applin-840"),
                    Requirement::card("Flapple-841"),
                    Requirement::variant("GMax Flapple-841", "GMax"),
                    Requirement::card("Appletun-842"),
                    Requirement::variant("GMax Appletun-842", "GMax"),
                    Requirement::card("Dipplin-1011"),
                    Requirement::card("Hydrapple-1019"),
                ],
            ),
            Achievement::cards(
                "legendary-birds",
                "Uno, Dos, Tres",
                "Collect all forms of the Legendary Birds",
                vec![
                    Requirement::card("Articuno-144"),
                    Requirement::card("Zapdos-145"),
                    Requirement::card("Moltres-146"),
                    Requirement::variant("Articuno (Galar)-144", "Galar"),
                    Requirement::variant("Zapdos (Galar)-145", "Galar"),
                    Requirement::variant("Moltres (Galar)-146", "Galar"),
                ],
            ),
        ];

        const TYPE_COLLECTORS: &[(&str, &str, &str)] = &[
            ("normal", "Normal", "Schoolkid"),
            ("fighting", "Fighting", "Black Belt"),
            ("flying", "Flying", "Bird Keeper"),
            ("poison", "Poison", "Punk"),
            ("ground", "Ground", "Ruin Maniac"),
            ("rock", "Rock", "Hiker"),
            ("bug", "Bug", "Bug Catcher"),
            ("ghost", "Ghost", "Hex Maniac"),
            ("steel", "Steel", "Steel Worker"),
            ("fire", "Fire", "Kindler"),
            ("water", "Water", "Swimmer"),
            ("grass", "Grass", "Aroma Lady"),
            ("electric", "Electric", "Rocker"),
            ("psychic", "Psychic", "Psychic"),
            ("ice", "Ice", "Skier"),
            ("dragon", "Dragon", "Dragon Tamer"),
            ("dark", "Dark", "Delinquent"),
            ("fairy", "Fairy", "Fairy Tale Girl"),
        ];
        for (slug, type_name, title) in TYPE_COLLECTORS {
            list.push(Achievement::goal(
                &format!("{}-collector", slug),
                title,
                &format!("Collect 100 {}-Type cards.", type_name),
                Type,
                Some(*type_name),
                100,
            ));
        }

        list.push(Achievement::goal(
            "stellar-collector",
            "The 19th Type",
            "Collect 5 Stellar-Type cards.",
            Type,
            Some("Stellar"),
            5,
        ));
        list.push(Achievement::goal(
            "shiny-hunter",
            "Shiny Hunter",
            "Collect 10 Shiny Pokémon cards.",
            IsShiny,
            None,
            10,
        ));
        list.push(Achievement::goal(
            "mythical-master",
            "Mythical Master",
            "Collect 10 Mythical Pokémon cards.",
            Rarity,
            Some("Mythical"),
            10,
        ));

        Self { achievements: list }
    }
}
