//! Shared test fixtures for the packdex integration tests.
//!
//! Provides a small sample catalog and scripted random sources so draws are
//! fully deterministic.

#![allow(dead_code)]

use packdex::models::SpecialForms;
use packdex::{Card, Catalog, RandomSource, Rarity};
use std::collections::VecDeque;

pub fn card(
    name: &str,
    number: u32,
    variant: Option<&str>,
    types: &[&str],
    rarity: Rarity,
) -> Card {
    Card {
        name: name.to_string(),
        number,
        variant: variant.map(str::to_string),
        types: types.iter().map(|t| t.to_string()).collect(),
        rarity,
        move_name: None,
        artist: None,
    }
}

/// The three-card catalog from the end-to-end scenario.
pub fn kanto_trio() -> Catalog {
    Catalog::new(
        vec![
            card("Bulbasaur", 1, None, &["Grass", "Poison"], Rarity::Common),
            card("Mewtwo", 150, None, &["Psychic"], Rarity::Legendary),
            card("Mew", 151, None, &["Psychic"], Rarity::Mythical),
        ],
        SpecialForms::new(),
    )
    .unwrap()
}

/// A wider catalog with regional forms, one card per rarity in Kanto.
pub fn sample_catalog() -> Catalog {
    Catalog::new(
        vec![
            card("Bulbasaur", 1, None, &["Grass", "Poison"], Rarity::Common),
            card("Pikachu", 25, None, &["Electric"], Rarity::Uncommon),
            card("Gengar", 94, None, &["Ghost", "Poison"], Rarity::Rare),
            card("Dragonite", 149, None, &["Dragon", "Flying"], Rarity::Epic),
            card("Mewtwo", 150, None, &["Psychic"], Rarity::Legendary),
            card("Mew", 151, None, &["Psychic"], Rarity::Mythical),
            card("Moltres", 146, None, &["Fire", "Flying"], Rarity::Legendary),
            card("Moltres (Galar)", 146, Some("Galar"), &["Dark", "Flying"], Rarity::Legendary),
            card("Mega Charizard X", 6, Some("MegaX"), &["Fire", "Dragon"], Rarity::Epic),
            card("Chikorita", 152, None, &["Grass"], Rarity::Common),
            card("Grookey", 810, None, &["Grass"], Rarity::Common),
            card(
                "Urshifu (Single Strike)",
                892,
                Some("Single"),
                &["Fighting", "Dark"],
                Rarity::Legendary,
            ),
        ],
        SpecialForms::new()
            .with(146, "Galar", "Galar")
            .with(892, "Single", "Galar"),
    )
    .unwrap()
}

/// Always picks index 0 and never rolls shiny.
pub struct FirstIndex;

impl RandomSource for FirstIndex {
    fn index(&mut self, _len: usize) -> usize {
        0
    }

    fn chance(&mut self, _probability: f64) -> bool {
        false
    }
}

/// Replays scripted indices and shiny rolls, then falls back to 0 / false.
#[derive(Default)]
pub struct Scripted {
    pub indices: VecDeque<usize>,
    pub shiny: VecDeque<bool>,
}

impl Scripted {
    pub fn new(indices: &[usize], shiny: &[bool]) -> Self {
        Self {
            indices: indices.iter().copied().collect(),
            shiny: shiny.iter().copied().collect(),
        }
    }
}

impl RandomSource for Scripted {
    fn index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0).min(len - 1)
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.shiny.pop_front().unwrap_or(false)
    }
}
