//! Pack opening simulator.
//!
//! Builds a rarity-weighted pool from the catalog cards a pack accepts and
//! draws from it with replacement. Shininess is decided by a separate trial
//! that ignores the pack and the card's rarity.

use crate::booster::RandomSource;
use crate::catalog::Catalog;
use crate::config;
use crate::models::{Card, Pack, PackSet};
use serde::{Deserialize, Serialize};

/// One drawn card instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawnCard {
    pub card: Card,
    pub is_shiny: bool,
}

impl DrawnCard {
    pub fn key(&self) -> String {
        self.card.key()
    }
}

// ---------------------------------------------------------------------------
// WeightedPool
// ---------------------------------------------------------------------------

/// The eligible cards of a pack with their integer weights.
///
/// Behaves like a list in which each card is repeated `weight` times, in
/// catalog order, without materializing the repeats.
#[derive(Debug, Clone)]
pub struct WeightedPool<'a> {
    entries: Vec<(&'a Card, u32)>,
    total: usize,
}

impl<'a> WeightedPool<'a> {
    pub fn build(catalog: &'a Catalog, pack: &Pack) -> Self {
        let weights = pack.effective_weights();
        let forms = catalog.special_forms();

        let entries: Vec<(&Card, u32)> = catalog
            .cards()
            .iter()
            .filter(|card| pack.is_eligible(card, forms))
            .map(|card| (card, weights.weight(card.rarity)))
            .filter(|(_, w)| *w > 0)
            .collect();
        let total = entries.iter().map(|(_, w)| *w as usize).sum();

        Self { entries, total }
    }

    /// Size of the expanded pool.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct eligible cards.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Card at position `index` of the expanded pool.
    pub fn get(&self, index: usize) -> Option<&'a Card> {
        let mut roll = index;
        for (card, weight) in &self.entries {
            let w = *weight as usize;
            if roll < w {
                return Some(*card);
            }
            roll -= w;
        }
        None
    }

    pub fn cards(&self) -> impl Iterator<Item = (&'a Card, u32)> + '_ {
        self.entries.iter().copied()
    }
}

// ---------------------------------------------------------------------------
// DrawEngine
// ---------------------------------------------------------------------------

/// Draws cards for packs from a catalog.
pub struct DrawEngine<'a> {
    catalog: &'a Catalog,
    packs: &'a PackSet,
}

impl<'a> DrawEngine<'a> {
    pub fn new(catalog: &'a Catalog, packs: &'a PackSet) -> Self {
        Self { catalog, packs }
    }

    /// Weighted pool for a pack id; unknown ids resolve to the default pack.
    pub fn pool(&self, pack_id: &str) -> WeightedPool<'a> {
        WeightedPool::build(self.catalog, self.packs.resolve(pack_id))
    }

    /// Draw a single card.
    ///
    /// A pack whose pool is empty falls back to a uniform draw over the whole
    /// catalog and logs a warning; see [`empty_packs`](Self::empty_packs).
    pub fn draw_card(&self, pack_id: &str, rng: &mut dyn RandomSource) -> DrawnCard {
        let pool = self.checked_pool(pack_id);
        self.draw_from(&pool, rng)
    }

    /// Draw [`config::CARDS_PER_PACK`] cards independently, with replacement.
    pub fn open_pack(&self, pack_id: &str, rng: &mut dyn RandomSource) -> Vec<DrawnCard> {
        let pool = self.checked_pool(pack_id);
        (0..config::CARDS_PER_PACK)
            .map(|_| self.draw_from(&pool, rng))
            .collect()
    }

    /// The pack's pool, warning once when it is empty.
    fn checked_pool(&self, pack_id: &str) -> WeightedPool<'a> {
        let pool = self.pool(pack_id);
        if pool.is_empty() {
            tracing::warn!(
                pack_id,
                "pack has no eligible cards, drawing from the full catalog"
            );
        }
        pool
    }

    fn draw_from(&self, pool: &WeightedPool<'a>, rng: &mut dyn RandomSource) -> DrawnCard {
        let picked = if pool.is_empty() {
            self.uniform(rng)
        } else {
            pool.get(rng.index(pool.len()))
                .unwrap_or_else(|| self.uniform(rng))
        };

        DrawnCard {
            card: picked.clone(),
            is_shiny: rng.chance(config::SHINY_RATE),
        }
    }

    fn uniform(&self, rng: &mut dyn RandomSource) -> &'a Card {
        let cards = self.catalog.cards();
        &cards[rng.index(cards.len())]
    }

    /// Ids of packs that would fall back to the full catalog.
    pub fn empty_packs(&self) -> Vec<String> {
        self.packs
            .empty_packs(self.catalog.cards(), self.catalog.special_forms())
    }
}
