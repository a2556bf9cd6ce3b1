//! The player's card collection and its persistence.
//!
//! [`CollectionState`] is the plain data; [`CollectionStore`] owns it together
//! with a [`Storage`] backend and writes it back after every mutation. Storage
//! is best-effort throughout: a failed read yields an empty collection and a
//! failed write is logged and otherwise ignored.

use crate::booster::DrawnCard;
use crate::catalog::Catalog;
use crate::config;
use crate::models::Card;
use crate::storage::Storage;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

// ---------------------------------------------------------------------------
// CollectedEntry / CollectionState
// ---------------------------------------------------------------------------

/// An owned card identity. Present entries always have `count >= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectedEntry {
    pub card: Card,
    pub count: u64,
    /// Set once any copy of this identity was drawn shiny; never cleared by merging.
    pub is_shiny: bool,
}

/// The persisted collection record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionState {
    pub collected_cards: BTreeMap<String, CollectedEntry>,
    pub packs_opened: u64,
}

/// Whether a draw should be highlighted as new.
///
/// Must be evaluated against the collection as it was before the draw is merged.
pub fn is_newly(key_exists_before: bool, was_shiny_before: bool, is_shiny_now: bool) -> bool {
    !key_exists_before || (!was_shiny_before && is_shiny_now)
}

impl CollectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&CollectedEntry> {
        self.collected_cards.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.collected_cards.contains_key(key)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &CollectedEntry)> {
        self.collected_cards.iter()
    }

    /// Number of distinct card identities owned.
    pub fn unique_count(&self) -> usize {
        self.collected_cards.len()
    }

    /// Total copies owned across all identities.
    pub fn total_count(&self) -> u64 {
        self.collected_cards
            .values()
            .fold(0u64, |total, e| total.saturating_add(e.count))
    }

    pub fn is_empty(&self) -> bool {
        self.collected_cards.is_empty() && self.packs_opened == 0
    }

    /// Whether drawing `card` now would be highlighted as new.
    pub fn is_new_draw(&self, card: &Card, is_shiny: bool) -> bool {
        let before = self.collected_cards.get(&card.key());
        is_newly(
            before.is_some(),
            before.map_or(false, |e| e.is_shiny),
            is_shiny,
        )
    }

    /// Merge one opened pack's draws and count the pack.
    ///
    /// Returns one "new" flag per draw. Every flag is decided against the
    /// collection as it was before the pack, so repeats within a pack share
    /// the flag of their first copy.
    pub fn merge(&mut self, draws: &[DrawnCard]) -> Vec<bool> {
        let flags = draws
            .iter()
            .map(|drawn| self.is_new_draw(&drawn.card, drawn.is_shiny))
            .collect();
        for drawn in draws {
            self.add(&drawn.card, drawn.is_shiny);
        }
        self.packs_opened = self.packs_opened.saturating_add(1);
        flags
    }

    /// Add a single copy without counting a pack. Returns the "new" flag.
    pub fn add(&mut self, card: &Card, is_shiny: bool) -> bool {
        let new = self.is_new_draw(card, is_shiny);

        self.collected_cards
            .entry(card.key())
            .and_modify(|e| {
                e.count = e.count.saturating_add(1);
                e.is_shiny |= is_shiny;
            })
            .or_insert_with(|| CollectedEntry {
                card: card.clone(),
                count: 1,
                is_shiny,
            });
        new
    }

    /// Rebuild a state from a persisted record, validating it against `catalog`.
    ///
    /// Entries whose key is not in the catalog or whose count is not a
    /// positive integer are dropped; counts beyond `u64::MAX` are clamped.
    /// The stored card copy is replaced with the current catalog card. A
    /// missing or non-integer `packsOpened` becomes 0.
    pub fn from_saved(saved: &Value, catalog: &Catalog) -> Self {
        let mut state = Self::new();

        if let Some(cards) = saved.get("collectedCards").and_then(|c| c.as_object()) {
            for (key, entry) in cards {
                let Some(card) = catalog.get(key) else {
                    tracing::warn!(key = key.as_str(), "dropping saved card missing from catalog");
                    continue;
                };
                let count = entry.get("count").and_then(saved_count);
                let Some(count) = count else {
                    tracing::warn!(key = key.as_str(), "dropping saved card with invalid count");
                    continue;
                };
                let is_shiny = entry
                    .get("isShiny")
                    .and_then(|s| s.as_bool())
                    .unwrap_or(false);

                state.collected_cards.insert(
                    key.clone(),
                    CollectedEntry {
                        card: card.clone(),
                        count,
                        is_shiny,
                    },
                );
            }
        }

        state.packs_opened = saved
            .get("packsOpened")
            .and_then(|p| p.as_u64())
            .unwrap_or(0);
        state
    }

    /// Parse and validate a persisted JSON document; corrupt JSON yields an empty state.
    pub fn from_saved_json(json: &str, catalog: &Catalog) -> Self {
        match serde_json::from_str::<Value>(json) {
            Ok(value) => Self::from_saved(&value, catalog),
            Err(e) => {
                tracing::warn!(error = %e, "saved collection is not valid JSON, starting empty");
                Self::new()
            }
        }
    }
}

/// A positive whole count, saturating at `u64::MAX`.
fn saved_count(value: &Value) -> Option<u64> {
    match value.as_u64() {
        Some(0) => None,
        Some(n) => Some(n),
        None => value
            .as_f64()
            .filter(|f| *f >= 1.0 && f.fract() == 0.0)
            .map(|f| f as u64),
    }
}

// ---------------------------------------------------------------------------
// CollectionStore
// ---------------------------------------------------------------------------

/// Result of merging one opened pack into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// One flag per draw, in draw order.
    pub new_flags: Vec<bool>,
    pub packs_opened: u64,
}

/// Owns the collection state and writes it through to storage.
pub struct CollectionStore {
    storage: Box<dyn Storage + Send>,
    state: CollectionState,
}

impl CollectionStore {
    /// Load the persisted collection, validating it against the current catalog.
    ///
    /// Never fails: unreadable or corrupt data yields an empty collection.
    pub fn load(storage: Box<dyn Storage + Send>, catalog: &Catalog) -> Self {
        let state = match storage.read(config::COLLECTION_KEY) {
            Ok(Some(json)) => CollectionState::from_saved_json(&json, catalog),
            Ok(None) => CollectionState::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read saved collection, starting empty");
                CollectionState::new()
            }
        };
        tracing::debug!(
            cards = state.unique_count(),
            packs_opened = state.packs_opened,
            "loaded collection"
        );
        Self { storage, state }
    }

    pub fn state(&self) -> &CollectionState {
        &self.state
    }

    pub fn packs_opened(&self) -> u64 {
        self.state.packs_opened
    }

    /// Merge an opened pack and persist the result.
    pub fn merge(&mut self, draws: &[DrawnCard]) -> MergeOutcome {
        let new_flags = self.state.merge(draws);
        self.persist();
        MergeOutcome {
            new_flags,
            packs_opened: self.state.packs_opened,
        }
    }

    /// Write the current state to storage. Failures are logged, not returned.
    pub fn persist(&mut self) {
        let json = match serde_json::to_string(&self.state) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize collection");
                return;
            }
        };
        if let Err(e) = self.storage.write(config::COLLECTION_KEY, &json) {
            tracing::warn!(error = %e, "failed to save collection");
        }
    }

    /// Clear the collection, the pack counter, and the announced-achievement set.
    pub fn reset(&mut self) {
        self.state = CollectionState::new();
        for key in [config::COLLECTION_KEY, config::COMPLETED_KEY] {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!(key, error = %e, "failed to clear saved data");
            }
        }
        tracing::debug!("collection reset");
    }

    /// Achievement ids previously announced as complete.
    pub fn load_completed(&self) -> BTreeSet<String> {
        match self.storage.read(config::COMPLETED_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<String>>(&json) {
                Ok(ids) => ids.into_iter().collect(),
                Err(e) => {
                    tracing::warn!(error = %e, "saved achievement list is corrupt, ignoring");
                    BTreeSet::new()
                }
            },
            Ok(None) => BTreeSet::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read saved achievements");
                BTreeSet::new()
            }
        }
    }

    pub fn save_completed(&mut self, ids: &BTreeSet<String>) {
        let list: Vec<&String> = ids.iter().collect();
        let result = serde_json::to_string(&list)
            .map_err(crate::error::PackdexError::from)
            .and_then(|json| self.storage.write(config::COMPLETED_KEY, &json));
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to save achievements");
        }
    }
}
