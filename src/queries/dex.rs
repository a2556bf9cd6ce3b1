//! Card index ("dex") browsing over the catalog and the collection.

use crate::catalog::Catalog;
use crate::collection::{CollectedEntry, CollectionState};
use crate::models::{Card, Rarity};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DexFilter
// ---------------------------------------------------------------------------

/// Which cards to show relative to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    #[default]
    All,
    Owned,
    Missing,
}

/// Parameters for a dex search.
///
/// All fields are optional. When `None`, the corresponding filter is skipped.
#[derive(Debug, Clone, Default)]
pub struct DexFilter {
    pub region: Option<String>,
    pub rarity: Option<Rarity>,
    pub type_name: Option<String>,
    pub display: DisplayMode,
}

/// A catalog card together with the owned entry, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DexEntry<'a> {
    pub key: String,
    pub card: &'a Card,
    pub owned: Option<&'a CollectedEntry>,
}

impl DexEntry<'_> {
    pub fn count(&self) -> u64 {
        self.owned.map_or(0, |e| e.count)
    }

    pub fn is_shiny(&self) -> bool {
        self.owned.map_or(false, |e| e.is_shiny)
    }
}

/// Collection-wide totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexStats {
    /// Distinct catalog cards owned.
    pub unique_owned: usize,
    pub catalog_size: usize,
    /// Copies owned, including duplicates.
    pub total_owned: u64,
    pub shiny_owned: usize,
    pub packs_opened: u64,
}

// ---------------------------------------------------------------------------
// DexQuery
// ---------------------------------------------------------------------------

/// Query interface over the catalog and a collection snapshot.
pub struct DexQuery<'a> {
    catalog: &'a Catalog,
    state: &'a CollectionState,
}

impl<'a> DexQuery<'a> {
    pub fn new(catalog: &'a Catalog, state: &'a CollectionState) -> Self {
        Self { catalog, state }
    }

    /// Catalog cards matching `filter`, in catalog order.
    pub fn search(&self, filter: &DexFilter) -> Vec<DexEntry<'a>> {
        let forms = self.catalog.special_forms();
        self.catalog
            .cards()
            .iter()
            .filter(|card| match filter.region.as_deref() {
                Some(region) => forms.in_region(card, region),
                None => true,
            })
            .filter(|card| filter.rarity.map_or(true, |r| card.rarity == r))
            .filter(|card| {
                filter
                    .type_name
                    .as_deref()
                    .map_or(true, |t| card.has_type(t))
            })
            .filter_map(|card| {
                let key = card.key();
                let owned = self.state.get(&key);
                let keep = match filter.display {
                    DisplayMode::All => true,
                    DisplayMode::Owned => owned.is_some(),
                    DisplayMode::Missing => owned.is_none(),
                };
                keep.then_some(DexEntry { key, card, owned })
            })
            .collect()
    }

    /// Look up a single card by canonical key.
    pub fn get(&self, key: &str) -> Option<DexEntry<'a>> {
        let card = self.catalog.get(key)?;
        Some(DexEntry {
            key: key.to_string(),
            card,
            owned: self.state.get(key),
        })
    }

    pub fn stats(&self) -> DexStats {
        DexStats {
            unique_owned: self
                .state
                .entries()
                .filter(|(key, _)| self.catalog.contains(key))
                .count(),
            catalog_size: self.catalog.len(),
            total_owned: self.state.total_count(),
            shiny_owned: self.state.entries().filter(|(_, e)| e.is_shiny).count(),
            packs_opened: self.state.packs_opened,
        }
    }
}
