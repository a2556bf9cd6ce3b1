use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config;
use crate::models::Card;

// ---------------------------------------------------------------------------
// SpecialForms: regional and alternate form lookup
// ---------------------------------------------------------------------------

/// Maps `(dex number, variant)` to the region tags a special form belongs to.
///
/// Regional forms such as `Moltres (Galar)-146` sit outside their region's
/// numeric range; this table is how they are tied back to it. Serialized as
/// `{ "146": { "Galar": ["Galar"] } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecialForms {
    forms: HashMap<u32, HashMap<String, Vec<String>>>,
}

impl SpecialForms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `(number, variant)` to one more region tag.
    pub fn insert(&mut self, number: u32, variant: &str, tag: &str) {
        let tags = self
            .forms
            .entry(number)
            .or_default()
            .entry(variant.to_string())
            .or_default();
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, number: u32, variant: &str, tag: &str) -> Self {
        self.insert(number, variant, tag);
        self
    }

    /// Region tags for a `(number, variant)` pair; empty when unmapped.
    pub fn tags(&self, number: u32, variant: &str) -> &[String] {
        self.forms
            .get(&number)
            .and_then(|by_variant| by_variant.get(variant))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_tagged(&self, card: &Card, tag: &str) -> bool {
        self.tags(card.number, card.variant_str())
            .iter()
            .any(|t| t == tag)
    }

    /// Whether a card belongs to a region for dex browsing and region goals.
    ///
    /// A base form belongs to the region its number falls in. A card with a
    /// variant belongs only to regions its form is explicitly mapped to, even
    /// when its number is inside the range.
    pub fn in_region(&self, card: &Card, region: &str) -> bool {
        let (start, end) = config::region_range(region).unwrap_or((0, 0));
        let in_range = card.number >= start && card.number <= end;
        (in_range && card.is_base_form()) || self.is_tagged(card, region)
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}
