//! The immutable card catalog.
//!
//! Catalog data is supplied from outside the crate (a JSON document, optionally
//! gzip-compressed) and is treated as read-only. Cards may be added or removed
//! between catalog versions; the collection store re-validates persisted data
//! against whatever catalog is current.

use crate::error::{PackdexError, Result};
use crate::models::{Card, SpecialForms};
use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

/// Wire shape of a catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    pub cards: Vec<Card>,
    #[serde(default)]
    pub special_forms: SpecialForms,
}

/// Every collectible card, indexed by canonical key.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<Card>,
    index: HashMap<String, usize>,
    special_forms: SpecialForms,
}

impl Catalog {
    /// Build a catalog, rejecting an empty card list and duplicate keys.
    pub fn new(cards: Vec<Card>, special_forms: SpecialForms) -> Result<Self> {
        if cards.is_empty() {
            return Err(PackdexError::InvalidArgument(
                "A catalog needs at least one card".to_string(),
            ));
        }

        let mut index = HashMap::with_capacity(cards.len());
        for (i, card) in cards.iter().enumerate() {
            if index.insert(card.key(), i).is_some() {
                return Err(PackdexError::InvalidArgument(format!(
                    "Duplicate catalog card: {}",
                    card.key()
                )));
            }
        }

        Ok(Self {
            cards,
            index,
            special_forms,
        })
    }

    pub fn from_record(record: CatalogRecord) -> Result<Self> {
        Self::new(record.cards, record.special_forms)
    }

    /// Parse a catalog document.
    pub fn from_json(json: &str) -> Result<Self> {
        let record: CatalogRecord = serde_json::from_str(json)?;
        Self::from_record(record)
    }

    /// Load a catalog document from disk (handles `.gz` transparently).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PackdexError::NotFound(format!(
                "Catalog file {} does not exist",
                path.display()
            )));
        }

        let contents = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
            let file = fs::File::open(path)?;
            let mut decoder = BufReader::new(GzDecoder::new(BufReader::new(file)));
            let mut contents = String::new();
            decoder.read_to_string(&mut contents)?;
            contents
        } else {
            fs::read_to_string(path)?
        };

        let catalog = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), cards = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn get(&self, key: &str) -> Option<&Card> {
        self.index.get(key).map(|&i| &self.cards[i])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// All cards, in catalog order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn special_forms(&self) -> &SpecialForms {
        &self.special_forms
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn to_record(&self) -> CatalogRecord {
        CatalogRecord {
            cards: self.cards.clone(),
            special_forms: self.special_forms.clone(),
        }
    }
}
