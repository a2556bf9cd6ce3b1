//! Virtual trading card pack simulator.
//!
//! Open simulated booster packs, keep the drawn cards in a persisted
//! collection, and track progress toward achievements. Card, pack and
//! achievement definitions are static data supplied by the caller; the crate
//! owns the draw rules, the collection record, and achievement evaluation.
//!
//! # Quick start
//!
//! ```no_run
//! use packdex::{Catalog, Packdex};
//!
//! let catalog = Catalog::from_path("cards.json").unwrap();
//! let dex = Packdex::builder().catalog(catalog).build().unwrap();
//!
//! // Open one pack of five cards
//! let opening = dex.open_pack("151").expect("no other opening in progress");
//! for card in &opening.cards {
//!     println!("{} (new: {})", card.card.key(), card.is_new);
//! }
//! ```

pub mod achievements;
pub mod booster;
pub mod catalog;
pub mod collection;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod storage;

pub use achievements::{AchievementTracker, CompletedSet, Progress};
pub use booster::{DrawEngine, DrawnCard, RandomSource, RngSource};
pub use catalog::Catalog;
pub use collection::{CollectedEntry, CollectionState, CollectionStore};
pub use error::{PackdexError, Result};
pub use models::{AchievementSet, Card, Pack, PackSet, Rarity};
pub use storage::{FileStorage, MemoryStorage, Storage};

use queries::{DexFilter, DexQuery, DexStats};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

// ---------------------------------------------------------------------------
// PackdexBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Packdex`] instance.
///
/// Use [`Packdex::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](PackdexBuilder::build) to create the client.
#[derive(Default)]
pub struct PackdexBuilder {
    catalog: Option<Catalog>,
    catalog_path: Option<PathBuf>,
    packs: Option<PackSet>,
    achievements: Option<AchievementSet>,
    storage_dir: Option<PathBuf>,
    in_memory: bool,
    storage: Option<Box<dyn Storage + Send>>,
    seed: Option<u64>,
    rng: Option<Box<dyn RandomSource + Send>>,
}

impl PackdexBuilder {
    /// Use an already-loaded catalog.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Load the catalog from a JSON (or `.json.gz`) file at build time.
    ///
    /// Ignored when [`catalog`](Self::catalog) is also set.
    pub fn catalog_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.catalog_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the pack lineup. Defaults to [`PackSet::standard`].
    pub fn packs(mut self, packs: PackSet) -> Self {
        self.packs = Some(packs);
        self
    }

    /// Set the achievement list. Defaults to [`AchievementSet::standard`].
    pub fn achievements(mut self, achievements: AchievementSet) -> Self {
        self.achievements = Some(achievements);
        self
    }

    /// Persist the collection under a custom directory.
    ///
    /// If not set, the platform-appropriate local data directory is used
    /// (e.g. `~/.local/share/packdex` on Linux).
    pub fn storage_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.storage_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep the collection in memory only. Defaults to `false`.
    pub fn in_memory(mut self, in_memory: bool) -> Self {
        self.in_memory = in_memory;
        self
    }

    /// Use a custom storage backend. Takes precedence over
    /// [`storage_dir`](Self::storage_dir) and [`in_memory`](Self::in_memory).
    pub fn storage<S: Storage + Send + 'static>(mut self, storage: S) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Seed the draw RNG for reproducible packs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom random source. Takes precedence over [`seed`](Self::seed).
    pub fn random_source<R: RandomSource + Send + 'static>(mut self, rng: R) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Build the client, loading the catalog and the saved collection.
    pub fn build(self) -> Result<Packdex> {
        let catalog = match (self.catalog, self.catalog_path) {
            (Some(catalog), _) => catalog,
            (None, Some(path)) => Catalog::from_path(path)?,
            (None, None) => {
                return Err(PackdexError::InvalidArgument(
                    "No catalog configured; call catalog() or catalog_path()".to_string(),
                ))
            }
        };
        let packs = self.packs.unwrap_or_default();
        let achievements = self
            .achievements
            .unwrap_or_else(AchievementSet::standard);

        let empty = packs.empty_packs(catalog.cards(), catalog.special_forms());
        if !empty.is_empty() {
            tracing::warn!(
                packs = ?empty,
                "packs with no eligible cards will draw from the full catalog"
            );
        }

        let storage: Box<dyn Storage + Send> = match self.storage {
            Some(storage) => storage,
            None if self.in_memory => Box::new(MemoryStorage::new()),
            None => Box::new(FileStorage::new(self.storage_dir)?),
        };
        let rng: Box<dyn RandomSource + Send> = match (self.rng, self.seed) {
            (Some(rng), _) => rng,
            (None, Some(seed)) => Box::new(RngSource::seeded(seed)),
            (None, None) => Box::new(RngSource::from_entropy()),
        };

        let store = CollectionStore::load(storage, &catalog);
        let tracker = AchievementTracker::new(CompletedSet::from_ids(store.load_completed()));

        Ok(Packdex {
            catalog,
            packs,
            achievements,
            session: Mutex::new(Session {
                store,
                tracker,
                rng,
            }),
            opening: AtomicBool::new(false),
        })
    }
}

// ---------------------------------------------------------------------------
// Packdex
// ---------------------------------------------------------------------------

struct Session {
    store: CollectionStore,
    tracker: AchievementTracker,
    rng: Box<dyn RandomSource + Send>,
}

/// One card of an opened pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedCard {
    pub card: Card,
    pub is_shiny: bool,
    /// First copy of this identity, or first shiny copy of it.
    pub is_new: bool,
}

/// Everything a single pack opening produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackOpening {
    /// Id of the pack actually drawn from, after unknown-id fallback.
    pub pack_id: String,
    pub cards: Vec<OpenedCard>,
    pub packs_opened: u64,
    /// Achievements that became complete with this pack, announced once.
    pub newly_completed: BTreeSet<String>,
}

/// The main entry point: a single player's pack-opening session.
///
/// Owns the catalog, pack and achievement definitions, and the persisted
/// collection. All methods take `&self`; the collection is guarded by a
/// mutex and pack openings are exclusive.
///
/// Created via [`Packdex::builder()`].
pub struct Packdex {
    catalog: Catalog,
    packs: PackSet,
    achievements: AchievementSet,
    session: Mutex<Session>,
    opening: AtomicBool,
}

impl Packdex {
    /// Create a new builder for configuring the client.
    pub fn builder() -> PackdexBuilder {
        PackdexBuilder::default()
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // -- Definitions -------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn packs(&self) -> &PackSet {
        &self.packs
    }

    pub fn achievements(&self) -> &AchievementSet {
        &self.achievements
    }

    /// Access the draw engine for this catalog and pack lineup.
    pub fn engine(&self) -> DrawEngine<'_> {
        DrawEngine::new(&self.catalog, &self.packs)
    }

    // -- Pack opening ------------------------------------------------------

    /// Claim the right to open a pack.
    ///
    /// Returns `None` while another opening is in progress. The claim is
    /// released when the returned [`PackOpener`] is used or dropped.
    pub fn begin_open(&self) -> Option<PackOpener<'_>> {
        self.opening
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| PackOpener { dex: self })
    }

    /// Open one pack: draw five cards, merge them, persist, and evaluate
    /// achievements.
    ///
    /// Returns `None` without touching the collection if another opening is
    /// in progress.
    pub fn open_pack(&self, pack_id: &str) -> Option<PackOpening> {
        match self.begin_open() {
            Some(opener) => Some(opener.open(pack_id)),
            None => {
                tracing::debug!(pack_id, "pack opening already in progress, ignoring");
                None
            }
        }
    }

    // -- Collection --------------------------------------------------------

    /// Snapshot of the current collection.
    pub fn collection(&self) -> CollectionState {
        self.session().store.state().clone()
    }

    pub fn packs_opened(&self) -> u64 {
        self.session().store.packs_opened()
    }

    /// Progress of every achievement against the current collection.
    pub fn progress(&self) -> BTreeMap<String, Progress> {
        let session = self.session();
        achievements::evaluate(
            self.achievements.iter(),
            session.store.state(),
            self.catalog.special_forms(),
        )
    }

    /// Re-evaluate achievements and report completions not yet announced.
    pub fn detect_newly_completed(&self) -> BTreeSet<String> {
        let mut session = self.session();
        self.announce(&mut session)
    }

    /// Achievement ids already announced as complete.
    pub fn announced(&self) -> CompletedSet {
        self.session().tracker.seen().clone()
    }

    /// Run a dex query against the current collection.
    ///
    /// The collection stays locked for the duration of `f`.
    pub fn with_dex<T>(&self, f: impl FnOnce(DexQuery<'_>) -> T) -> T {
        let session = self.session();
        f(DexQuery::new(&self.catalog, session.store.state()))
    }

    /// Keys of the dex cards matching `filter`, in catalog order.
    pub fn dex_keys(&self, filter: &DexFilter) -> Vec<String> {
        self.with_dex(|dex| dex.search(filter).into_iter().map(|e| e.key).collect())
    }

    pub fn stats(&self) -> DexStats {
        self.with_dex(|dex| dex.stats())
    }

    /// Clear the collection, the pack counter, and announced achievements.
    ///
    /// Irreversible. Waits for any in-progress opening to finish.
    pub fn reset(&self) {
        let mut session = self.session();
        session.store.reset();
        session.tracker.reset();
    }

    fn announce(&self, session: &mut Session) -> BTreeSet<String> {
        let progress = achievements::evaluate(
            self.achievements.iter(),
            session.store.state(),
            self.catalog.special_forms(),
        );
        let current = achievements::completed_ids(&progress);
        let fresh = session.tracker.detect_newly_completed(&current);
        if !fresh.is_empty() {
            let seen = session.tracker.seen().ids().clone();
            session.store.save_completed(&seen);
        }
        fresh
    }
}

/// An exclusive claim on opening one pack.
///
/// Obtained from [`Packdex::begin_open`].
pub struct PackOpener<'a> {
    dex: &'a Packdex,
}

impl PackOpener<'_> {
    /// Draw, merge, persist, and evaluate achievements for one pack.
    pub fn open(self, pack_id: &str) -> PackOpening {
        let dex = self.dex;
        let resolved = dex.packs.resolve(pack_id).id.clone();
        let mut session = dex.session();

        let drawn = dex.engine().open_pack(&resolved, session.rng.as_mut());
        let outcome = session.store.merge(&drawn);
        let newly_completed = dex.announce(&mut session);

        let cards = drawn
            .into_iter()
            .zip(outcome.new_flags)
            .map(|(d, is_new)| OpenedCard {
                card: d.card,
                is_shiny: d.is_shiny,
                is_new,
            })
            .collect();

        PackOpening {
            pack_id: resolved,
            cards,
            packs_opened: outcome.packs_opened,
            newly_completed,
        }
    }
}

impl Drop for PackOpener<'_> {
    fn drop(&mut self) {
        self.dex.opening.store(false, Ordering::Release);
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Packdex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.session();
        let state = session.store.state();
        write!(
            f,
            "Packdex(cards={}, packs=[{}], owned={}, packs_opened={})",
            self.catalog.len(),
            self.packs.ids().join(", "),
            state.unique_count(),
            state.packs_opened
        )
    }
}
