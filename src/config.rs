use std::path::PathBuf;

/// Number of independent draws performed by a single pack opening.
pub const CARDS_PER_PACK: usize = 5;

/// Probability that any single draw comes out shiny.
pub const SHINY_RATE: f64 = 0.01;

/// Pack used when a requested pack id is unknown.
pub const DEFAULT_PACK_ID: &str = "mystery";

/// Storage key of the persisted `{collectedCards, packsOpened}` record.
pub const COLLECTION_KEY: &str = "pokemonCollection";

/// Storage key of the persisted array of achievement ids already announced.
pub const COMPLETED_KEY: &str = "completedAchievements";

pub const STORAGE_DIR_NAME: &str = "packdex";

/// Named regions and their inclusive dex-number ranges, in dex order.
pub const REGIONS: &[(&str, u32, u32)] = &[
    ("Kanto", 1, 151),
    ("Johto", 152, 251),
    ("Hoenn", 252, 386),
    ("Sinnoh", 387, 493),
    ("Unova", 494, 649),
    ("Kalos", 650, 721),
    ("Alola", 722, 809),
    ("Galar", 810, 905),
    ("Paldea", 906, 1025),
];

/// Inclusive dex-number range of a named region, if the region is known.
pub fn region_range(name: &str) -> Option<(u32, u32)> {
    REGIONS
        .iter()
        .find(|(region, _, _)| *region == name)
        .map(|&(_, start, end)| (start, end))
}

pub fn default_storage_dir() -> PathBuf {
    if let Some(data) = dirs::data_local_dir() {
        data.join(STORAGE_DIR_NAME)
    } else {
        PathBuf::from(".packdex")
    }
}
