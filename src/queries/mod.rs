//! Read-only query modules.
//!
//! Each query struct borrows the catalog and a collection snapshot and
//! returns plain values; nothing here mutates state.

pub mod dex;

pub use dex::{DexEntry, DexFilter, DexQuery, DexStats, DisplayMode};
