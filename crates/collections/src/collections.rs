//! Fast collection types for kbrowse.
//!
//! `FxHashMap` for the command table's mode and shortcut-code lookups, and an
//! Fx-hashed `IndexMap` for records that must iterate in load order.

pub use rustc_hash::{FxBuildHasher, FxHashMap};

/// Insertion-ordered hash map with FxHash.
///
/// The command table keeps records in the order their files were merged, so
/// "first record for a mode" is well defined.
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;
