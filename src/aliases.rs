//! # Aliases Module
//!
//! Short names for types used across the crate.

use crate::enums::value::Value;

/// One row of a frame, in column order.
pub type Row = Vec<Value>;

/// Hash map used for the column name index.
///
/// `ahash` under the `fast_hash` feature, the standard library map otherwise.
#[cfg(feature = "fast_hash")]
pub type HashMap<K, V> = ahash::AHashMap<K, V>;
#[cfg(not(feature = "fast_hash"))]
pub type HashMap<K, V> = std::collections::HashMap<K, V>;

/// Hash set used by `unique`, `isin` and duplicate detection.
#[cfg(feature = "fast_hash")]
pub type HashSet<K> = ahash::AHashSet<K>;
#[cfg(not(feature = "fast_hash"))]
pub type HashSet<K> = std::collections::HashSet<K>;
