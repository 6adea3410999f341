//! Insertion-ordered mapping keyed by grain index.

use crate::cuboid::GrainId;
use crate::error::{GrainError, Result};
use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::collections::HashMap;

/// Values keyed by grain id, iterated in insertion order.
///
/// Serializes as a list of `[id, value]` pairs so the order survives.
///
/// ## Example
///
/// ```rust
/// use grain_geometry::GrainTable;
///
/// let mut table = GrainTable::new();
/// table.insert(7, "seven").unwrap();
/// table.insert(2, "two").unwrap();
/// assert_eq!(table.keys().collect::<Vec<_>>(), vec![7, 2]);
/// assert!(table.insert(7, "again").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GrainTable<T> {
    entries: Vec<(GrainId, T)>,
    index: HashMap<GrainId, usize>,
}

impl<T> GrainTable<T> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty table with room for `capacity` grains.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Appends a value for `grain`.
    ///
    /// Fails with a shape error when `grain` is already present.
    pub fn insert(&mut self, grain: GrainId, value: T) -> Result<()> {
        if self.index.contains_key(&grain) {
            return Err(GrainError::shape(format!("grain {grain} already recorded")));
        }
        self.index.insert(grain, self.entries.len());
        self.entries.push((grain, value));
        Ok(())
    }

    /// Value recorded for `grain`.
    #[must_use]
    pub fn get(&self, grain: GrainId) -> Option<&T> {
        self.index.get(&grain).map(|&i| &self.entries[i].1)
    }

    /// True when `grain` has a value.
    #[must_use]
    pub fn contains_key(&self, grain: GrainId) -> bool {
        self.index.contains_key(&grain)
    }

    /// Number of grains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no grain is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (GrainId, &T)> {
        self.entries.iter().map(|(grain, value)| (*grain, value))
    }

    /// Grain ids in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = GrainId> + '_ {
        self.entries.iter().map(|(grain, _)| *grain)
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Consumes the table, returning its entries in insertion order.
    #[must_use]
    pub fn into_entries(self) -> Vec<(GrainId, T)> {
        self.entries
    }
}

impl<T> Default for GrainTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize> Serialize for GrainTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for entry in &self.entries {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for GrainTable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries = Vec::<(GrainId, T)>::deserialize(deserializer)?;
        let mut table = Self::with_capacity(entries.len());
        for (grain, value) in entries {
            table.insert(grain, value).map_err(D::Error::custom)?;
        }
        Ok(table)
    }
}
