use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The administrator's chosen subset of catalog collections.
///
/// The configuration record stores this as a mapping from collection id to
/// itself (set semantics via map keys equal to values), so serialization
/// goes through that map shape. In memory it is an ordered set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionSelection {
    ids: BTreeSet<String>,
}

impl CollectionSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from collection ids, deduplicating as it goes.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

impl FromIterator<String> for CollectionSelection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::from_ids(iter)
    }
}

impl Serialize for CollectionSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.ids.iter().map(|id| (id, id)))
    }
}

impl<'de> Deserialize<'de> for CollectionSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<String, String>::deserialize(deserializer)?;
        Ok(Self {
            ids: map.into_keys().collect(),
        })
    }
}
