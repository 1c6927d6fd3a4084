// src/types/entry.rs
//! Ordered collections whose entries keep a stable identity across edits

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// An entry together with its id. Serialized flat: `{"id": "...", "title": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyed<T> {
    #[serde(default = "EntryId::generate")]
    pub id: EntryId,
    #[serde(flatten)]
    pub entry: T,
}

/// Ordered list addressed by [`EntryId`]. Removing an entry keeps the
/// relative order of the remaining ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryList<T> {
    items: Vec<Keyed<T>>,
}

impl<T> Default for EntryList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> EntryList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an entry and return its freshly assigned id.
    pub fn push(&mut self, entry: T) -> EntryId {
        let id = EntryId::generate();
        self.items.push(Keyed { id, entry });
        id
    }

    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.items.iter().find(|k| k.id == id).map(|k| &k.entry)
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.items.iter().position(|k| k.id == id)
    }

    /// Replace the entry with this id in place. Returns false if absent.
    pub fn replace(&mut self, id: EntryId, entry: T) -> bool {
        match self.items.iter_mut().find(|k| k.id == id) {
            Some(slot) => {
                slot.entry = entry;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: EntryId) -> Option<T> {
        let index = self.position(id)?;
        Some(self.items.remove(index).entry)
    }

    /// Positional removal; every later index shifts down by one.
    pub fn remove_at(&mut self, index: usize) -> Option<Keyed<T>> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyed<T>> {
        self.items.iter()
    }

    pub fn entries(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|k| &k.entry)
    }

    pub fn ids(&self) -> Vec<EntryId> {
        self.items.iter().map(|k| k.id).collect()
    }
}

impl<T> FromIterator<T> for EntryList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for entry in iter {
            list.push(entry);
        }
        list
    }
}
