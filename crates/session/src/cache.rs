//! In-memory mirror of the remote character collection.

use marvel_core::character::Character;
use marvel_core::types::CharacterId;

/// Ordered copy of the store's last known collection.
///
/// Only two writes exist: wholesale [`replace`](Self::replace) after a
/// reload, and [`remove`](Self::remove) after a confirmed delete.
#[derive(Debug, Clone, Default)]
pub struct CharacterCache {
    entries: Vec<Character>,
}

impl CharacterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly fetched collection in one step.
    pub fn replace(&mut self, entries: Vec<Character>) {
        self.entries = entries;
    }

    /// Prune the entry with `id`.
    pub fn remove(&mut self, id: CharacterId) -> Option<Character> {
        let index = self.entries.iter().position(|c| c.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.entries.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: CharacterId) -> bool {
        self.get(id).is_some()
    }

    pub fn as_slice(&self) -> &[Character] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
