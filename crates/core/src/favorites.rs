//! Session-local favorites.
//!
//! Favorites hold snapshots taken at the moment a character was added.
//! Later edits to the same id are not reflected; only removal (explicit or
//! cascading from a delete) touches an existing entry.

use crate::character::Character;
use crate::types::CharacterId;

/// Insertion-ordered set of character snapshots, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    entries: Vec<Character>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot of `character` unless its id is already present.
    ///
    /// Returns `true` when the snapshot was inserted.
    pub fn add(&mut self, character: &Character) -> bool {
        if self.contains(character.id) {
            return false;
        }
        self.entries.push(character.clone());
        true
    }

    /// Remove the snapshot with `id`, if any.
    pub fn remove(&mut self, id: CharacterId) -> Option<Character> {
        let index = self.entries.iter().position(|c| c.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn contains(&self, id: CharacterId) -> bool {
        self.entries.iter().any(|c| c.id == id)
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.entries.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Character] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(id: CharacterId, name: &str) -> Character {
        Character {
            id,
            name: name.into(),
            real_name: format!("{name} (real)"),
            universe: "Earth-616".into(),
            rating: Some(5),
        }
    }

    #[test]
    fn add_is_idempotent_by_id() {
        let mut once = Favorites::new();
        once.add(&character(1, "Iron Man"));

        let mut twice = Favorites::new();
        assert!(twice.add(&character(1, "Iron Man")));
        assert!(!twice.add(&character(1, "Iron Man")));

        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn add_keeps_first_snapshot_for_duplicate_id() {
        let mut favorites = Favorites::new();
        favorites.add(&character(1, "Iron Man"));
        favorites.add(&character(1, "Iron Man Mk II"));
        assert_eq!(favorites.get(1).unwrap().name, "Iron Man");
    }

    #[test]
    fn preserves_insertion_order() {
        let mut favorites = Favorites::new();
        favorites.add(&character(3, "Hulk"));
        favorites.add(&character(1, "Iron Man"));
        favorites.add(&character(2, "Thor"));
        let ids: Vec<_> = favorites.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn snapshot_is_independent_of_source() {
        let mut source = character(1, "Iron Man");
        let mut favorites = Favorites::new();
        favorites.add(&source);
        source.name = "Rescue".into();
        assert_eq!(favorites.get(1).unwrap().name, "Iron Man");
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut favorites = Favorites::new();
        favorites.add(&character(1, "Iron Man"));
        assert!(favorites.remove(99).is_none());
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn remove_and_cascade_commute() {
        let base = {
            let mut f = Favorites::new();
            f.add(&character(1, "Iron Man"));
            f.add(&character(2, "Thor"));
            f.add(&character(3, "Hulk"));
            f
        };

        // Explicit removal of 2, then cascading removal from deleting 1.
        let mut remove_first = base.clone();
        remove_first.remove(2);
        remove_first.remove(1);

        let mut delete_first = base.clone();
        delete_first.remove(1);
        delete_first.remove(2);

        assert_eq!(remove_first, delete_first);

        // Same id on both paths.
        let mut a = base.clone();
        a.remove(1);
        a.remove(1);
        let mut b = base;
        b.remove(1);
        assert_eq!(a, b);
    }
}
