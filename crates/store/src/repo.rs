//! In-memory character collection.

use std::path::Path;

use marvel_core::error::CoreError;
use marvel_core::types::CharacterId;
use tokio::sync::RwLock;

use crate::models::{CharacterInput, CharacterRecord, SeedFile};

/// Insertion-ordered character records guarded by an async lock.
#[derive(Debug, Default)]
pub struct CharacterRepo {
    records: RwLock<Vec<CharacterRecord>>,
}

impl CharacterRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<CharacterRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Load a json-server style `db.json`.
    pub fn from_seed_file(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Internal(format!("Failed to read seed file {}: {e}", path.display()))
        })?;
        let seed: SeedFile = serde_json::from_str(&raw).map_err(|e| {
            CoreError::Internal(format!("Invalid seed file {}: {e}", path.display()))
        })?;
        let records: Vec<CharacterRecord> = seed.characters.into_iter().map(Into::into).collect();
        tracing::info!(count = records.len(), path = %path.display(), "Loaded seed characters");
        Ok(Self::with_records(records))
    }

    pub async fn list(&self) -> Vec<CharacterRecord> {
        self.records.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn find_by_id(&self, id: CharacterId) -> Option<CharacterRecord> {
        self.records.read().await.iter().find(|r| r.id == id).cloned()
    }

    /// Insert a record with the next free id (`max + 1`).
    pub async fn create(&self, input: &CharacterInput) -> Result<CharacterRecord, CoreError> {
        let mut records = self.records.write().await;
        let id = records
            .iter()
            .map(|r| r.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| CoreError::Internal("Character id space exhausted".to_string()))?;
        let record = CharacterRecord::from_input(id, input);
        records.push(record.clone());
        Ok(record)
    }

    /// Replace every field of record `id`. `None` when it does not exist.
    pub async fn update(&self, id: CharacterId, input: &CharacterInput) -> Option<CharacterRecord> {
        let mut records = self.records.write().await;
        let slot = records.iter_mut().find(|r| r.id == id)?;
        *slot = CharacterRecord::from_input(id, input);
        Some(slot.clone())
    }

    /// Remove record `id`. Returns whether anything was removed.
    pub async fn delete(&self, id: CharacterId) -> bool {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        records.len() != before
    }
}
