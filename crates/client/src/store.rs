//! The remote store contract consumed by the view session.

use async_trait::async_trait;
use marvel_core::character::Character;
use marvel_core::draft::Draft;
use marvel_core::types::CharacterId;

use crate::api::StoreError;

/// List/create/update/delete access to the remote character collection.
///
/// Implementations return characters with ids already normalized to
/// integers.
#[async_trait]
pub trait CharacterStore: Send + Sync {
    /// Fetch the full collection in store order.
    async fn list(&self) -> Result<Vec<Character>, StoreError>;

    /// Create a character from `draft`; the store assigns the id.
    async fn create(&self, draft: &Draft) -> Result<Character, StoreError>;

    /// Replace the fields of character `id` with `draft`.
    async fn update(&self, id: CharacterId, draft: &Draft) -> Result<Character, StoreError>;

    /// Delete character `id`.
    async fn delete(&self, id: CharacterId) -> Result<(), StoreError>;
}
