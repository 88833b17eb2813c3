//! Repository contract for player storage
//!
//! The roster never looks inside the backing store: it loads the full record
//! set for queries and writes exactly one record per mutation. Every call is
//! expected to be atomic on its own.

use crate::core::error::StorageError;
use crate::core::player::{Player, PlayerDraft, PlayerId};
use async_trait::async_trait;

/// What to persist in a [`PlayerStore::save`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerRecord {
    /// Create a record; the store assigns the id
    New(PlayerDraft),
    /// Overwrite the record carrying this id
    Existing(Player),
}

/// Storage backend for players
///
/// Implementations provide whole-record reads and writes. Filtering, sorting
/// and paging happen in the roster on the snapshot returned by `load_all`.
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Every stored player in storage order; empty when there are none
    async fn load_all(&self) -> Result<Vec<Player>, StorageError>;

    /// Get a player by id
    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, StorageError>;

    /// Create or overwrite one player and return the persisted form
    ///
    /// Overwriting an id that no longer exists fails with
    /// [`StorageError::Missing`].
    async fn save(&self, record: PlayerRecord) -> Result<Player, StorageError>;

    /// Remove a player; `false` when nothing was stored under `id`
    async fn delete_by_id(&self, id: PlayerId) -> Result<bool, StorageError>;
}
