//! In-memory implementation of PlayerStore for testing and development

use crate::core::error::StorageError;
use crate::core::player::{Player, PlayerId};
use crate::core::store::{PlayerRecord, PlayerStore};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Inner {
    players: BTreeMap<PlayerId, Player>,
    last_id: PlayerId,
}

/// In-memory player store
///
/// Records are kept in id order and ids are handed out sequentially from 1.
/// An id is never reused, even after its record is deleted. Uses RwLock for
/// thread-safe access; each call holds the lock for its whole duration.
#[derive(Clone, Default)]
pub struct InMemoryPlayerStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryPlayerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StorageError> {
        self.inner
            .read()
            .map_err(|e| StorageError::LockPoisoned(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StorageError> {
        self.inner
            .write()
            .map_err(|e| StorageError::LockPoisoned(format!("Failed to acquire write lock: {}", e)))
    }

    /// Number of stored players
    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(self.read()?.players.len())
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.read()?.players.is_empty())
    }
}

#[async_trait]
impl PlayerStore for InMemoryPlayerStore {
    async fn load_all(&self) -> Result<Vec<Player>, StorageError> {
        Ok(self.read()?.players.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, StorageError> {
        Ok(self.read()?.players.get(&id).cloned())
    }

    async fn save(&self, record: PlayerRecord) -> Result<Player, StorageError> {
        let mut inner = self.write()?;

        match record {
            PlayerRecord::New(draft) => {
                inner.last_id += 1;
                let player = Player::from_draft(inner.last_id, draft);
                inner.players.insert(player.id, player.clone());
                Ok(player)
            }
            PlayerRecord::Existing(player) => {
                let slot = inner
                    .players
                    .get_mut(&player.id)
                    .ok_or(StorageError::Missing(player.id))?;
                *slot = player.clone();
                Ok(player)
            }
        }
    }

    async fn delete_by_id(&self, id: PlayerId) -> Result<bool, StorageError> {
        Ok(self.write()?.players.remove(&id).is_some())
    }
}
