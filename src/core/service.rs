//! Player service: queries and writes over a [`PlayerStore`]
//!
//! Queries run `load_all -> filter -> sort -> paginate` on one snapshot.
//! Writes validate completely, then issue a single store write.

use crate::core::error::{RosterError, RosterResult, StorageError};
use crate::core::filter::PlayerCriteria;
use crate::core::player::{NewPlayer, Player, PlayerId, PlayerUpdate};
use crate::core::query::{PlayerQuery, paginate};
use crate::core::sort::apply_sort;
use crate::core::store::{PlayerRecord, PlayerStore};
use crate::core::validation::{apply_update, validate_new};
use std::sync::Arc;

/// Roster operations shared by every boundary (REST handlers, seeding, tests)
#[derive(Clone)]
pub struct PlayerService {
    store: Arc<dyn PlayerStore>,
}

impl PlayerService {
    pub fn new(store: impl PlayerStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_arc(store: Arc<dyn PlayerStore>) -> Self {
        Self { store }
    }

    /// One page of players matching the query
    pub async fn list(&self, query: &PlayerQuery) -> RosterResult<Vec<Player>> {
        let players = self.store.load_all().await?;
        let total = players.len();

        let matching = query.criteria.apply(players);
        let ordered = apply_sort(matching, query.order);
        let page = paginate(&ordered, query.page).to_vec();

        tracing::debug!(
            total,
            matching = ordered.len(),
            returned = page.len(),
            page = query.page.number,
            size = query.page.size,
            "listed players"
        );
        Ok(page)
    }

    /// Number of players matching the criteria, ignoring paging
    pub async fn count(&self, criteria: &PlayerCriteria) -> RosterResult<usize> {
        let players = self.store.load_all().await?;
        Ok(criteria.count(&players))
    }

    /// Get one player
    pub async fn get(&self, id: PlayerId) -> RosterResult<Player> {
        check_id(id)?;
        self.store
            .find_by_id(id)
            .await?
            .ok_or(RosterError::NotFound { id })
    }

    /// Validate a candidate and store it under a fresh id
    pub async fn create(&self, candidate: NewPlayer) -> RosterResult<Player> {
        let draft = validate_new(&candidate).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected player creation");
        })?;

        let player = self.store.save(PlayerRecord::New(draft)).await?;
        tracing::info!(player_id = player.id, name = %player.name, "player created");
        Ok(player)
    }

    /// Merge an update payload into an existing player
    ///
    /// A missing player is reported before the payload is validated.
    pub async fn update(&self, id: PlayerId, update: PlayerUpdate) -> RosterResult<Player> {
        let current = self.get(id).await?;

        let next = apply_update(&current, &update).inspect_err(|e| {
            tracing::warn!(player_id = id, error = %e, "rejected player update");
        })?;
        if next == current {
            return Ok(current);
        }

        let saved = self
            .store
            .save(PlayerRecord::Existing(next))
            .await
            .map_err(|e| match e {
                StorageError::Missing(id) => RosterError::NotFound { id },
                other => other.into(),
            })?;
        tracing::info!(player_id = id, "player updated");
        Ok(saved)
    }

    /// Delete an existing player
    pub async fn delete(&self, id: PlayerId) -> RosterResult<()> {
        check_id(id)?;
        if !self.store.delete_by_id(id).await? {
            return Err(RosterError::NotFound { id });
        }
        tracing::info!(player_id = id, "player deleted");
        Ok(())
    }
}

fn check_id(id: PlayerId) -> RosterResult<()> {
    if id <= 0 {
        return Err(RosterError::invalid_argument(format!(
            "player id must be positive: {}",
            id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::{Profession, Race};
    use crate::core::query::PageRequest;
    use crate::core::sort::PlayerOrder;
    use crate::storage::InMemoryPlayerStore;
    use chrono::DateTime;

    fn candidate(name: &str, experience: i32, level: i32) -> NewPlayer {
        NewPlayer {
            name: Some(name.to_string()),
            title: Some("Title".to_string()),
            race: Some(Race::Human),
            profession: Some(Profession::Warrior),
            birthday: DateTime::from_timestamp_millis(16_725_225_600_000),
            banned: None,
            experience: Some(experience),
            level: Some(level),
        }
    }

    async fn seeded() -> (PlayerService, InMemoryPlayerStore) {
        let store = InMemoryPlayerStore::new();
        let service = PlayerService::new(store.clone());
        for (name, xp, lvl) in [("Eomer", 300, 3), ("Aragorn", 900, 9), ("Boromir", 300, 4)] {
            service.create(candidate(name, xp, lvl)).await.unwrap();
        }
        (service, store)
    }

    #[tokio::test]
    async fn test_list_runs_filter_sort_page() {
        let (service, _) = seeded().await;
        let query = PlayerQuery {
            criteria: PlayerCriteria {
                max_experience: Some(300),
                ..Default::default()
            },
            order: Some(PlayerOrder::Name),
            page: PageRequest::new(0, 1),
        };

        let page = service.list(&query).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name, "Boromir");
    }

    #[tokio::test]
    async fn test_count_ignores_paging() {
        let (service, _) = seeded().await;
        assert_eq!(service.count(&PlayerCriteria::default()).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_without_storing() {
        let (service, store) = seeded().await;

        let result = service.create(candidate("Thirteen chars", 1, 1)).await;
        assert!(matches!(result, Err(RosterError::Validation(_))));
        assert_eq!(store.len().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found_before_validation() {
        let (service, store) = seeded().await;
        let invalid = PlayerUpdate {
            experience: Some(-1),
            ..Default::default()
        };

        let result = service.update(42, invalid).await;
        assert!(matches!(result, Err(RosterError::NotFound { id: 42 })));
        assert_eq!(store.len().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_rejected_update_leaves_record_unchanged() {
        let (service, _) = seeded().await;
        let before = service.get(1).await.unwrap();

        let update = PlayerUpdate {
            name: Some("Renamed".to_string()),
            title: Some("t".repeat(31)),
            ..Default::default()
        };
        assert!(service.update(1, update).await.is_err());
        assert_eq!(service.get(1).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let (service, _) = seeded().await;

        service.delete(2).await.unwrap();
        assert!(matches!(
            service.delete(2).await,
            Err(RosterError::NotFound { id: 2 })
        ));
        assert!(matches!(
            service.get(2).await,
            Err(RosterError::NotFound { id: 2 })
        ));
    }

    #[tokio::test]
    async fn test_non_positive_ids_are_invalid_arguments() {
        let (service, _) = seeded().await;

        for id in [0, -1] {
            assert!(matches!(
                service.get(id).await,
                Err(RosterError::InvalidArgument { .. })
            ));
            assert!(matches!(
                service.delete(id).await,
                Err(RosterError::InvalidArgument { .. })
            ));
            assert!(matches!(
                service.update(id, PlayerUpdate::default()).await,
                Err(RosterError::InvalidArgument { .. })
            ));
        }
    }
}
