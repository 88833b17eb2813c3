//! Single-key player ordering

use crate::core::player::Player;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort key accepted by list queries
///
/// Ordering is always ascending. The absence of a key (`None` at call sites)
/// keeps the input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerOrder {
    Id,
    Name,
    Level,
    Birthday,
    Experience,
}

impl PlayerOrder {
    /// Compare two players on this key only
    pub fn compare(self, a: &Player, b: &Player) -> Ordering {
        match self {
            PlayerOrder::Id => a.id.cmp(&b.id),
            PlayerOrder::Name => a.name.cmp(&b.name),
            PlayerOrder::Level => a.level.cmp(&b.level),
            PlayerOrder::Birthday => a.birthday.cmp(&b.birthday),
            PlayerOrder::Experience => a.experience.cmp(&b.experience),
        }
    }
}

/// Order players by `order`, keeping ties in input order
///
/// `sort_by` is stable, which keeps successive pages of one query consistent.
pub fn apply_sort(mut players: Vec<Player>, order: Option<PlayerOrder>) -> Vec<Player> {
    if let Some(order) = order {
        players.sort_by(|a, b| order.compare(a, b));
    }
    players
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::{Profession, Race};
    use chrono::DateTime;

    fn player(id: i64, name: &str, level: i32, experience: i32, born: i64) -> Player {
        Player {
            id,
            name: name.to_string(),
            title: "Title".to_string(),
            race: Race::Orc,
            profession: Profession::Rogue,
            birthday: DateTime::from_timestamp_millis(born).unwrap(),
            banned: false,
            experience,
            level,
        }
    }

    fn roster() -> Vec<Player> {
        vec![
            player(3, "Bolg", 2, 300, 1_300_000_000_000),
            player(1, "Azog", 5, 100, 1_100_000_000_000),
            player(4, "Grishnakh", 2, 400, 1_000_000_000_000),
            player(2, "Ugluk", 1, 200, 1_200_000_000_000),
        ]
    }

    fn ids(players: &[Player]) -> Vec<i64> {
        players.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_absent_order_keeps_input() {
        assert_eq!(ids(&apply_sort(roster(), None)), vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_each_key_sorts_ascending() {
        assert_eq!(ids(&apply_sort(roster(), Some(PlayerOrder::Id))), vec![1, 2, 3, 4]);
        assert_eq!(ids(&apply_sort(roster(), Some(PlayerOrder::Name))), vec![1, 3, 4, 2]);
        assert_eq!(
            ids(&apply_sort(roster(), Some(PlayerOrder::Experience))),
            vec![1, 2, 3, 4]
        );
        assert_eq!(
            ids(&apply_sort(roster(), Some(PlayerOrder::Birthday))),
            vec![4, 1, 2, 3]
        );
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        // ids 3 and 4 share level 2 and must keep their relative input order
        assert_eq!(ids(&apply_sort(roster(), Some(PlayerOrder::Level))), vec![2, 3, 4, 1]);

        let mut reversed = roster();
        reversed.reverse();
        assert_eq!(ids(&apply_sort(reversed, Some(PlayerOrder::Level))), vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_name_order_is_lexicographic_and_case_sensitive() {
        let players = vec![
            player(1, "bolg", 1, 1, 1_000_000_000_000),
            player(2, "Bolg", 1, 1, 1_000_000_000_000),
            player(3, "Azog", 1, 1, 1_000_000_000_000),
        ];
        assert_eq!(ids(&apply_sort(players, Some(PlayerOrder::Name))), vec![3, 2, 1]);
    }

    #[test]
    fn test_order_deserializes_from_upper_case() {
        let order: PlayerOrder = serde_json::from_str("\"BIRTHDAY\"").unwrap();
        assert_eq!(order, PlayerOrder::Birthday);
        assert!(serde_json::from_str::<PlayerOrder>("\"birthday\"").is_err());
    }
}
