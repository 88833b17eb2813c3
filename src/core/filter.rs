//! Predicate-based player filtering
//!
//! Every criterion is optional and `None` means "no constraint". Present
//! criteria are combined with AND. Filtering never reorders its input.

use crate::core::player::{Player, Profession, Race};
use chrono::{DateTime, Utc};

/// Set of optional predicates evaluated against each player
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerCriteria {
    /// Case-sensitive substring of `name`
    pub name: Option<String>,
    /// Case-sensitive substring of `title`
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Inclusive lower bound on `birthday`
    pub after: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `birthday`
    pub before: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
}

impl PlayerCriteria {
    /// True when no criterion is set
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    /// Evaluate every present criterion against one player
    pub fn matches(&self, player: &Player) -> bool {
        self.name
            .as_deref()
            .is_none_or(|name| player.name.contains(name))
            && self
                .title
                .as_deref()
                .is_none_or(|title| player.title.contains(title))
            && self.race.is_none_or(|race| player.race == race)
            && self
                .profession
                .is_none_or(|profession| player.profession == profession)
            && self.after.is_none_or(|after| player.birthday >= after)
            && self.before.is_none_or(|before| player.birthday <= before)
            && self.banned.is_none_or(|banned| player.banned == banned)
            && within(player.experience, self.min_experience, self.max_experience)
            && within(player.level, self.min_level, self.max_level)
    }

    /// Keep the players matching every criterion, in input order
    pub fn apply(&self, players: Vec<Player>) -> Vec<Player> {
        if self.is_unconstrained() {
            return players;
        }
        players.into_iter().filter(|p| self.matches(p)).collect()
    }

    /// Count matching players without collecting them
    pub fn count(&self, players: &[Player]) -> usize {
        players.iter().filter(|p| self.matches(p)).count()
    }
}

fn within(value: i32, min: Option<i32>, max: Option<i32>) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}
