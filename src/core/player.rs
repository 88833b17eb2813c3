//! Player record and its companion shapes
//!
//! A [`Player`] is the only entity managed by the roster. Three companion
//! shapes travel alongside it:
//! - [`NewPlayer`]: a raw create candidate, every field optional
//! - [`PlayerDraft`]: a validated candidate that has not been given an id yet
//! - [`PlayerUpdate`]: a raw partial update payload
//!
//! Birthdays are carried as `DateTime<Utc>` and serialized as epoch
//! milliseconds, which is the wire format clients already speak.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the store on creation
pub type PlayerId = i64;

/// Playable races
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Race {
    Human,
    Elf,
    Dwarf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

/// Playable professions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Profession {
    Warrior,
    Rogue,
    Sorcerer,
    Clerk,
    Paladin,
    Naturalist,
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Race::Human => "HUMAN",
            Race::Elf => "ELF",
            Race::Dwarf => "DWARF",
            Race::Giant => "GIANT",
            Race::Orc => "ORC",
            Race::Troll => "TROLL",
            Race::Hobbit => "HOBBIT",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Profession::Warrior => "WARRIOR",
            Profession::Rogue => "ROGUE",
            Profession::Sorcerer => "SORCERER",
            Profession::Clerk => "CLERK",
            Profession::Paladin => "PALADIN",
            Profession::Naturalist => "NATURALIST",
        };
        f.write_str(name)
    }
}

/// A stored player record
///
/// `name` and `title` are kept exactly as supplied; length rules are
/// evaluated on their trimmed form (see [`crate::core::validation`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub birthday: DateTime<Utc>,
    pub banned: bool,
    pub experience: i32,
    pub level: i32,
}

impl Player {
    /// Attach a store-assigned id to a validated draft
    pub fn from_draft(id: PlayerId, draft: PlayerDraft) -> Self {
        Self {
            id,
            name: draft.name,
            title: draft.title,
            race: draft.race,
            profession: draft.profession,
            birthday: draft.birthday,
            banned: draft.banned,
            experience: draft.experience,
            level: draft.level,
        }
    }
}

/// A validated player that has not been persisted yet
///
/// Only [`crate::core::validation::validate_new`] produces these outside of
/// tests, so a draft always satisfies the field rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerDraft {
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: DateTime<Utc>,
    pub banned: bool,
    pub experience: i32,
    pub level: i32,
}

/// Raw create payload
///
/// Every field is optional so that a missing field is reported as a
/// validation failure instead of a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPlayer {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub birthday: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub experience: Option<i32>,
    pub level: Option<i32>,
}

/// Raw partial update payload
///
/// Absent fields leave the stored value untouched. `id` and `level` cannot
/// be changed through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub birthday: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub experience: Option<i32>,
}

impl PlayerUpdate {
    /// True when the payload carries no field at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.title.is_none()
            && self.race.is_none()
            && self.profession.is_none()
            && self.birthday.is_none()
            && self.banned.is_none()
            && self.experience.is_none()
    }
}
