//! Player field rules, create validation and partial-merge updates
//!
//! Both write paths share the same per-field bounds:
//! - `name`: 1 to 12 characters once trimmed
//! - `title`: 1 to 30 characters once trimmed
//! - `experience`: 0 to 10 000 000 inclusive
//! - `birthday`: strictly after 2000-01-01T00:00Z and strictly before 3000-01-01T00:00Z
//!
//! Updates merge the fields present in the payload. Every present field is
//! checked before anything is applied, and the result is a new value, so a
//! rejected update can never leave a record half-written.

use super::validators::{int_range, open_interval, required, trimmed_length};
use crate::core::error::{FieldViolation, ValidationError, WriteOperation};
use crate::core::player::{NewPlayer, Player, PlayerDraft, PlayerUpdate};
use chrono::{DateTime, Utc};

pub const NAME_MAX_LEN: usize = 12;
pub const TITLE_MAX_LEN: usize = 30;
pub const EXPERIENCE_MIN: i32 = 0;
pub const EXPERIENCE_MAX: i32 = 10_000_000;
/// 2000-01-01T00:00:00Z
pub const BIRTHDAY_AFTER_MILLIS: i64 = 946_684_800_000;
/// 3000-01-01T00:00:00Z
pub const BIRTHDAY_BEFORE_MILLIS: i64 = 32_503_680_000_000;

fn check_name(name: &str) -> Result<(), FieldViolation> {
    trimmed_length(1, NAME_MAX_LEN)("name", name)
}

fn check_title(title: &str) -> Result<(), FieldViolation> {
    trimmed_length(1, TITLE_MAX_LEN)("title", title)
}

fn check_experience(experience: i32) -> Result<(), FieldViolation> {
    int_range(EXPERIENCE_MIN.into(), EXPERIENCE_MAX.into())("experience", experience.into())
}

fn check_birthday(birthday: DateTime<Utc>) -> Result<(), FieldViolation> {
    open_interval(BIRTHDAY_AFTER_MILLIS, BIRTHDAY_BEFORE_MILLIS)("birthday", birthday)
}

/// Collects violations across several fields
#[derive(Default)]
struct Violations(Vec<FieldViolation>);

impl Violations {
    fn check(&mut self, outcome: Result<(), FieldViolation>) {
        if let Err(v) = outcome {
            self.0.push(v);
        }
    }

    fn present<'a, T>(&mut self, field: &'static str, value: Option<&'a T>) -> Option<&'a T> {
        match required(field, value) {
            Ok(v) => Some(v),
            Err(violation) => {
                self.0.push(violation);
                None
            }
        }
    }

    fn finish(self, operation: WriteOperation) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.into_error(operation))
        }
    }

    fn into_error(self, operation: WriteOperation) -> ValidationError {
        ValidationError {
            operation,
            violations: self.0,
        }
    }
}

/// Validate a create candidate and turn it into a draft
///
/// Every rule is evaluated so the error lists all offending fields.
/// `banned` defaults to `false` and `level` to `0` when absent.
pub fn validate_new(candidate: &NewPlayer) -> Result<PlayerDraft, ValidationError> {
    let mut violations = Violations::default();

    let name = violations.present("name", candidate.name.as_ref());
    let title = violations.present("title", candidate.title.as_ref());
    let race = violations.present("race", candidate.race.as_ref());
    let profession = violations.present("profession", candidate.profession.as_ref());
    let birthday = violations.present("birthday", candidate.birthday.as_ref());
    let experience = violations.present("experience", candidate.experience.as_ref());

    if let Some(name) = name {
        violations.check(check_name(name));
    }
    if let Some(title) = title {
        violations.check(check_title(title));
    }
    if let Some(&experience) = experience {
        violations.check(check_experience(experience));
    }
    if let Some(&birthday) = birthday {
        violations.check(check_birthday(birthday));
    }

    // a missing field has already been recorded by `present`
    let (
        Some(name),
        Some(title),
        Some(&race),
        Some(&profession),
        Some(&birthday),
        Some(&experience),
    ) = (name, title, race, profession, birthday, experience)
    else {
        return Err(violations.into_error(WriteOperation::Create));
    };
    violations.finish(WriteOperation::Create)?;

    Ok(PlayerDraft {
        name: name.clone(),
        title: title.clone(),
        race,
        profession,
        birthday,
        banned: candidate.banned.unwrap_or(false),
        experience,
        level: candidate.level.unwrap_or(0),
    })
}

/// Whether a create candidate satisfies every field rule
pub fn is_valid(candidate: &NewPlayer) -> bool {
    validate_new(candidate).is_ok()
}

/// Check every field present in an update payload
pub fn validate_update(update: &PlayerUpdate) -> Result<(), ValidationError> {
    let mut violations = Violations::default();

    if let Some(name) = &update.name {
        violations.check(check_name(name));
    }
    if let Some(title) = &update.title {
        violations.check(check_title(title));
    }
    if let Some(experience) = update.experience {
        violations.check(check_experience(experience));
    }
    if let Some(birthday) = update.birthday {
        violations.check(check_birthday(birthday));
    }

    violations.finish(WriteOperation::Update)
}

/// Produce the new state of `current` with the update merged in
///
/// Fields absent from `update` keep their stored value; `id` and `level`
/// are never touched. If any present field is invalid nothing is applied.
pub fn apply_update(current: &Player, update: &PlayerUpdate) -> Result<Player, ValidationError> {
    validate_update(update)?;

    let mut next = current.clone();
    if let Some(name) = &update.name {
        next.name = name.clone();
    }
    if let Some(title) = &update.title {
        next.title = title.clone();
    }
    if let Some(race) = update.race {
        next.race = race;
    }
    if let Some(profession) = update.profession {
        next.profession = profession;
    }
    if let Some(birthday) = update.birthday {
        next.birthday = birthday;
    }
    if let Some(banned) = update.banned {
        next.banned = banned;
    }
    if let Some(experience) = update.experience {
        next.experience = experience;
    }
    Ok(next)
}
