//! Query parameters and pagination utilities

use crate::core::error::{RosterError, RosterResult};
use crate::core::filter::PlayerCriteria;
use crate::core::player::{Profession, Race};
use crate::core::sort::PlayerOrder;
use chrono::{DateTime, Utc};
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

/// Page size used when a query does not name one
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// One page of an ordered sequence: zero-based number and size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: usize,
    pub size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            number: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(number: usize, size: usize) -> Self {
        Self { number, size }
    }

    /// Half-open index range of this page over `len` items, if not empty
    pub fn bounds(&self, len: usize) -> Option<(usize, usize)> {
        let from = self.number.checked_mul(self.size)?;
        if from >= len {
            return None;
        }
        let to = from.saturating_add(self.size).min(len);
        Some((from, to))
    }
}

/// Slice one page out of `items`
///
/// Page `p` of size `s` over `n` items is `[p*s, min((p+1)*s, n))`. A page
/// starting at or beyond the end is empty rather than an error.
pub fn paginate<T>(items: &[T], page: PageRequest) -> &[T] {
    match page.bounds(items.len()) {
        Some((from, to)) => &items[from..to],
        None => &[],
    }
}

/// A fully typed list query: criteria, ordering and page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerQuery {
    pub criteria: PlayerCriteria,
    pub order: Option<PlayerOrder>,
    pub page: PageRequest,
}

/// Raw list parameters as they arrive in a query string
///
/// # Example
/// ```text
/// GET /rest/players?name=Rag&race=HUMAN&order=LEVEL&pageNumber=1&pageSize=5
/// GET /rest/players?after=946684800000&before=32503680000000&banned=false
/// ```
///
/// Values are kept signed so that negative paging can be reported as an
/// invalid argument instead of a generic decoding failure. A parameter given
/// with an empty value (`?race=`) counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParams {
    #[serde(deserialize_with = "non_empty")]
    pub name: Option<String>,
    #[serde(deserialize_with = "non_empty")]
    pub title: Option<String>,
    #[serde(deserialize_with = "non_empty_variant")]
    pub race: Option<Race>,
    #[serde(deserialize_with = "non_empty_variant")]
    pub profession: Option<Profession>,
    /// Epoch milliseconds
    #[serde(deserialize_with = "non_empty")]
    pub after: Option<i64>,
    /// Epoch milliseconds
    #[serde(deserialize_with = "non_empty")]
    pub before: Option<i64>,
    #[serde(deserialize_with = "non_empty")]
    pub banned: Option<bool>,
    #[serde(deserialize_with = "non_empty")]
    pub min_experience: Option<i32>,
    #[serde(deserialize_with = "non_empty")]
    pub max_experience: Option<i32>,
    #[serde(deserialize_with = "non_empty")]
    pub min_level: Option<i32>,
    #[serde(deserialize_with = "non_empty")]
    pub max_level: Option<i32>,
    #[serde(deserialize_with = "non_empty_variant")]
    pub order: Option<PlayerOrder>,
    #[serde(deserialize_with = "non_empty")]
    pub page_number: Option<i64>,
    #[serde(deserialize_with = "non_empty")]
    pub page_size: Option<i64>,
}

/// Parse a query value with `FromStr`, treating an empty value as `None`
fn non_empty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.is_empty() => raw.parse().map(Some).map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Decode a query value as a unit enum variant, treating an empty value as `None`
fn non_empty_variant<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.is_empty() => T::deserialize(raw.into_deserializer())
            .map(Some)
            .map_err(|e: serde::de::value::Error| serde::de::Error::custom(e)),
        _ => Ok(None),
    }
}

impl QueryParams {
    /// Build the filter criteria, ignoring ordering and paging
    pub fn criteria(&self) -> RosterResult<PlayerCriteria> {
        Ok(PlayerCriteria {
            name: self.name.clone(),
            title: self.title.clone(),
            race: self.race,
            profession: self.profession,
            after: self.after.map(|ms| instant("after", ms)).transpose()?,
            before: self.before.map(|ms| instant("before", ms)).transpose()?,
            banned: self.banned,
            min_experience: self.min_experience,
            max_experience: self.max_experience,
            min_level: self.min_level,
            max_level: self.max_level,
        })
    }

    /// Build the page request, falling back to page 0 and `default_size`
    pub fn page(&self, default_size: usize) -> RosterResult<PageRequest> {
        let number = match self.page_number {
            Some(n) => non_negative("pageNumber", n)?,
            None => 0,
        };
        let size = match self.page_size {
            Some(n) => non_negative("pageSize", n)?,
            None => default_size,
        };
        Ok(PageRequest { number, size })
    }

    /// Build the complete typed query
    pub fn into_query(self, default_size: usize) -> RosterResult<PlayerQuery> {
        Ok(PlayerQuery {
            criteria: self.criteria()?,
            order: self.order,
            page: self.page(default_size)?,
        })
    }
}

fn instant(field: &str, millis: i64) -> RosterResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        RosterError::invalid_argument(format!("'{}' is not a representable instant: {}", field, millis))
    })
}

fn non_negative(field: &str, value: i64) -> RosterResult<usize> {
    usize::try_from(value)
        .map_err(|_| RosterError::invalid_argument(format!("'{}' must not be negative: {}", field, value)))
}
