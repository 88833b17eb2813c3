//! Core module: the player model, the query engine and the write rules

pub mod error;
pub mod filter;
pub mod player;
pub mod query;
pub mod service;
pub mod sort;
pub mod store;
pub mod validation;

pub use error::{RosterError, RosterResult, StorageError, ValidationError, WriteOperation};
pub use filter::PlayerCriteria;
pub use player::{NewPlayer, Player, PlayerDraft, PlayerId, PlayerUpdate, Profession, Race};
pub use query::{DEFAULT_PAGE_SIZE, PageRequest, PlayerQuery, QueryParams, paginate};
pub use service::PlayerService;
pub use sort::{PlayerOrder, apply_sort};
pub use store::{PlayerRecord, PlayerStore};
