//! # Player Roster
//!
//! Record management for player characters: create, read, update and delete,
//! plus filtered, sorted and paginated listing.
//!
//! ## Features
//!
//! - **Filter engine**: optional, AND-combined predicates over names, titles, race, profession, birthday, ban flag, experience and level
//! - **Stable sorting**: one ascending key, ties keep their input order
//! - **Pagination**: zero-based page number, page size 3 unless told otherwise
//! - **Field validation**: the same bounds on create and update, all-or-nothing
//! - **Pluggable storage**: any [`core::store::PlayerStore`]; an in-memory store ships by default
//! - **REST exposure**: axum routes under `/rest/players`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roster::prelude::*;
//!
//! let service = PlayerService::new(InMemoryPlayerStore::new());
//!
//! let created = service.create(NewPlayer {
//!     name: Some("Ragnar".into()),
//!     title: Some("Chief".into()),
//!     race: Some(Race::Human),
//!     profession: Some(Profession::Warrior),
//!     birthday: DateTime::from_timestamp_millis(1_262_304_000_000),
//!     experience: Some(100),
//!     ..Default::default()
//! }).await?;
//!
//! let page = service.list(&PlayerQuery {
//!     order: Some(PlayerOrder::Name),
//!     ..Default::default()
//! }).await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        DEFAULT_PAGE_SIZE, NewPlayer, PageRequest, Player, PlayerCriteria, PlayerDraft, PlayerId,
        PlayerOrder, PlayerQuery, PlayerRecord, PlayerService, PlayerStore, PlayerUpdate,
        Profession, QueryParams, Race, RosterError, RosterResult, StorageError, ValidationError,
        WriteOperation, apply_sort, paginate,
    };
    pub use crate::core::error::{ErrorResponse, FieldViolation};
    pub use crate::core::validation::{apply_update, is_valid, validate_new, validate_update};

    // === Storage ===
    pub use crate::storage::InMemoryPlayerStore;

    // === Config ===
    pub use crate::config::{PaginationConfig, RosterConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
