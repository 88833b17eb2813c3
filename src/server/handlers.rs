//! HTTP handlers for player routes
//!
//! Handlers only translate between HTTP and [`PlayerService`]; every rule
//! lives in the core.

use super::extractors::{ListParams, Payload, PlayerIdPath};
use crate::core::error::RosterResult;
use crate::core::player::{NewPlayer, Player, PlayerUpdate};
use crate::core::service::PlayerService;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{Value, json};

/// Application state shared by the player handlers
#[derive(Clone)]
pub struct AppState {
    pub service: PlayerService,
    /// Page size used when a list query omits `pageSize`
    pub default_page_size: usize,
}

/// GET /rest/players
pub async fn list_players(
    State(state): State<AppState>,
    ListParams(params): ListParams,
) -> RosterResult<Json<Vec<Player>>> {
    let query = params.into_query(state.default_page_size)?;
    Ok(Json(state.service.list(&query).await?))
}

/// GET /rest/players/count
///
/// Ordering and paging parameters are accepted but ignored.
pub async fn count_players(
    State(state): State<AppState>,
    ListParams(params): ListParams,
) -> RosterResult<Json<usize>> {
    let criteria = params.criteria()?;
    Ok(Json(state.service.count(&criteria).await?))
}

/// GET /rest/players/{id}
pub async fn get_player(
    State(state): State<AppState>,
    PlayerIdPath(id): PlayerIdPath,
) -> RosterResult<Json<Player>> {
    Ok(Json(state.service.get(id).await?))
}

/// POST /rest/players
pub async fn create_player(
    State(state): State<AppState>,
    Payload(candidate): Payload<NewPlayer>,
) -> RosterResult<Json<Player>> {
    Ok(Json(state.service.create(candidate).await?))
}

/// POST /rest/players/{id}
pub async fn update_player(
    State(state): State<AppState>,
    PlayerIdPath(id): PlayerIdPath,
    Payload(update): Payload<PlayerUpdate>,
) -> RosterResult<Json<Player>> {
    Ok(Json(state.service.update(id, update).await?))
}

/// DELETE /rest/players/{id}
pub async fn delete_player(
    State(state): State<AppState>,
    PlayerIdPath(id): PlayerIdPath,
) -> RosterResult<StatusCode> {
    state.service.delete(id).await?;
    Ok(StatusCode::OK)
}

/// GET /health and /healthz
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
