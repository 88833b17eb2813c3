//! Router builder for the player routes

use super::handlers::{
    AppState, count_players, create_player, delete_player, get_player, health_check, list_players,
    update_player,
};
use axum::{Router, routing::get};

/// Build the player routes
///
/// - GET /rest/players - Filtered, sorted, paginated list
/// - POST /rest/players - Create a player
/// - GET /rest/players/count - Count matching players
/// - GET /rest/players/{id} - Get a player
/// - POST /rest/players/{id} - Update a player
/// - DELETE /rest/players/{id} - Delete a player
pub fn build_player_routes(state: AppState) -> Router {
    Router::new()
        .route("/rest/players", get(list_players).post(create_player))
        .route("/rest/players/count", get(count_players))
        .route(
            "/rest/players/{id}",
            get(get_player).post(update_player).delete(delete_player),
        )
        .with_state(state)
}

/// Build health check routes
pub fn build_health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}
