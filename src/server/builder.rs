//! ServerBuilder for fluent API to build the roster HTTP server

use super::handlers::AppState;
use super::router::{build_health_routes, build_player_routes};
use crate::config::RosterConfig;
use crate::core::service::PlayerService;
use crate::core::store::PlayerStore;
use crate::storage::InMemoryPlayerStore;
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Builder for the roster HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryPlayerStore::new())
///     .with_config(RosterConfig::from_yaml_file("roster.yaml")?)
///     .build()
///     .await?;
/// ```
pub struct ServerBuilder {
    store: Option<Arc<dyn PlayerStore>>,
    config: RosterConfig,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with default configuration
    pub fn new() -> Self {
        Self {
            store: None,
            config: RosterConfig::default(),
        }
    }

    /// Set the player store (defaults to an empty in-memory store)
    pub fn with_store(mut self, store: impl PlayerStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set the configuration
    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the service and seed it with the configured players
    ///
    /// Seed players go through the regular create path, so an invalid seed
    /// entry aborts startup.
    pub async fn build_service(&mut self) -> Result<PlayerService> {
        self.config.validate()?;

        let store = match self.store.take() {
            Some(store) => store,
            None => {
                tracing::info!("no store configured, using in-memory storage");
                Arc::new(InMemoryPlayerStore::new())
            }
        };
        let service = PlayerService::from_arc(store);

        let seeds = std::mem::take(&mut self.config.players);
        let seeded = seeds.len();
        for (index, candidate) in seeds.into_iter().enumerate() {
            service
                .create(candidate)
                .await
                .with_context(|| format!("invalid seed player at index {}", index))?;
        }
        if seeded > 0 {
            tracing::info!(count = seeded, "seeded players from configuration");
        }

        Ok(service)
    }

    /// Build the router with all routes and the trace layer
    pub async fn build(mut self) -> Result<Router> {
        let service = self.build_service().await?;
        Ok(self.router(service))
    }

    fn router(&self, service: PlayerService) -> Router {
        let state = AppState {
            service,
            default_page_size: self.config.pagination.default_page_size,
        };

        build_health_routes()
            .merge(build_player_routes(state))
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to `server.bind` from the configuration
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(mut self) -> Result<()> {
        let service = self.build_service().await?;
        let addr = self.config.server.bind.clone();
        let app = self.router(service);

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::PlayerCriteria;
    use crate::core::player::NewPlayer;

    #[tokio::test]
    async fn test_build_without_store_uses_in_memory() {
        let result = ServerBuilder::new().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_seed_aborts_build() {
        let config = RosterConfig {
            players: vec![NewPlayer {
                name: Some("Nameless".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let result = ServerBuilder::new().with_config(config).build().await;
        let message = format!("{:#}", result.err().unwrap());
        assert!(message.contains("seed player at index 0"));
    }

    #[tokio::test]
    async fn test_seed_players_are_stored() {
        let yaml = r#"
players:
  - name: Ragnar
    title: Chief
    race: HUMAN
    profession: WARRIOR
    birthday: 1262304000000
    experience: 100
  - name: Lagertha
    title: Shieldmaiden
    race: HUMAN
    profession: PALADIN
    birthday: 1262304000000
    experience: 200
"#;
        let store = InMemoryPlayerStore::new();
        let mut builder = ServerBuilder::new()
            .with_store(store.clone())
            .with_config(RosterConfig::from_yaml_str(yaml).unwrap());

        let service = builder.build_service().await.unwrap();
        assert_eq!(service.count(&PlayerCriteria::default()).await.unwrap(), 2);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_zero_page_size_is_rejected() {
        let mut config = RosterConfig::default();
        config.pagination.default_page_size = 0;

        assert!(ServerBuilder::new().with_config(config).build().await.is_err());
    }
}
