//! Server module: the REST boundary over the roster
//!
//! This module provides a `ServerBuilder` that wires a store, the
//! configuration and the player routes into an axum `Router`.

pub mod builder;
pub mod extractors;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
