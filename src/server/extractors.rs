//! Axum extractors for the player routes
//!
//! Every rejection is turned into [`RosterError::InvalidArgument`] so clients
//! get the same error body for a bad id, a bad query string or a bad payload.

use crate::core::error::RosterError;
use crate::core::player::PlayerId;
use crate::core::query::QueryParams;
use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

/// Player id taken from the `{id}` path segment
///
/// Rejects anything that is not a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerIdPath(pub PlayerId);

impl PlayerIdPath {
    /// Parse a raw path segment into a positive id
    pub fn parse(raw: &str) -> Result<Self, RosterError> {
        let id: PlayerId = raw
            .parse()
            .map_err(|_| RosterError::invalid_argument(format!("player id is not a number: '{}'", raw)))?;
        if id <= 0 {
            return Err(RosterError::invalid_argument(format!(
                "player id must be positive: {}",
                id
            )));
        }
        Ok(Self(id))
    }
}

impl<S> FromRequestParts<S> for PlayerIdPath
where
    S: Send + Sync,
{
    type Rejection = RosterError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| RosterError::invalid_argument(e.body_text()))?;
        Self::parse(&raw)
    }
}

/// List query parameters
pub struct ListParams(pub QueryParams);

impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = RosterError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<QueryParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| RosterError::invalid_argument(e.body_text()))?;
        Ok(Self(params))
    }
}

/// JSON request body
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = RosterError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| RosterError::invalid_argument(e.body_text()))?;
        Ok(Self(value))
    }
}
