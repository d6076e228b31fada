//! API-key authentication: the credential gate in front of every /api route.
//!
//! The check itself is behind the `CredentialCheck` trait so a stronger
//! scheme can replace the static shared secret without touching handler
//! logic. `RequireApiKey` is the axum extractor handlers list first; its
//! rejection guarantees no handler body runs and no collaborator is
//! touched on deny.

use std::fmt;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the shared-secret credential.
pub const API_KEY_HEADER: &str = "x-api-key";

/// A pluggable credential check.
pub trait CredentialCheck: Send + Sync {
    /// Returns true when the presented credential is acceptable.
    fn authenticate(&self, credential: Option<&str>) -> bool;
}

/// Exact match against one process-wide static secret.
///
/// Case-sensitive, no normalization, no trimming: the header value must
/// equal the configured secret byte for byte. A missing credential is a
/// deny.
#[derive(Clone)]
pub struct StaticApiKey {
    secret: String,
}

impl StaticApiKey {
    /// Creates a check for the given secret.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl CredentialCheck for StaticApiKey {
    fn authenticate(&self, credential: Option<&str>) -> bool {
        credential == Some(self.secret.as_str())
    }
}

impl fmt::Debug for StaticApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticApiKey").finish_non_exhaustive()
    }
}

/// Extractor that runs the credential gate before the handler body.
///
/// Reads `X-API-KEY` from the request headers and asks the state's gate
/// whether it passes. Every decision is logged, allow and deny alike, so
/// unauthorized attempts leave an audit trail. A header value that is not
/// valid UTF-8 counts as missing.
#[derive(Debug, Clone, Copy)]
pub struct RequireApiKey;

impl FromRequestParts<AppState> for RequireApiKey {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        if state.gate().authenticate(presented) {
            tracing::info!(api_key = ?presented, outcome = "allow", "Authenticated request");
            Ok(Self)
        } else {
            tracing::warn!(api_key = ?presented, outcome = "deny", "Unauthorized access attempt");
            Err(ApiError::Unauthorized(
                "invalid or missing API key".to_string(),
            ))
        }
    }
}
