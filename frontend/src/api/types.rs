use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Payload for `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A backend reply captured whole. Both endpoints' replies are opaque to
/// this UI, so nothing is parsed out of the body; the panels render the
/// serialized form verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl RawResponse {
    pub fn display_text(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
    /// A response arrived but its body could not be read.
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }
}

/// End state of one form submission. Any resolved response counts as
/// `Succeeded` whatever its status code; only a request that never
/// completed becomes `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded(RawResponse),
    Failed(String),
}

impl SubmitOutcome {
    pub fn from_result(result: Result<RawResponse, ApiError>) -> Self {
        match result {
            Ok(response) => Self::Succeeded(response),
            Err(err) => Self::Failed(format!("error: {err}")),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    pub fn display_text(&self) -> String {
        match self {
            Self::Succeeded(response) => response.display_text(),
            Self::Failed(text) => text.clone(),
        }
    }
}
