//! Search outcome types: the state the viewer renders and the failures
//! that can end a search.

use thiserror::Error;

use crate::messages;
use crate::pharmacy::PharmacyRecord;

/// The lookup state shown to the user.
///
/// Each variant carries only what it can legitimately hold, so a loading
/// state with stale results (or an error next to a result list) cannot be
/// represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No search has been submitted yet.
    #[default]
    Idle,
    Loading {
        province: String,
        district: String,
    },
    Error {
        message: String,
    },
    /// `province` is the province that was searched, which may differ from
    /// the form's current selection. `results` may be empty.
    Success {
        province: String,
        results: Vec<PharmacyRecord>,
    },
}

impl SearchState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading { .. })
    }

    /// The records of a successful search, or an empty slice otherwise.
    #[must_use]
    pub fn results(&self) -> &[PharmacyRecord] {
        match self {
            SearchState::Success { results, .. } => results,
            _ => &[],
        }
    }
}

/// Why a search attempt ended without results.
///
/// Every variant is terminal for the attempt; the next submit starts from a
/// clean state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// No API key is configured; the request was never sent.
    #[error("API key is not configured")]
    MissingApiKey,

    /// The request failed in transit or came back with a non-2xx status.
    /// `message` is the `message` field of the error payload, if any.
    #[error("transport failure: {detail}")]
    Transport {
        message: Option<String>,
        detail: String,
    },

    /// The endpoint answered with `success: false`.
    #[error("lookup failed: {}", .message.as_deref().unwrap_or("no message"))]
    Api { message: Option<String> },
}

impl SearchError {
    /// Localized text for the error slot of the view.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SearchError::MissingApiKey => messages::MISSING_API_KEY.to_string(),
            SearchError::Transport { message, .. } => {
                non_empty_or(message.as_deref(), messages::TRANSPORT_FAILURE_FALLBACK)
            }
            SearchError::Api { message } => {
                non_empty_or(message.as_deref(), messages::API_FAILURE_FALLBACK)
            }
        }
    }
}

fn non_empty_or(message: Option<&str>, fallback: &str) -> String {
    message
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
