//! Owns the [`SearchState`] and decides which responses may change it.
//!
//! Every issued request gets a ticket with a strictly increasing id. Only
//! the outcome whose ticket matches the latest id is applied, so a slow
//! earlier request can never overwrite the state of a newer one.

use crate::form::SearchRequest;
use crate::pharmacy::PharmacyRecord;
use crate::search::{SearchError, SearchState};

/// Proof that a request was issued; hand it back to [`SearchSession::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: u64,
    pub request: SearchRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Pre-flight check failed; nothing must be sent.
    Blocked(SearchError),
    /// The caller should send `Ticket::request` and report the outcome.
    Issued(Ticket),
}

#[derive(Debug, Default)]
pub struct SearchSession {
    state: SearchState,
    latest_id: u64,
}

impl SearchSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Starts a search.
    ///
    /// Without an API key the state becomes the missing-key error and no
    /// ticket is issued; requests still in flight are superseded all the
    /// same. Otherwise any previous error or results are
    /// dropped, the state becomes `Loading`, and a fresh ticket supersedes
    /// all earlier ones.
    pub fn submit(&mut self, request: SearchRequest, api_key_present: bool) -> Submission {
        self.latest_id += 1;
        if !api_key_present {
            let err = SearchError::MissingApiKey;
            tracing::warn!("search blocked: API key is not configured");
            self.state = SearchState::Error {
                message: err.user_message(),
            };
            return Submission::Blocked(err);
        }

        self.state = SearchState::Loading {
            province: request.province.clone(),
            district: request.district.clone(),
        };
        tracing::debug!(
            request_id = self.latest_id,
            province = %request.province,
            district = %request.district,
            "search issued"
        );
        Submission::Issued(Ticket {
            id: self.latest_id,
            request,
        })
    }

    /// Applies the outcome of `ticket`'s request.
    ///
    /// Returns `false` and leaves the state untouched when a newer request
    /// has been issued since.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<Vec<PharmacyRecord>, SearchError>,
    ) -> bool {
        if ticket.id != self.latest_id {
            tracing::debug!(
                request_id = ticket.id,
                latest_id = self.latest_id,
                "discarding stale search response"
            );
            return false;
        }

        self.state = match outcome {
            Ok(results) => {
                tracing::info!(
                    request_id = ticket.id,
                    province = %ticket.request.province,
                    count = results.len(),
                    "search completed"
                );
                SearchState::Success {
                    province: ticket.request.province,
                    results,
                }
            }
            Err(err) => {
                tracing::warn!(request_id = ticket.id, error = %err, "search failed");
                SearchState::Error {
                    message: err.user_message(),
                }
            }
        };
        true
    }
}
