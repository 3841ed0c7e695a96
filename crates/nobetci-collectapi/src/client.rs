//! HTTP client for CollectAPI's `health/dutyPharmacy` endpoint.
//!
//! Wraps `reqwest` with the `apikey` authorization scheme and typed response
//! handling. Non-2xx responses surface as [`CollectApiError::Status`] and a
//! `"success": false` envelope as [`CollectApiError::Api`].

use std::time::Duration;

use nobetci_core::{PharmacyRecord, SearchRequest};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};

use crate::error::CollectApiError;
use crate::types::{DutyPharmacyResponse, ErrorPayload};

const DUTY_PHARMACY_PATH: &str = "health/dutyPharmacy";

/// Client for the CollectAPI duty pharmacy lookup.
///
/// The base URL comes from configuration (`NOBETCI_API_BASE_URL`), which
/// also lets tests point the client at a mock server.
pub struct CollectApiClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl CollectApiClient {
    /// Creates a client for `base_url` with the given `User-Agent`.
    ///
    /// `timeout_secs` of `None` leaves requests without any deadline, for
    /// connecting as well as for the whole request.
    ///
    /// # Errors
    ///
    /// Returns [`CollectApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CollectApiError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: Option<u64>,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, CollectApiError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            let deadline = Duration::from_secs(secs);
            builder = builder.connect_timeout(deadline).timeout(deadline);
        }
        let client = builder.build()?;

        // Exactly one trailing slash, so joining the endpoint path appends
        // to the base instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| CollectApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Looks up on-duty pharmacies for `request.province`, optionally
    /// narrowed to `request.district`.
    ///
    /// Records come back in the order the API sent them. An empty list is a
    /// successful answer, not an error. Entries that fail to deserialize
    /// (e.g. without a `name`) are skipped with a warning.
    ///
    /// # Errors
    ///
    /// - [`CollectApiError::Http`] on network failure.
    /// - [`CollectApiError::Status`] on a non-2xx status.
    /// - [`CollectApiError::Api`] if the envelope says `"success": false`.
    /// - [`CollectApiError::Deserialize`] if the body is not the expected
    ///   envelope.
    pub async fn duty_pharmacies(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<PharmacyRecord>, CollectApiError> {
        let url = self.build_url(&request.province, &request.district);
        tracing::debug!(
            province = %request.province,
            district = %request.district,
            "requesting duty pharmacies"
        );

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("apikey {}", self.api_key))
            // The endpoint documents this header even on GET.
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "CollectAPI returned non-2xx status");
            return Err(CollectApiError::Status {
                status: status.as_u16(),
                message: Self::payload_message(&body),
            });
        }

        let envelope: DutyPharmacyResponse =
            serde_json::from_str(&body).map_err(|e| CollectApiError::Deserialize {
                context: format!(
                    "dutyPharmacy(il={}, ilce={})",
                    request.province, request.district
                ),
                source: e,
            })?;

        if !envelope.success {
            return Err(CollectApiError::Api {
                message: envelope.message,
            });
        }

        let records = envelope
            .result
            .unwrap_or_default()
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<PharmacyRecord>(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed pharmacy entry");
                    None
                }
            })
            .collect();

        Ok(records)
    }

    /// Builds the endpoint URL with `il` and `ilce` percent-encoded.
    /// `ilce` is always sent, empty when no district filter is set.
    fn build_url(&self, province: &str, district: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(DUTY_PHARMACY_PATH.split('/'));
        }
        url.query_pairs_mut()
            .append_pair("il", province)
            .append_pair("ilce", district);
        url
    }

    /// Pulls `message` out of an error body, if it is JSON and has one.
    fn payload_message(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorPayload>(body)
            .ok()
            .and_then(|p| p.message)
            .filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
