//! Glue between the search session and the CollectAPI client.

use std::sync::Arc;

use nobetci_collectapi::CollectApiClient;
use nobetci_core::{
    AppConfig, PharmacyRecord, SearchError, SearchRequest, SearchSession, Submission, Ticket,
};
use tokio::sync::mpsc;

pub(crate) type Outcome = (Ticket, Result<Vec<PharmacyRecord>, SearchError>);

/// Holds the API client when a key is configured.
///
/// Without a key there is no client at all, so a blocked search has no way
/// to reach the network.
pub(crate) struct Lookup {
    client: Option<Arc<CollectApiClient>>,
}

impl Lookup {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the configured
    /// base URL is invalid.
    pub(crate) fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let client = match config.collect_api_key.as_deref() {
            Some(key) if config.has_api_key() => Some(Arc::new(CollectApiClient::with_base_url(
                key,
                config.request_timeout_secs,
                &config.user_agent,
                &config.api_base_url,
            )?)),
            _ => {
                tracing::warn!("COLLECT_API_KEY is not set; searches will be refused");
                None
            }
        };
        Ok(Self { client })
    }

    /// Runs the session's pre-flight check. Returns the client and ticket to
    /// send, or `None` when the search was blocked.
    fn submit(
        &self,
        session: &mut SearchSession,
        request: SearchRequest,
    ) -> Option<(Arc<CollectApiClient>, Ticket)> {
        match session.submit(request, self.client.is_some()) {
            Submission::Issued(ticket) => self.client.clone().map(|client| (client, ticket)),
            Submission::Blocked(_) => None,
        }
    }

    /// Submits and awaits a single search, leaving the outcome in `session`.
    pub(crate) async fn run_once(&self, session: &mut SearchSession, request: SearchRequest) {
        let Some((client, ticket)) = self.submit(session, request) else {
            return;
        };
        let outcome = fetch(&client, &ticket.request).await;
        session.complete(ticket, outcome);
    }

    /// Submits a search and runs the request as a background task that
    /// reports back on `tx`. Returns `false` if the search was blocked.
    pub(crate) fn spawn(
        &self,
        session: &mut SearchSession,
        request: SearchRequest,
        tx: &mpsc::UnboundedSender<Outcome>,
    ) -> bool {
        let Some((client, ticket)) = self.submit(session, request) else {
            return false;
        };
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = fetch(&client, &ticket.request).await;
            if tx.send((ticket, outcome)).is_err() {
                tracing::debug!("search result arrived after the form closed");
            }
        });
        true
    }
}

async fn fetch(
    client: &CollectApiClient,
    request: &SearchRequest,
) -> Result<Vec<PharmacyRecord>, SearchError> {
    client.duty_pharmacies(request).await.map_err(|e| {
        tracing::warn!(error = %e, "duty pharmacy lookup failed");
        SearchError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use nobetci_core::{Environment, SearchState};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn config(base_url: &str, api_key: Option<&str>) -> AppConfig {
        AppConfig {
            env: Environment::Test,
            log_level: "warn".to_string(),
            collect_api_key: api_key.map(str::to_string),
            api_base_url: base_url.to_string(),
            request_timeout_secs: Some(5),
            user_agent: "nobetci-test".to_string(),
            default_province: "Ankara".to_string(),
        }
    }

    fn request(province: &str) -> SearchRequest {
        SearchRequest {
            province: province.to_string(),
            district: String::new(),
        }
    }

    #[tokio::test]
    async fn missing_key_never_calls_the_api() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let lookup = Lookup::from_config(&config(&server.uri(), None)).expect("lookup");
        let mut session = SearchSession::new();
        lookup.run_once(&mut session, request("Ankara")).await;

        assert_eq!(
            session.state(),
            &SearchState::Error {
                message: "Lütfen .env dosyasına API anahtarını ekleyin.".to_string()
            }
        );
        server.verify().await;
    }

    #[tokio::test]
    async fn blank_key_is_treated_as_missing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let lookup = Lookup::from_config(&config(&server.uri(), Some("  "))).expect("lookup");
        let mut session = SearchSession::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        assert!(!lookup.spawn(&mut session, request("Ankara"), &tx));
        assert!(matches!(session.state(), SearchState::Error { .. }));
        server.verify().await;
    }

    #[tokio::test]
    async fn run_once_applies_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health/dutyPharmacy"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "result": [{ "name": "A" }, { "name": "B" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let lookup = Lookup::from_config(&config(&server.uri(), Some("k"))).expect("lookup");
        let mut session = SearchSession::new();
        lookup.run_once(&mut session, request("Eskişehir")).await;

        match session.state() {
            SearchState::Success { province, results } => {
                assert_eq!(province, "Eskişehir");
                assert_eq!(results.len(), 2);
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn run_once_applies_api_failure_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "success": false, "message": "X" })),
            )
            .mount(&server)
            .await;

        let lookup = Lookup::from_config(&config(&server.uri(), Some("k"))).expect("lookup");
        let mut session = SearchSession::new();
        lookup.run_once(&mut session, request("Ankara")).await;

        assert_eq!(
            session.state(),
            &SearchState::Error {
                message: "X".to_string()
            }
        );
    }

    #[tokio::test]
    async fn spawned_search_reports_back_on_channel() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "result": []
            })))
            .mount(&server)
            .await;

        let lookup = Lookup::from_config(&config(&server.uri(), Some("k"))).expect("lookup");
        let mut session = SearchSession::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        assert!(lookup.spawn(&mut session, request("Kilis"), &tx));
        assert!(session.state().is_loading());

        let (ticket, outcome) = rx.recv().await.expect("task should report");
        assert!(session.complete(ticket, outcome));
        assert_eq!(
            session.state(),
            &SearchState::Success {
                province: "Kilis".to_string(),
                results: Vec::new(),
            }
        );
    }
}
