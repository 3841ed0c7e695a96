#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration for the lookup front ends.
///
/// `collect_api_key` is optional on purpose: a missing key is reported to the
/// user when a search is submitted, not at startup. The key is shipped to
/// whoever runs the binary, so redaction here only keeps it out of logs.
#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub collect_api_key: Option<String>,
    pub api_base_url: String,
    /// `None` leaves requests without a deadline.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
    pub default_province: String,
}

impl AppConfig {
    /// Whether a non-empty API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.collect_api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field(
                "collect_api_key",
                &self.collect_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("default_province", &self.default_province)
            .finish()
    }
}
