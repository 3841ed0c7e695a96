use nobetci_core::SearchError;
use thiserror::Error;

/// Errors returned by the CollectAPI client.
#[derive(Debug, Error)]
pub enum CollectApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response. `message` is the `message` field of the JSON error
    /// payload when the body carried one.
    #[error("unexpected HTTP status {status} from CollectAPI")]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// The API answered 2xx with `"success": false`.
    #[error("CollectAPI error: {}", .message.as_deref().unwrap_or("no message"))]
    Api { message: Option<String> },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl From<CollectApiError> for SearchError {
    fn from(err: CollectApiError) -> Self {
        match err {
            CollectApiError::Status { status, message } => SearchError::Transport {
                message,
                detail: format!("HTTP {status}"),
            },
            CollectApiError::Api { message } => SearchError::Api { message },
            // A 2xx body that is not the expected envelope carries no usable
            // success flag, which counts as an API-level failure.
            CollectApiError::Deserialize { .. } => SearchError::Api { message: None },
            other @ (CollectApiError::Http(_) | CollectApiError::InvalidBaseUrl { .. }) => {
                SearchError::Transport {
                    message: None,
                    detail: other.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_keeps_payload_message() {
        let err: SearchError = CollectApiError::Status {
            status: 401,
            message: Some("Yetkisiz".to_string()),
        }
        .into();
        assert_eq!(err.user_message(), "Yetkisiz");
    }

    #[test]
    fn status_error_without_payload_uses_transport_fallback() {
        let err: SearchError = CollectApiError::Status {
            status: 502,
            message: None,
        }
        .into();
        assert_eq!(err.user_message(), "Bilinmeyen bir hata oluştu.");
    }

    #[test]
    fn api_error_maps_to_api_failure() {
        let err: SearchError = CollectApiError::Api {
            message: Some("X".to_string()),
        }
        .into();
        assert_eq!(
            err,
            SearchError::Api {
                message: Some("X".to_string())
            }
        );
    }

    #[test]
    fn malformed_body_maps_to_api_fallback() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: SearchError = CollectApiError::Deserialize {
            context: "dutyPharmacy".to_string(),
            source,
        }
        .into();
        assert_eq!(
            err.user_message(),
            "Eczane bilgileri alınırken bir hata oluştu."
        );
    }
}
