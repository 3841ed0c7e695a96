//! Domain types and state machine for the on-duty pharmacy lookup.
//!
//! Nothing in this crate performs I/O: the HTTP client lives in
//! `nobetci-collectapi` and the terminal front end in `nobetci-cli`.

pub mod app_config;
pub mod config;
pub mod form;
pub mod messages;
pub mod pharmacy;
pub mod provinces;
pub mod search;
pub mod session;
pub mod view;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use form::{Field, FormError, FormEvent, Key, SearchForm, SearchRequest};
pub use pharmacy::PharmacyRecord;
pub use provinces::{find_province, PROVINCES};
pub use search::{SearchError, SearchState};
pub use session::{SearchSession, Submission, Ticket};
pub use view::{render, Card, Notice, NoticeKind, ResultsHeader, View, ViewBody};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
