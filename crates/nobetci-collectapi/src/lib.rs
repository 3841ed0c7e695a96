//! Client for CollectAPI's on-duty pharmacy endpoint.

pub mod client;
pub mod error;
pub mod types;

pub use client::CollectApiClient;
pub use error::CollectApiError;
