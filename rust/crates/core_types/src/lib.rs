//! Core types for the risk pages client.
//!
//! This crate holds everything the frontend needs that does not touch
//! the browser: the fixed page table, the text-fetch seam, and the
//! per-page message state that a fetch result settles into.

mod fetch;
mod message;
mod page;

pub use fetch::{TextFetcher, load_page};
pub use message::{FetchOutcome, PageMessage};
pub use page::{FETCH_FAILED_MESSAGE, HOME_LINK_LABEL, Page};

use thiserror::Error;

/// Errors from a text fetch.
///
/// Every variant is shown to the user as [`FETCH_FAILED_MESSAGE`]; the
/// distinction only matters for console diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network request failed: {0}")]
    Network(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Response body could not be read: {0}")]
    Body(String),
}

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Configuration for the page client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every endpoint path (default: empty, same origin)
    pub api_base: String,
}

impl ClientConfig {
    /// Full URL for an endpoint path.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), endpoint)
    }
}
