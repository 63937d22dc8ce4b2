//! Browser text fetcher.

use core_types::{ClientConfig, FetchError, Result, TextFetcher};
use gloo_net::http::Request;
use yew::prelude::*;

/// [`TextFetcher`] backed by the browser `fetch` API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlooFetcher {
    config: ClientConfig,
}

impl GlooFetcher {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl TextFetcher for GlooFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let resp = Request::get(&self.config.url(path))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }

        resp.text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))
    }
}

/// Fetcher for the [`ClientConfig`] in context, or same-origin without one.
#[hook]
pub fn use_gloo_fetcher() -> GlooFetcher {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    GlooFetcher::new(config)
}
