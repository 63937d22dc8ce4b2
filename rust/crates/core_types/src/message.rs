//! Per-page message state.

use crate::{FETCH_FAILED_MESSAGE, FetchError, Page};

/// The settled result of a page fetch, tagged with the page that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub page: Page,
    pub result: Result<String, FetchError>,
}

/// Response text held by a mounted page.
///
/// Starts empty and is overwritten at most once, by an outcome from the
/// same page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMessage {
    page: Page,
    text: String,
    settled: bool,
}

impl PageMessage {
    /// Empty message for a freshly mounted page.
    pub fn new(page: Page) -> Self {
        Self {
            page,
            text: String::new(),
            settled: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Store a fetch outcome. Returns `false` if it was ignored because it
    /// came from another page or the message already settled.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        if self.settled || outcome.page != self.page {
            return false;
        }
        self.text = match outcome.result {
            Ok(body) => body,
            Err(_) => FETCH_FAILED_MESSAGE.to_string(),
        };
        self.settled = true;
        true
    }
}
