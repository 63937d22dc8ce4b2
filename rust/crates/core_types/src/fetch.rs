//! The text-fetch seam between page state and the network.

use crate::{FetchOutcome, Page, Result};

/// Something that can GET a path and return the body as text.
#[allow(async_fn_in_trait)]
pub trait TextFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String>;
}

/// Fetch a page's endpoint once and tag the result with the page.
pub async fn load_page<F: TextFetcher>(fetcher: &F, page: Page) -> FetchOutcome {
    let result = fetcher.fetch_text(page.endpoint()).await;
    FetchOutcome { page, result }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FETCH_FAILED_MESSAGE, FetchError, PageMessage};
    use std::cell::RefCell;

    /// Records every requested path and answers with a fixed result.
    struct RecordingFetcher {
        calls: RefCell<Vec<String>>,
        response: Result<String>,
    }

    impl RecordingFetcher {
        fn new(response: Result<String>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                response,
            }
        }
    }

    impl TextFetcher for RecordingFetcher {
        async fn fetch_text(&self, path: &str) -> Result<String> {
            self.calls.borrow_mut().push(path.to_string());
            self.response.clone()
        }
    }

    #[tokio::test]
    async fn test_load_page_fetches_endpoint_once() {
        for page in Page::ALL {
            let fetcher = RecordingFetcher::new(Ok("OK".to_string()));
            let outcome = load_page(&fetcher, page).await;

            assert_eq!(*fetcher.calls.borrow(), vec![page.endpoint().to_string()]);
            assert_eq!(outcome.page, page);
            assert_eq!(outcome.result, Ok("OK".to_string()));
        }
    }

    #[tokio::test]
    async fn test_load_then_apply_success() {
        let fetcher = RecordingFetcher::new(Ok("OK".to_string()));
        let mut message = PageMessage::new(Page::Law);

        message.apply(load_page(&fetcher, Page::Law).await);

        assert_eq!(message.text(), "OK");
    }

    #[tokio::test]
    async fn test_load_then_apply_failure() {
        let fetcher = RecordingFetcher::new(Err(FetchError::Status(500)));
        let mut message = PageMessage::new(Page::Boonjang);

        message.apply(load_page(&fetcher, Page::Boonjang).await);

        assert_eq!(message.text(), FETCH_FAILED_MESSAGE);
        assert_eq!(fetcher.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_late_outcome_does_not_leak_into_next_page() {
        let fetcher = RecordingFetcher::new(Ok("law body".to_string()));
        let stale = load_page(&fetcher, Page::Law).await;

        let mut next = PageMessage::new(Page::Yusa);
        assert!(!next.apply(stale));
        assert_eq!(next.text(), "");
    }
}
