//! Dispute type page.

use core_types::Page;
use yew::prelude::*;

use super::ApiPage;
use crate::fetcher::{GlooFetcher, use_gloo_fetcher};

/// Dispute type page, backed by `/api/boonjang`.
#[function_component(BoonjangPage)]
pub fn boonjang_page() -> Html {
    let fetcher = use_gloo_fetcher();
    html! { <ApiPage<GlooFetcher> page={Page::Boonjang} fetcher={fetcher} /> }
}
