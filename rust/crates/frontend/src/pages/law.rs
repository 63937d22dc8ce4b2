//! Legal risk page.

use core_types::Page;
use yew::prelude::*;

use super::ApiPage;
use crate::fetcher::{GlooFetcher, use_gloo_fetcher};

/// Legal risk page, backed by `/api/law`.
#[function_component(LawPage)]
pub fn law_page() -> Html {
    let fetcher = use_gloo_fetcher();
    html! { <ApiPage<GlooFetcher> page={Page::Law} fetcher={fetcher} /> }
}
