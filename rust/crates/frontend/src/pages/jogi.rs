//! Early risk page.

use core_types::Page;
use yew::prelude::*;

use super::ApiPage;
use crate::fetcher::{GlooFetcher, use_gloo_fetcher};

/// Early risk page, backed by `/api/jogi`.
#[function_component(JogiPage)]
pub fn jogi_page() -> Html {
    let fetcher = use_gloo_fetcher();
    html! { <ApiPage<GlooFetcher> page={Page::Jogi} fetcher={fetcher} /> }
}
