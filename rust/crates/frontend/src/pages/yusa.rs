//! Similar precedents page.

use core_types::Page;
use yew::prelude::*;

use super::ApiPage;
use crate::fetcher::{GlooFetcher, use_gloo_fetcher};

/// Similar precedents page, backed by `/api/yusa`.
#[function_component(YusaPage)]
pub fn yusa_page() -> Html {
    let fetcher = use_gloo_fetcher();
    html! { <ApiPage<GlooFetcher> page={Page::Yusa} fetcher={fetcher} /> }
}
