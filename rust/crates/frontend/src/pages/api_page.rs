//! Shared fetch-on-mount page.

use std::rc::Rc;

use core_types::{FetchOutcome, HOME_LINK_LABEL, Page, PageMessage, TextFetcher, load_page};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Properties for ApiPage.
#[derive(Properties, PartialEq)]
pub struct ApiPageProps<F: PartialEq> {
    pub page: Page,
    pub fetcher: F,
}

#[derive(PartialEq)]
struct MessageState(PageMessage);

impl Reducible for MessageState {
    type Action = FetchOutcome;

    fn reduce(self: Rc<Self>, outcome: FetchOutcome) -> Rc<Self> {
        let mut message = self.0.clone();
        if message.apply(outcome) {
            Rc::new(Self(message))
        } else {
            self
        }
    }
}

/// Page that fetches its endpoint once on mount and keeps the text.
#[function_component(ApiPage)]
pub fn api_page<F>(props: &ApiPageProps<F>) -> Html
where
    F: TextFetcher + Clone + PartialEq + 'static,
{
    let page = props.page;
    let message = use_reducer(|| MessageState(PageMessage::new(page)));

    {
        let message = message.clone();
        let fetcher = props.fetcher.clone();

        use_effect_with(page, move |&page| {
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = load_page(&fetcher, page).await;
                if let Err(e) = &outcome.result {
                    web_sys::console::warn_1(
                        &format!("Failed to fetch {}: {}", page.endpoint(), e).into(),
                    );
                }
                message.dispatch(outcome);
            });
        });
    }

    let message = &message.0;

    html! {
        <div class="page">
            <h2>{ page.heading() }</h2>
            <p>{ page.label() }</p>
            if message.is_settled() {
                <pre class="api-message">{ message.text() }</pre>
            }
            <Link<Route> to={Route::Home}>{ HOME_LINK_LABEL }</Link<Route>>
        </div>
    }
}
