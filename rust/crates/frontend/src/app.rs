//! Main application component with routing.

use core_types::{ClientConfig, HOME_LINK_LABEL, Page};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{BoonjangPage, JogiPage, LawPage, YusaPage};

/// Application routes.
#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/law")]
    Law,
    #[at("/boonjang")]
    Boonjang,
    #[at("/yusa")]
    Yusa,
    #[at("/jogi")]
    Jogi,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Law => Route::Law,
            Page::Boonjang => Route::Boonjang,
            Page::Yusa => Route::Yusa,
            Page::Jogi => Route::Jogi,
        }
    }
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! {
            <p class="home-hint">{"위 메뉴에서 페이지를 선택하세요."}</p>
        },
        Route::Law => html! { <LawPage /> },
        Route::Boonjang => html! { <BoonjangPage /> },
        Route::Yusa => html! { <YusaPage /> },
        Route::Jogi => html! { <JogiPage /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - 페이지를 찾을 수 없습니다"}</h1>
                <p>{"요청하신 페이지가 존재하지 않습니다."}</p>
                <Link<Route> to={Route::Home}>{ HOME_LINK_LABEL }</Link<Route>>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ContextProvider<ClientConfig> context={ClientConfig::default()}>
            <BrowserRouter>
                <div class="app-container">
                    <NavBar />
                    <main class="main-content">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </BrowserRouter>
        </ContextProvider<ClientConfig>>
    }
}

/// Top navigation with one link per page.
#[function_component(NavBar)]
fn nav_bar() -> Html {
    html! {
        <nav class="nav-bar">
            <ul class="nav-links">
                { for Page::ALL.into_iter().map(|page| html! {
                    <li key={page.route()}>
                        <Link<Route> to={Route::from(page)}>
                            { page.label() }
                        </Link<Route>>
                    </li>
                })}
            </ul>
        </nav>
    }
}
