//! Risk Pages - Yew WASM Frontend
//!
//! Navigation shell plus four pages, each fetching one backend endpoint
//! as text when mounted.

mod app;
mod fetcher;
mod pages;

pub use app::{App, Route};
pub use fetcher::{GlooFetcher, use_gloo_fetcher};

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    web_sys::console::log_1(&"Starting risk pages client".into());
    yew::Renderer::<App>::new().render();
}
