//! Browser application: Leptos CSR components over the headless chart
//! engine. Compiled only for wasm32 with the `frontend` feature.

mod app;
mod chart_dom;
mod fetch;
mod observer;

use self::app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entrypoint: mount the application onto `<body>`.
#[wasm_bindgen(start)]
pub fn start() {
    mount_to_body(|| view! { <App /> });
}
