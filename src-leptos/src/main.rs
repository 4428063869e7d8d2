//! Portfolio - Leptos Frontend
//!
//! Client-side rendered single page. All content is compiled in; there is
//! no backend to talk to.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use chrono as _;
use getrandom as _;
use leptos_meta as _;
use leptos_router as _;
use leptos_use as _;
use portfolio_types as _;
use rand as _;
use wasm_bindgen as _;
use web_sys as _;

use leptos::prelude::*;
use portfolio_leptos::app::App;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Portfolio (Leptos) starting...");

    // Mount the app
    mount_to_body(App);
}
