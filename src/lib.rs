//! # classroom-ui
//!
//! WASM glue for the server-rendered classroom tool pages.
//!
//! The centre of the crate is the hierarchical assignment [`selector`]: pick a
//! module or track, toggle its sub items, and keep the hidden form controls,
//! the visible sub-panel and the per-group counters consistent. Around it sit
//! the small page collaborators (report-link email, clipboard copy, table
//! widgets after htmx swaps, report toggles).
//!
//! The selector and the email request logic are plain Rust and test on the
//! host. Everything that touches the DOM lives in `dom` and `app` and is only
//! compiled with the `browser` feature.

pub mod error;
pub mod net;
pub mod selector;

#[cfg(feature = "browser")]
pub mod app;
#[cfg(feature = "browser")]
pub mod dom;

#[cfg(feature = "browser")]
const LOG_LEVEL: log::Level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };

/// WASM entry point: install the console logger and panic hook, then mount the page.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(LOG_LEVEL) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    error::report("boot", app::boot());
}
