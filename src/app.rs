//! Page start-up: mounts whatever selectors and collaborators the current
//! page contains and keeps htmx-swapped fragments wired.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, Element, Event};

use crate::dom::{self, clipboard, email, report as report_page, selector, tables};
use crate::error::{UiError, report};
use crate::selector::SelectorConfig;

const AFTER_SWAP_EVENT: &str = "htmx:afterSwap";

/// Run [`mount_page`] now, or once the document has finished parsing.
///
/// # Errors
///
/// Returns an error if there is no document or the ready listener cannot be attached.
pub fn boot() -> Result<(), UiError> {
    let document = dom::document()?;
    if document.ready_state() == "loading" {
        let on_ready = wasm_bindgen::closure::Closure::once_into_js(|| {
            report("mount page", mount_page());
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(());
    }
    mount_page()
}

/// Bind every feature whose markup is present. One missing feature never
/// prevents the others from mounting.
fn mount_page() -> Result<(), UiError> {
    let document = dom::document()?;

    for config in SelectorConfig::ALL {
        if report(config.name, selector::mount(config)) == Some(true) {
            log::info!("{} selector mounted", config.name);
        }
    }
    report("email dialog", email::bind(&document));
    report("clipboard", clipboard::bind(&document));
    report("report toggles", report_page::bind_toggles(&document));

    if let Some(body) = document.body() {
        report("tables", tables::init_within(&body));
        dom::listen(&body, AFTER_SWAP_EVENT, |event: Event| on_after_swap(&event))?;
    }
    Ok(())
}

/// Re-bind widgets inside the swapped fragment and advance the report loader.
fn on_after_swap(event: &Event) {
    let Some(document) = report("after swap", dom::document()) else {
        return;
    };
    let target = swap_target(event).or_else(|| document.body().map(Into::into));
    if let Some(target) = target {
        report("tables after swap", tables::init_within(&target));
    }
    report("report loader", report_page::reveal_loaded(&document));
}

/// `event.detail.target` of an htmx swap event.
fn swap_target(event: &Event) -> Option<Element> {
    let detail = event.dyn_ref::<CustomEvent>()?.detail();
    match js_sys::Reflect::get(&detail, &JsValue::from_str("target")) {
        Ok(target) => target.dyn_ref::<Element>().cloned(),
        Err(err) => {
            log::debug!("swap event without target: {err:?}");
            None
        }
    }
}
