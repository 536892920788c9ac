//! `web-sys` glue: the browser [`Surface`](crate::selector::Surface) and the
//! event bindings for the selector and its collaborators.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `browser` feature. Everything here reads the
//! server-rendered markup once, then reacts to discrete events; no page state
//! is kept outside the selector stores.

pub mod clipboard;
pub mod email;
pub mod report;
pub mod selector;
pub mod surface;
pub mod tables;
pub mod widgets;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlElement, Window};

use crate::error::UiError;

pub(crate) fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::MissingWindow)
}

pub(crate) fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::MissingWindow)
}

pub(crate) fn element_by_id(document: &Document, id: &str) -> Result<Element, UiError> {
    document.get_element_by_id(id).ok_or_else(|| UiError::MissingElement(id.to_owned()))
}

/// All elements under `root` matching `selector`, in document order.
pub(crate) fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, UiError> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

/// Nearest ancestor of `element` (itself included) matching `selector`.
pub(crate) fn closest(element: &Element, selector: &str) -> Option<Element> {
    match element.closest(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("closest({selector}) failed: {err:?}");
            None
        }
    }
}

/// The element an event was dispatched to.
pub(crate) fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_ref::<Element>().cloned()
}

/// Show (`display: block`) or hide (`display: none`) an element.
pub(crate) fn set_shown(element: &Element, shown: bool) -> Result<(), UiError> {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    html.style().set_property("display", if shown { "block" } else { "none" })?;
    Ok(())
}

/// Attach `handler` to `target` for the lifetime of the page.
pub(crate) fn listen(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), UiError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
