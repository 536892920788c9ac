//! Copy the participation link to the clipboard and flash a confirmation.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Clipboard, Document, Event, HtmlElement, HtmlInputElement};

use super::{closest, document, element_by_id, event_element, listen, set_shown, window};
use crate::error::{UiError, report};

const COPY_TRIGGER: &str = "[data-copy-link]";
const LINK_INPUT_ID: &str = "teilnahmelink";
const CONFIRMATION_ID: &str = "copydisclaimer";
/// How long the confirmation stays fully visible, and how long it takes to fade.
const FADE_MS: u32 = 330;

/// Route clicks on `[data-copy-link]` triggers anywhere in the document.
///
/// # Errors
///
/// Returns an error if the listener cannot be attached.
pub fn bind(document: &Document) -> Result<(), UiError> {
    listen(document, "click", |event: Event| {
        if event_element(&event).and_then(|target| closest(&target, COPY_TRIGGER)).is_some() {
            report("copy link", copy_link());
        }
    })
}

fn copy_link() -> Result<(), UiError> {
    let document = document()?;
    let input = element_by_id(&document, LINK_INPUT_ID)?;
    let link = input
        .dyn_ref::<HtmlInputElement>()
        .map(HtmlInputElement::value)
        .ok_or_else(|| UiError::MissingElement(LINK_INPUT_ID.to_owned()))?;

    // `navigator.clipboard` is undefined outside secure contexts.
    let clipboard: Clipboard = js_sys::Reflect::get(&window()?.navigator(), &"clipboard".into())?.dyn_into()?;
    let written = JsFuture::from(clipboard.write_text(&link));

    let confirmation = element_by_id(&document, CONFIRMATION_ID)?;
    set_shown(&confirmation, true)?;

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = written.await {
            log::warn!("clipboard write failed: {err:?}");
        }
    });
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(FADE_MS).await;
        if let Some(element) = confirmation.dyn_ref::<HtmlElement>() {
            report("fade confirmation", fade_out(element, FADE_MS).await);
        }
    });
    Ok(())
}

/// Fade `element` to transparent over `duration_ms`, then hide it and clear
/// the inline transition.
async fn fade_out(element: &HtmlElement, duration_ms: u32) -> Result<(), UiError> {
    let style = element.style();
    style.set_property("transition", &format!("opacity {duration_ms}ms"))?;
    style.set_property("opacity", "1")?;
    // Force a reflow so the transition starts from the opaque state.
    element.offset_height();
    style.set_property("opacity", "0")?;

    TimeoutFuture::new(duration_ms).await;
    style.set_property("display", "none")?;
    style.remove_property("transition")?;
    style.remove_property("opacity")?;
    Ok(())
}
