//! Report page chrome: date/plot toggle buttons and the loading fade.

use gloo_timers::future::TimeoutFuture;
use web_sys::{Document, Element, Event};

use super::{closest, element_by_id, event_element, listen, query_all};
use crate::error::{UiError, report};

const TOGGLE_BUTTON: &str = ".toggle-btn";
const TOGGLE_ACTIVE_CLASS: &str = "toggle-btn-active";
const TOGGLE_TARGET_ATTR: &str = "data-target";
const PLOT_SECTION: &str = ".collapse-dates-plots";
const HIDDEN_CLASS: &str = "d-none";

const LOADED_PART: &str = ".loaded-report-part";
const LOADING_ID: &str = "is-loading";
const INTRO_ID: &str = "intro-after-loading";
const INTRO_DELAY_MS: u32 = 500;

/// Route clicks on `.toggle-btn[data-target]` buttons anywhere in the document.
///
/// # Errors
///
/// Returns an error if the listener cannot be attached.
pub fn bind_toggles(document: &Document) -> Result<(), UiError> {
    listen(document, "click", |event: Event| {
        let Some(button) = event_element(&event).and_then(|target| closest(&target, TOGGLE_BUTTON)) else {
            return;
        };
        let Some(target) = button.get_attribute(TOGGLE_TARGET_ATTR) else {
            return;
        };
        report("report toggle", activate_toggle(&button, &target));
    })
}

/// Reveal the plot section matching `target` and mark `button` active.
fn activate_toggle(button: &Element, target: &str) -> Result<(), UiError> {
    let document = super::document()?;
    let root = document.document_element().ok_or_else(|| UiError::MissingElement("html".to_owned()))?;
    for section in query_all(&root, PLOT_SECTION)? {
        section.class_list().add_1(HIDDEN_CLASS)?;
    }
    match document.query_selector(target)? {
        Some(section) => section.class_list().remove_1(HIDDEN_CLASS)?,
        None => log::debug!("toggle target {target} not found"),
    }
    for other in query_all(&root, TOGGLE_BUTTON)? {
        other.class_list().remove_1(TOGGLE_ACTIVE_CLASS)?;
    }
    button.class_list().add_1(TOGGLE_ACTIVE_CLASS)?;
    Ok(())
}

/// After a swap, fade the loading notice out and the intro in once a report
/// part has arrived.
///
/// # Errors
///
/// Returns an error if a report part is present but the notice elements are not.
pub fn reveal_loaded(document: &Document) -> Result<(), UiError> {
    if document.query_selector(LOADED_PART)?.is_none() {
        return Ok(());
    }
    element_by_id(document, LOADING_ID)?.class_list().add_1("fade-out")?;
    let intro = element_by_id(document, INTRO_ID)?;
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(INTRO_DELAY_MS).await;
        if let Err(err) = intro.class_list().add_1("fade-in") {
            log::warn!("intro fade-in failed: {err:?}");
        }
    });
    Ok(())
}
