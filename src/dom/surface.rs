//! [`Surface`] over the live document.
//!
//! Writes to elements that are missing or of the wrong kind are logged and
//! skipped; the selector state stays authoritative either way.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventInit, HtmlOptionElement, HtmlSelectElement};

use super::set_shown;
use crate::error::{UiError, report};
use crate::selector::Surface;
use crate::selector::config::SUB_ITEM_ATTR;

/// CSS class marking a chosen sub item control.
const PRESSED_CLASS: &str = "active";

pub struct DomSurface {
    document: Document,
    /// Container of this selector's item controls.
    root: Element,
}

impl DomSurface {
    #[must_use]
    pub fn new(document: Document, root: Element) -> Self {
        Self { document, root }
    }

    fn select(&self, field_id: &str) -> Option<HtmlSelectElement> {
        let element = self.document.get_element_by_id(field_id)?;
        let select = element.dyn_ref::<HtmlSelectElement>().cloned();
        if select.is_none() {
            log::warn!("#{field_id} is not a <select>");
        }
        select
    }

    fn options(&self, field_id: &str) -> Vec<HtmlOptionElement> {
        let Some(select) = self.select(field_id) else {
            return Vec::new();
        };
        (0..select.length())
            .filter_map(|i| select.item(i))
            .filter_map(|element| element.dyn_ref::<HtmlOptionElement>().cloned())
            .collect()
    }

    /// Control of one sub item, looked up by attribute value.
    fn sub_control(&self, sub_id: &str) -> Option<Element> {
        let selector = format!(r#"[{SUB_ITEM_ATTR}="{}"]"#, web_sys::css::escape(sub_id));
        report("sub item lookup", self.root.query_selector(&selector).map_err(UiError::from)).flatten()
    }
}

impl Surface for DomSurface {
    fn option_values(&self, field_id: &str) -> Vec<String> {
        self.options(field_id).iter().map(HtmlOptionElement::value).collect()
    }

    fn selected_values(&self, field_id: &str) -> Vec<String> {
        self.options(field_id)
            .iter()
            .filter(|option| option.selected())
            .map(HtmlOptionElement::value)
            .collect()
    }

    fn field_value(&self, field_id: &str) -> Option<String> {
        Some(self.select(field_id)?.value()).filter(|value| !value.is_empty())
    }

    fn set_option_selected(&mut self, field_id: &str, value: &str, selected: bool) {
        if let Some(option) = self.options(field_id).into_iter().find(|option| option.value() == value) {
            option.set_selected(selected);
        }
    }

    fn set_field_value(&mut self, field_id: &str, value: &str) {
        if let Some(select) = self.select(field_id) {
            select.set_value(value);
        }
    }

    fn dispatch_change(&mut self, field_id: &str) {
        let Some(element) = self.document.get_element_by_id(field_id) else {
            return;
        };
        let init = EventInit::new();
        init.set_bubbles(true);
        let dispatched = Event::new_with_event_init_dict("change", &init).and_then(|event| element.dispatch_event(&event));
        if let Err(err) = dispatched {
            log::warn!("change on #{field_id} failed: {err:?}");
        }
    }

    fn set_visible(&mut self, element_id: &str, visible: bool) {
        if let Some(element) = self.document.get_element_by_id(element_id) {
            report(element_id, set_shown(&element, visible));
        }
    }

    fn set_text(&mut self, element_id: &str, text: &str) {
        if let Some(element) = self.document.get_element_by_id(element_id) {
            element.set_text_content(Some(text));
        }
    }

    fn set_pressed(&mut self, sub_id: &str, pressed: bool) {
        let Some(control) = self.sub_control(sub_id) else {
            return;
        };
        let written = control
            .set_attribute("aria-pressed", if pressed { "true" } else { "false" })
            .and_then(|()| control.class_list().toggle_with_force(PRESSED_CLASS, pressed));
        if let Err(err) = written {
            log::warn!("pressed state of sub item {sub_id} failed: {err:?}");
        }
    }
}
