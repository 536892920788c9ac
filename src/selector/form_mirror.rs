//! Form mirror: keeps the hidden form controls equal to the selection store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Django form submits two controls per selector: a single-select holding
//! the active base item and a multi-select holding every chosen sub item.
//! Listeners on those controls expect one `change` per user action, so all
//! option writes happen first and the event is raised once at the end.

#[cfg(test)]
#[path = "form_mirror_test.rs"]
mod form_mirror_test;

use std::collections::BTreeSet;

use super::config::SelectorConfig;
use super::store::SelectionStore;
use super::surface::Surface;

/// State the server rendered into the form controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InitialState {
    /// Value preselected in the base single-select.
    pub active: Option<String>,
    /// Options preselected in the sub multi-select.
    pub preselected: Vec<String>,
}

#[derive(Clone, Copy, Debug)]
pub struct FormMirror {
    base_field_id: &'static str,
    sub_field_id: &'static str,
}

impl FormMirror {
    #[must_use]
    pub fn new(config: &SelectorConfig) -> Self {
        Self { base_field_id: config.base_field_id, sub_field_id: config.sub_field_id }
    }

    /// Read the server-rendered selection from the controls.
    pub fn read_initial(&self, surface: &impl Surface) -> InitialState {
        InitialState {
            active: surface.field_value(self.base_field_id),
            preselected: surface.selected_values(self.sub_field_id),
        }
    }

    /// Write the store's chosen set into the sub multi-select without raising
    /// an event. Returns the chosen ids that have no option in the control.
    pub fn apply<'a>(&self, store: &'a SelectionStore, surface: &mut impl Surface) -> BTreeSet<&'a str> {
        let mut pending = store.selected_ids(None);
        for value in surface.option_values(self.sub_field_id) {
            let selected = pending.remove(value.as_str());
            surface.set_option_selected(self.sub_field_id, &value, selected);
        }
        if !pending.is_empty() {
            log::debug!("{}: no option for chosen ids {pending:?}", self.sub_field_id);
        }
        pending
    }

    /// Make the sub multi-select's selected options exactly the store's chosen
    /// set and raise a single `change` event.
    pub fn sync(&self, store: &SelectionStore, surface: &mut impl Surface) {
        self.apply(store, surface);
        surface.dispatch_change(self.sub_field_id);
    }

    /// Write the active base item into the base single-select and raise a
    /// single `change` event on it.
    pub fn sync_base(&self, store: &SelectionStore, surface: &mut impl Surface) {
        surface.set_field_value(self.base_field_id, store.active().unwrap_or_default());
        surface.dispatch_change(self.base_field_id);
    }
}
