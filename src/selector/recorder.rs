//! In-memory [`Surface`] used by the selector tests.

use std::collections::{BTreeMap, BTreeSet};

use super::surface::Surface;

#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Options per select control, in document order, with their selected flag.
    pub options: BTreeMap<String, Vec<(String, bool)>>,
    pub values: BTreeMap<String, String>,
    pub visible: BTreeMap<String, bool>,
    pub texts: BTreeMap<String, String>,
    pub pressed: BTreeMap<String, bool>,
    /// Field ids in the order `change` was raised on them.
    pub changes: Vec<String>,
}

impl RecordingSurface {
    pub fn with_options(mut self, field_id: &str, values: &[&str]) -> Self {
        let options = values.iter().map(|v| ((*v).to_owned(), false)).collect();
        self.options.insert(field_id.to_owned(), options);
        self
    }

    /// Mark already-declared options as selected.
    pub fn with_selected(mut self, field_id: &str, values: &[&str]) -> Self {
        if let Some(options) = self.options.get_mut(field_id) {
            for (value, selected) in options.iter_mut() {
                if values.contains(&value.as_str()) {
                    *selected = true;
                }
            }
        }
        self
    }

    pub fn with_value(mut self, field_id: &str, value: &str) -> Self {
        self.values.insert(field_id.to_owned(), value.to_owned());
        self
    }

    pub fn selected(&self, field_id: &str) -> BTreeSet<&str> {
        self.options
            .get(field_id)
            .into_iter()
            .flatten()
            .filter(|(_, selected)| *selected)
            .map(|(value, _)| value.as_str())
            .collect()
    }

    pub fn visible_ids(&self) -> Vec<&str> {
        self.visible.iter().filter(|(_, shown)| **shown).map(|(id, _)| id.as_str()).collect()
    }

    pub fn text(&self, element_id: &str) -> Option<&str> {
        self.texts.get(element_id).map(String::as_str)
    }

    pub fn change_count(&self, field_id: &str) -> usize {
        self.changes.iter().filter(|id| *id == field_id).count()
    }
}

impl Surface for RecordingSurface {
    fn option_values(&self, field_id: &str) -> Vec<String> {
        self.options.get(field_id).into_iter().flatten().map(|(value, _)| value.clone()).collect()
    }

    fn selected_values(&self, field_id: &str) -> Vec<String> {
        self.selected(field_id).into_iter().map(str::to_owned).collect()
    }

    fn field_value(&self, field_id: &str) -> Option<String> {
        self.values.get(field_id).filter(|value| !value.is_empty()).cloned()
    }

    fn set_option_selected(&mut self, field_id: &str, value: &str, selected: bool) {
        if let Some(option) = self.options.get_mut(field_id).and_then(|options| options.iter_mut().find(|(v, _)| v == value)) {
            option.1 = selected;
        }
    }

    fn set_field_value(&mut self, field_id: &str, value: &str) {
        self.values.insert(field_id.to_owned(), value.to_owned());
    }

    fn dispatch_change(&mut self, field_id: &str) {
        self.changes.push(field_id.to_owned());
    }

    fn set_visible(&mut self, element_id: &str, visible: bool) {
        self.visible.insert(element_id.to_owned(), visible);
    }

    fn set_text(&mut self, element_id: &str, text: &str) {
        self.texts.insert(element_id.to_owned(), text.to_owned());
    }

    fn set_pressed(&mut self, sub_id: &str, pressed: bool) {
        self.pressed.insert(sub_id.to_owned(), pressed);
    }
}
