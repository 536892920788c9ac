//! Output target shared by the form mirror, panel controller and counter renderer.
//!
//! The browser build implements this over `web-sys`; tests use an in-memory
//! recorder. Reads are only used at initialization to pick up the state the
//! server rendered into the form controls.

/// Page operations the selector needs. Missing elements are not errors: an
/// implementation ignores writes to ids it cannot find.
pub trait Surface {
    /// Option values of the select control `field_id`, in document order.
    fn option_values(&self, field_id: &str) -> Vec<String>;

    /// Option values currently marked selected in `field_id`.
    fn selected_values(&self, field_id: &str) -> Vec<String>;

    /// Current value of a single-select, `None` when empty or missing.
    fn field_value(&self, field_id: &str) -> Option<String>;

    fn set_option_selected(&mut self, field_id: &str, value: &str, selected: bool);

    /// Set a single-select's value. An empty string clears it.
    fn set_field_value(&mut self, field_id: &str, value: &str);

    /// Raise one bubbling `change` event on `field_id`.
    fn dispatch_change(&mut self, field_id: &str);

    fn set_visible(&mut self, element_id: &str, visible: bool);

    fn set_text(&mut self, element_id: &str, text: &str);

    /// Reflect a sub item's chosen flag on its control.
    fn set_pressed(&mut self, sub_id: &str, pressed: bool);
}
