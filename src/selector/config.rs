//! Naming conventions that bind one selector instance to its markup.
//!
//! The module and track selectors are the same component; they only differ in
//! the element ids and id patterns listed here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Attribute carrying a base item id on its control.
pub const BASE_ITEM_ATTR: &str = "data-base-item";
/// Attribute on a base item control naming the label its sub-panel id derives from.
pub const PANEL_ATTR: &str = "for";
/// Attribute carrying a sub item id on its control.
pub const SUB_ITEM_ATTR: &str = "data-sub-item";
/// Attribute carrying the owning base item id on a sub item control.
pub const GROUP_ATTR: &str = "data-group";

/// Element ids and id patterns for one selector instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Short name used in log lines.
    pub name: &'static str,
    /// Container holding every base and sub item control.
    pub root_id: &'static str,
    /// Single-select receiving the active base item id.
    pub base_field_id: &'static str,
    /// Multi-select receiving the chosen sub item ids.
    pub sub_field_id: &'static str,
    /// Panel shown while no base item is active.
    pub placeholder_id: &'static str,
    /// Appended to a base item's panel label to form its sub-panel id.
    pub panel_suffix: &'static str,
    /// Counter ids are `<counter_prefix>-<group id>`.
    pub counter_prefix: &'static str,
}

impl SelectorConfig {
    pub const MODULES: Self = Self {
        name: "modules",
        root_id: "module-assign",
        base_field_id: "id_base_module",
        sub_field_id: "id_sub_modules",
        placeholder_id: "sub-module-placeholder",
        panel_suffix: "-sub-modules",
        counter_prefix: "module-counter",
    };

    pub const TRACKS: Self = Self {
        name: "tracks",
        root_id: "track-assign",
        base_field_id: "id_track",
        sub_field_id: "id_sub_tracks",
        placeholder_id: "sub-task-placeholder",
        panel_suffix: "-subtracks",
        counter_prefix: "modul-counter",
    };

    /// Every selector the page may contain.
    pub const ALL: [Self; 2] = [Self::MODULES, Self::TRACKS];

    /// Id of the sub-panel owned by the base item labelled `panel`.
    #[must_use]
    pub fn panel_id(&self, panel: &str) -> String {
        format!("{panel}{}", self.panel_suffix)
    }

    /// Id of the counter element of `group_id`.
    #[must_use]
    pub fn counter_id(&self, group_id: &str) -> String {
        format!("{}-{group_id}", self.counter_prefix)
    }
}
