//! Panel visibility: exactly one sub-panel, or the placeholder, is shown.

#[cfg(test)]
#[path = "panels_test.rs"]
mod panels_test;

use super::config::SelectorConfig;
use super::store::{Catalog, ItemId};
use super::surface::Surface;

/// Which panel is currently visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    /// No base item is active.
    #[default]
    Placeholder,
    /// The sub-panel of the given base item is visible.
    ShowingGroup(ItemId),
}

#[derive(Clone, Debug)]
pub struct PanelController {
    config: SelectorConfig,
    state: PanelState,
    rendered: bool,
}

impl PanelController {
    #[must_use]
    pub fn new(config: SelectorConfig) -> Self {
        Self { config, state: PanelState::Placeholder, rendered: false }
    }

    #[must_use]
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Show the panel of `active`, or the placeholder when it is `None` or unknown.
    ///
    /// Each element is written once with its final visibility, so no
    /// intermediate combination is ever on the page. Re-showing the current
    /// state writes nothing.
    pub fn show(&mut self, catalog: &Catalog, active: Option<&str>, surface: &mut impl Surface) {
        let target = match active.and_then(|id| catalog.base(id)) {
            Some(base) => PanelState::ShowingGroup(base.id.clone()),
            None => PanelState::Placeholder,
        };
        if self.rendered && self.state == target {
            return;
        }

        surface.set_visible(self.config.placeholder_id, target == PanelState::Placeholder);
        for base in catalog.bases() {
            let visible = matches!(&target, PanelState::ShowingGroup(id) if *id == base.id);
            surface.set_visible(&self.config.panel_id(&base.panel), visible);
        }

        log::debug!("{}: panel {:?} -> {target:?}", self.config.name, self.state);
        self.state = target;
        self.rendered = true;
    }
}
