//! Per-group counters, rendered as a projection of the selection store.

#[cfg(test)]
#[path = "counters_test.rs"]
mod counters_test;

use super::config::SelectorConfig;
use super::store::SelectionStore;
use super::surface::Surface;

#[derive(Clone, Copy, Debug)]
pub struct CounterRenderer {
    config: SelectorConfig,
}

impl CounterRenderer {
    #[must_use]
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, group_id: &str, count: usize, surface: &mut impl Surface) {
        surface.set_text(&self.config.counter_id(group_id), &count.to_string());
    }

    /// Render the counter of every base item in the catalog.
    pub fn render_all(&self, store: &SelectionStore, surface: &mut impl Surface) {
        for base in store.catalog().bases() {
            self.render(&base.id, store.count(&base.id), surface);
        }
    }
}
