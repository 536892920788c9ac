//! Hierarchical assignment selector.
//!
//! SYSTEM CONTEXT
//! ==============
//! The user picks a base item (a module or a track) and toggles the sub items
//! that belong to it. The page holds a hidden single-select for the base item,
//! a hidden multi-select for the sub items, one counter per base item and one
//! sub-panel per base item plus a placeholder.
//!
//! DESIGN
//! ======
//! [`Selector`] owns a [`SelectionStore`] and the three reflectors that write
//! it to the page. Every user action mutates the store first and then runs the
//! reflectors in a fixed order (form mirror, panels, counters), all inside one
//! synchronous call, so observers never see a half-applied action.
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Catalog of items and the authoritative selection |
//! | [`form_mirror`] | Hidden form controls |
//! | [`panels`] | Sub-panel / placeholder visibility |
//! | [`counters`] | Per-group counters |
//! | [`surface`] | Write target implemented by the DOM adapter |
//! | [`config`] | Element ids for the module and track instances |

#[cfg(test)]
pub(crate) mod recorder;

pub mod config;
pub mod counters;
pub mod form_mirror;
pub mod panels;
pub mod store;
pub mod surface;

pub use config::SelectorConfig;
pub use counters::CounterRenderer;
pub use form_mirror::{FormMirror, InitialState};
pub use panels::{PanelController, PanelState};
pub use store::{BaseItem, Catalog, ItemId, SelectionStore, SubItem};
pub use surface::Surface;

/// One selector instance bound to a surface.
pub struct Selector<S: Surface> {
    config: SelectorConfig,
    store: SelectionStore,
    mirror: FormMirror,
    panels: PanelController,
    counters: CounterRenderer,
    surface: S,
}

impl<S: Surface> Selector<S> {
    /// Seed a selector from the state the server rendered into `surface` and
    /// render it once.
    ///
    /// A preselected sub item only affects counts; the initial panel follows
    /// the base single-select alone.
    pub fn new(config: SelectorConfig, catalog: Catalog, mut surface: S) -> Self {
        let mirror = FormMirror::new(&config);
        let initial = mirror.read_initial(&surface);

        let mut store = SelectionStore::new(catalog);
        let seeded = store.seed(initial.preselected.iter().map(String::as_str));
        if let Some(active) = initial.active.as_deref() {
            store.activate(active);
        }
        log::info!(
            "{}: {} base items, {seeded} preselected, active {:?}",
            config.name,
            store.catalog().bases().len(),
            store.active()
        );

        let mut panels = PanelController::new(config);
        let counters = CounterRenderer::new(config);

        mirror.apply(&store, &mut surface);
        for sub_id in store.catalog().sub_ids() {
            surface.set_pressed(sub_id, store.is_chosen(sub_id));
        }
        panels.show(store.catalog(), store.active(), &mut surface);
        counters.render_all(&store, &mut surface);

        Self { config, store, mirror, panels, counters, surface }
    }

    #[must_use]
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    #[must_use]
    pub fn panel_state(&self) -> &PanelState {
        self.panels.state()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Handle a click on a base item control. Returns `true` when the active
    /// base item changed; unknown or already-active ids change nothing.
    pub fn activate(&mut self, base_id: &str) -> bool {
        if !self.store.activate(base_id) {
            return false;
        }
        self.mirror.sync_base(&self.store, &mut self.surface);
        self.panels.show(self.store.catalog(), self.store.active(), &mut self.surface);
        self.counters.render_all(&self.store, &mut self.surface);
        true
    }

    /// Handle a click on a sub item control. Returns the new chosen flag, or
    /// `None` when the sub item or its group is unknown.
    pub fn toggle(&mut self, sub_id: &str, group_id: &str) -> Option<bool> {
        let chosen = self.store.toggle(sub_id, group_id)?;
        self.mirror.sync(&self.store, &mut self.surface);
        self.surface.set_pressed(sub_id, chosen);
        self.panels.show(self.store.catalog(), self.store.active(), &mut self.surface);
        self.counters.render(group_id, self.store.count(group_id), &mut self.surface);
        Some(chosen)
    }
}
