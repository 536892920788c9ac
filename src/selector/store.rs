//! Selection store for one hierarchical selector.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is the only place selector state is mutated. The form mirror,
//! panel controller and counter renderer read from it after every action and
//! write the result to the page; none of them keep a copy of the selection.
//!
//! DESIGN
//! ======
//! Group counts are derived from the chosen sets on every read instead of
//! being adjusted by `+1`/`-1` on each toggle, so a counter can never drift
//! from the selection it describes.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::{BTreeMap, BTreeSet};

/// Opaque identifier of a base or sub item, exactly as rendered by the server.
pub type ItemId = String;

/// Top-level selectable entity (a module or a track).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseItem {
    pub id: ItemId,
    /// Label named by the control's `for` attribute; prefixes the sub-panel id.
    pub panel: String,
}

/// Selectable child entity owned by exactly one base item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubItem {
    pub id: ItemId,
    /// Id of the owning base item.
    pub group: ItemId,
}

/// Read-only set of base and sub items scanned from the page at load.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    bases: Vec<BaseItem>,
    /// Owning group keyed by sub item id.
    groups: BTreeMap<ItemId, ItemId>,
}

impl Catalog {
    /// Build a catalog, keeping the first occurrence of duplicated ids or
    /// panel labels and dropping sub items whose group is not a known base item.
    pub fn new(bases: impl IntoIterator<Item = BaseItem>, subs: impl IntoIterator<Item = SubItem>) -> Self {
        let mut catalog = Self::default();
        for base in bases {
            if catalog.base(&base.id).is_some() {
                log::debug!("duplicate base item {} ignored", base.id);
                continue;
            }
            if catalog.bases.iter().any(|known| known.panel == base.panel) {
                log::debug!("base item {} reuses panel label {}, ignored", base.id, base.panel);
                continue;
            }
            catalog.bases.push(base);
        }
        for sub in subs {
            if catalog.base(&sub.group).is_none() {
                log::debug!("sub item {} references unknown group {}", sub.id, sub.group);
                continue;
            }
            catalog.groups.entry(sub.id).or_insert(sub.group);
        }
        catalog
    }

    /// Base items in page order.
    #[must_use]
    pub fn bases(&self) -> &[BaseItem] {
        &self.bases
    }

    #[must_use]
    pub fn base(&self, id: &str) -> Option<&BaseItem> {
        self.bases.iter().find(|base| base.id == id)
    }

    /// Owning group of a sub item.
    #[must_use]
    pub fn group_of(&self, sub_id: &str) -> Option<&str> {
        self.groups.get(sub_id).map(String::as_str)
    }

    /// All known sub item ids, sorted.
    pub fn sub_ids(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}

/// Active base item plus the chosen sub items of every group.
#[derive(Clone, Debug, Default)]
pub struct SelectionStore {
    catalog: Catalog,
    active: Option<ItemId>,
    chosen: BTreeMap<ItemId, BTreeSet<ItemId>>,
}

impl SelectionStore {
    /// Create an empty selection over `catalog` with no active base item.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, active: None, chosen: BTreeMap::new() }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Currently active base item id.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Make `base_id` the active base item.
    ///
    /// Returns `true` when the active item changed. Unknown ids are ignored.
    /// Chosen sub items are never touched.
    pub fn activate(&mut self, base_id: &str) -> bool {
        if self.catalog.base(base_id).is_none() {
            log::debug!("activate: unknown base item {base_id}");
            return false;
        }
        if self.active.as_deref() == Some(base_id) {
            return false;
        }
        self.active = Some(base_id.to_owned());
        true
    }

    /// Flip the chosen flag of `sub_id` within `group_id` and return the new flag.
    ///
    /// Returns `None` without changing anything when the sub item is unknown
    /// or is not owned by `group_id`.
    pub fn toggle(&mut self, sub_id: &str, group_id: &str) -> Option<bool> {
        if self.catalog.group_of(sub_id) != Some(group_id) {
            log::debug!("toggle: sub item {sub_id} is not part of group {group_id}");
            return None;
        }
        let chosen = self.chosen.entry(group_id.to_owned()).or_default();
        if chosen.remove(sub_id) {
            Some(false)
        } else {
            chosen.insert(sub_id.to_owned());
            Some(true)
        }
    }

    /// Mark server-preselected sub items as chosen. Returns how many were seeded.
    pub fn seed<'a>(&mut self, sub_ids: impl IntoIterator<Item = &'a str>) -> usize {
        let mut seeded = 0;
        for sub_id in sub_ids {
            let Some(group) = self.catalog.group_of(sub_id) else {
                log::debug!("seed: preselected option {sub_id} has no sub item control");
                continue;
            };
            if self.chosen.entry(group.to_owned()).or_default().insert(sub_id.to_owned()) {
                seeded += 1;
            }
        }
        seeded
    }

    #[must_use]
    pub fn is_chosen(&self, sub_id: &str) -> bool {
        self.catalog
            .group_of(sub_id)
            .and_then(|group| self.chosen.get(group))
            .is_some_and(|chosen| chosen.contains(sub_id))
    }

    /// Number of chosen sub items in `group_id`.
    #[must_use]
    pub fn count(&self, group_id: &str) -> usize {
        self.chosen.get(group_id).map_or(0, BTreeSet::len)
    }

    /// Chosen sub item ids of one group, or of all groups when `group_id` is `None`.
    #[must_use]
    pub fn selected_ids(&self, group_id: Option<&str>) -> BTreeSet<&str> {
        match group_id {
            Some(group) => self
                .chosen
                .get(group)
                .into_iter()
                .flatten()
                .map(String::as_str)
                .collect(),
            None => self.chosen.values().flatten().map(String::as_str).collect(),
        }
    }
}
