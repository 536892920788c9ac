//! Mounts a [`Selector`] on its container and routes clicks into it.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, Event};

use super::surface::DomSurface;
use super::{closest, document, event_element, listen, query_all};
use crate::error::UiError;
use crate::selector::config::{BASE_ITEM_ATTR, GROUP_ATTR, PANEL_ATTR, SUB_ITEM_ATTR};
use crate::selector::{BaseItem, Catalog, Selector, SelectorConfig, SubItem};

type SharedSelector = Rc<RefCell<Selector<DomSurface>>>;

/// Mount the selector described by `config` if its container is on the page.
///
/// Returns `false` when the page has no such selector.
///
/// # Errors
///
/// Returns an error if the document cannot be queried or the click listener
/// cannot be attached.
pub fn mount(config: SelectorConfig) -> Result<bool, UiError> {
    let document = document()?;
    let Some(root) = document.get_element_by_id(config.root_id) else {
        log::debug!("{}: #{} not on this page", config.name, config.root_id);
        return Ok(false);
    };

    let catalog = scan_catalog(&root)?;
    let surface = DomSurface::new(document, root.clone());
    let selector: SharedSelector = Rc::new(RefCell::new(Selector::new(config, catalog, surface)));

    listen(&root, "click", move |event: Event| on_click(&selector, &event))?;
    Ok(true)
}

/// Read base and sub item controls from the container.
fn scan_catalog(root: &Element) -> Result<Catalog, UiError> {
    let bases = query_all(root, &format!("[{BASE_ITEM_ATTR}]"))?.into_iter().filter_map(|control| {
        Some(BaseItem { id: control.get_attribute(BASE_ITEM_ATTR)?, panel: control.get_attribute(PANEL_ATTR)? })
    });
    let subs = query_all(root, &format!("[{SUB_ITEM_ATTR}]"))?.into_iter().filter_map(|control| {
        Some(SubItem { id: control.get_attribute(SUB_ITEM_ATTR)?, group: control.get_attribute(GROUP_ATTR)? })
    });
    Ok(Catalog::new(bases, subs))
}

fn on_click(selector: &SharedSelector, event: &Event) {
    let Some(target) = event_element(event) else {
        return;
    };
    // A synchronous `change` listener may click back into the selector while
    // it is still reflecting the previous action.
    let Ok(mut selector) = selector.try_borrow_mut() else {
        log::warn!("selector busy, click dropped");
        return;
    };

    if let Some(control) = closest(&target, &format!("[{SUB_ITEM_ATTR}]")) {
        if let (Some(sub_id), Some(group_id)) = (control.get_attribute(SUB_ITEM_ATTR), control.get_attribute(GROUP_ATTR)) {
            selector.toggle(&sub_id, &group_id);
        }
    } else if let Some(control) = closest(&target, &format!("[{BASE_ITEM_ATTR}]")) {
        if let Some(base_id) = control.get_attribute(BASE_ITEM_ATTR) {
            selector.activate(&base_id);
        }
    }
}
