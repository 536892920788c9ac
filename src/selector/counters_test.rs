use super::*;
use crate::selector::recorder::RecordingSurface;
use crate::selector::store::{BaseItem, Catalog, SubItem};

fn store() -> SelectionStore {
    let bases = ["1", "2"].map(|id| BaseItem { id: id.to_owned(), panel: format!("track-{id}") });
    let subs = [("10", "1"), ("11", "1"), ("20", "2")].map(|(id, group)| SubItem { id: id.to_owned(), group: group.to_owned() });
    SelectionStore::new(Catalog::new(bases, subs))
}

#[test]
fn render_writes_count_into_prefixed_element() {
    let renderer = CounterRenderer::new(SelectorConfig::TRACKS);
    let mut surface = RecordingSurface::default();
    renderer.render("1", 3, &mut surface);
    assert_eq!(surface.text("modul-counter-1"), Some("3"));
}

#[test]
fn render_all_covers_every_group_including_empty_ones() {
    let mut store = store();
    store.toggle("10", "1");
    store.toggle("11", "1");

    let renderer = CounterRenderer::new(SelectorConfig::TRACKS);
    let mut surface = RecordingSurface::default();
    renderer.render_all(&store, &mut surface);

    assert_eq!(surface.text("modul-counter-1"), Some("2"));
    assert_eq!(surface.text("modul-counter-2"), Some("0"));
}

#[test]
fn rendered_text_ignores_previous_page_content() {
    let store = store();
    let renderer = CounterRenderer::new(SelectorConfig::TRACKS);
    let mut surface = RecordingSurface::default();
    surface.texts.insert("modul-counter-1".to_owned(), "7".to_owned());

    renderer.render_all(&store, &mut surface);
    assert_eq!(surface.text("modul-counter-1"), Some("0"));
}
