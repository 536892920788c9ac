use super::*;

#[test]
fn module_ids_follow_markup() {
    let config = SelectorConfig::MODULES;
    assert_eq!(config.panel_id("module-4"), "module-4-sub-modules");
    assert_eq!(config.counter_id("4"), "module-counter-4");
}

#[test]
fn track_ids_follow_markup() {
    let config = SelectorConfig::TRACKS;
    assert_eq!(config.panel_id("track-2"), "track-2-subtracks");
    assert_eq!(config.counter_id("2"), "modul-counter-2");
}

#[test]
fn selectors_do_not_share_element_ids() {
    let [modules, tracks] = SelectorConfig::ALL;
    assert_ne!(modules.root_id, tracks.root_id);
    assert_ne!(modules.base_field_id, tracks.base_field_id);
    assert_ne!(modules.sub_field_id, tracks.sub_field_id);
    assert_ne!(modules.placeholder_id, tracks.placeholder_id);
    assert_ne!(modules.counter_id("1"), tracks.counter_id("1"));
}
