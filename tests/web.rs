//! Browser tests for the DOM-bound selector. Run with
//! `wasm-pack test --headless --firefox -- --features browser`.
#![cfg(all(target_arch = "wasm32", feature = "browser"))]

use classroom_ui::dom::selector::mount;
use classroom_ui::dom::tables::init_within;
use classroom_ui::selector::SelectorConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, HtmlSelectElement};

wasm_bindgen_test_configure!(run_in_browser);

const MARKUP: &str = r#"
<select id="id_base_module"><option value=""></option><option value="1">A</option><option value="2">B</option></select>
<select id="id_sub_modules" multiple>
  <option value="10">a1</option><option value="11" selected>a2</option><option value="20">b1</option>
</select>
<div id="module-assign">
  <label data-base-item="1" for="module-1">A <span id="module-counter-1">?</span></label>
  <label data-base-item="2" for="module-2">B <span id="module-counter-2">?</span></label>
  <div id="sub-module-placeholder">pick one</div>
  <div id="module-1-sub-modules" style="display:none">
    <button type="button" data-sub-item="10" data-group="1">a1</button>
    <button type="button" data-sub-item="11" data-group="1">a2</button>
  </div>
  <div id="module-2-sub-modules" style="display:none">
    <button type="button" data-sub-item="20" data-group="2">b1</button>
  </div>
</div>
"#;

fn document() -> Document {
    web_sys::window().and_then(|w| w.document()).unwrap()
}

fn install() -> Element {
    let document = document();
    let host = document.create_element("div").unwrap();
    host.set_inner_html(MARKUP);
    document.body().unwrap().append_child(&host).unwrap();
    host
}

fn click(selector: &str) {
    document().query_selector(selector).unwrap().unwrap().dyn_into::<HtmlElement>().unwrap().click();
}

fn text(id: &str) -> String {
    document().get_element_by_id(id).unwrap().text_content().unwrap_or_default()
}

fn display(id: &str) -> String {
    document().get_element_by_id(id).unwrap().dyn_into::<HtmlElement>().unwrap().style().get_property_value("display").unwrap()
}

fn pressed(sub_id: &str) -> Option<String> {
    document().query_selector(&format!(r#"[data-sub-item="{sub_id}"]"#)).unwrap().unwrap().get_attribute("aria-pressed")
}

fn selected(id: &str) -> Vec<String> {
    let select = document().get_element_by_id(id).unwrap().dyn_into::<HtmlSelectElement>().unwrap();
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .map(|o| o.get_attribute("value").unwrap_or_default())
        .collect()
}

#[wasm_bindgen_test]
fn selector_round_trip_through_the_dom() {
    let host = install();
    assert!(mount(SelectorConfig::MODULES).unwrap());

    assert_eq!(text("module-counter-1"), "1");
    assert_eq!(text("module-counter-2"), "0");
    assert_eq!(display("sub-module-placeholder"), "block");

    click(r#"[data-base-item="1"]"#);
    assert_eq!(display("module-1-sub-modules"), "block");
    assert_eq!(display("module-2-sub-modules"), "none");
    assert_eq!(display("sub-module-placeholder"), "none");

    click(r#"[data-sub-item="10"]"#);
    assert_eq!(text("module-counter-1"), "2");
    assert_eq!(selected("id_sub_modules"), vec!["10", "11"]);
    assert_eq!(pressed("10").as_deref(), Some("true"));

    click(r#"[data-sub-item="11"]"#);
    assert_eq!(text("module-counter-1"), "1");
    assert_eq!(selected("id_sub_modules"), vec!["10"]);
    assert_eq!(pressed("11").as_deref(), Some("false"));

    host.remove();
}

#[wasm_bindgen_test]
fn missing_container_is_not_an_error() {
    assert!(!mount(SelectorConfig::TRACKS).unwrap());
}

// Minimal jQuery stand-in: `bootstrapTable` counts calls and marks the element
// the way the plugin does through `data("bootstrap.table")`.
const JQUERY_STUB: &str = r#"
window.__tableBinds = 0;
window.jQuery = function (el) {
  return {
    data: function (key) { return el.__data ? el.__data[key] : undefined; },
    bootstrapTable: function () {
      window.__tableBinds += 1;
      el.__data = { "bootstrap.table": {} };
      return this;
    },
  };
};
"#;

fn table_binds() -> f64 {
    let window = web_sys::window().unwrap();
    js_sys::Reflect::get(&window, &"__tableBinds".into()).unwrap().as_f64().unwrap()
}

#[wasm_bindgen_test]
fn tables_are_bound_once_across_repeated_scans() {
    js_sys::eval(JQUERY_STUB).unwrap();
    let document = document();
    let container = document.create_element("div").unwrap();
    container.set_inner_html(r#"<table data-toggle="table"></table><table></table>"#);
    document.body().unwrap().append_child(&container).unwrap();

    assert_eq!(init_within(&container).unwrap(), 1);
    assert_eq!(init_within(&container).unwrap(), 0);
    assert_eq!(table_binds(), 1.0);

    container.remove();
}
