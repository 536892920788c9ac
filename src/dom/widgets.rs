//! Bindings to the third-party widgets the page loads globally.
//!
//! Every entry point is `catch`: when Bootstrap or jQuery is not on the page
//! the call comes back as an error instead of trapping.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// `bootstrap.Modal` instance.
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Modal;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub fn new(element: &Element) -> Result<Modal, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn show(this: &Modal) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn hide(this: &Modal) -> Result<(), JsValue>;

    /// jQuery collection wrapping one element.
    pub type JQuery;

    #[wasm_bindgen(js_name = jQuery, catch)]
    pub fn jquery(element: &Element) -> Result<JQuery, JsValue>;

    #[wasm_bindgen(method)]
    pub fn data(this: &JQuery, key: &str) -> JsValue;

    #[wasm_bindgen(method, js_name = bootstrapTable, catch)]
    pub fn bootstrap_table(this: &JQuery) -> Result<JsValue, JsValue>;
}
