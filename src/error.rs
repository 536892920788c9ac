//! Crate error type for fallible browser glue.
//!
//! ERROR HANDLING
//! ==============
//! Event handlers never let an error reach the page: they pass their result
//! to [`report`], which logs it and degrades to "no visual change".

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("no browser window available")]
    MissingWindow,
    #[error("element #{0} not found")]
    MissingElement(String),
    /// A JS call threw or returned an unexpected value.
    #[error("javascript error: {0}")]
    Js(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("invalid email address")]
    InvalidEmail,
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "browser")]
impl From<gloo_net::Error> for UiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Request(err.to_string())
    }
}

/// Log a failed result under `context` and turn it into an `Option`.
pub fn report<T>(context: &str, result: Result<T, UiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{context}: {err}");
            None
        }
    }
}
