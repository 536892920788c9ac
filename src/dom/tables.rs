//! Bootstrap-table binding for server-rendered and htmx-swapped tables.

use web_sys::Element;

use super::query_all;
use super::widgets::jquery;
use crate::error::UiError;

const TABLE_SELECTOR: &str = r#"[data-toggle="table"]"#;
/// jQuery data key the plugin sets once it owns a table.
const BOUND_DATA_KEY: &str = "bootstrap.table";

/// Bind every unbound table below `container`. Returns how many were bound.
///
/// Tables the plugin already owns are skipped, so calling this again after a
/// partial swap only touches the new tables.
///
/// # Errors
///
/// Returns an error if jQuery or the plugin is missing or throws.
pub fn init_within(container: &Element) -> Result<usize, UiError> {
    let mut bound = 0;
    for table in query_all(container, TABLE_SELECTOR)? {
        let handle = jquery(&table)?;
        let existing = handle.data(BOUND_DATA_KEY);
        if !existing.is_undefined() && !existing.is_null() {
            continue;
        }
        handle.bootstrap_table()?;
        bound += 1;
    }
    if bound > 0 {
        log::debug!("bound {bound} table widgets");
    }
    Ok(bound)
}
