//! Locale Catalog Lookup
//!
//! Resolves a slash-delimited identifier path against the nested locale
//! catalog tree.

use serde_json::Value;

// == Localized Name ==
/// Resolves `id` against `catalog`, returning the display name.
///
/// Walks the catalog one `/`-segment at a time. Any dead end (segment
/// missing, non-map node mid-path) returns the original `id` verbatim. A
/// map leaf yields its `name` field; a primitive leaf yields its string
/// form.
pub fn localized_name(catalog: &Value, id: &str) -> String {
    let mut current = catalog;
    for segment in id.split('/') {
        match current.get(segment) {
            Some(next) => current = next,
            None => return id.to_string(),
        }
    }

    match current {
        Value::Object(leaf) => match leaf.get("name").and_then(Value::as_str) {
            Some(name) => name.to_string(),
            None => id.to_string(),
        },
        Value::String(name) => name.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => id.to_string(),
    }
}
