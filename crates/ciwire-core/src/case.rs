//! Recursive key-case translation for JSON values
//!
//! The CircleCI and GitHub wire formats use snake_case keys; application code
//! works in camelCase. These helpers rewrite every mapping key in a JSON tree
//! in one direction or the other, leaving values, nesting, and array order
//! exactly as found. The input is never mutated.
//!
//! Copyright (c) 2025 Ciwire Team
//! Licensed under the Apache-2.0 license

use heck::{ToLowerCamelCase, ToSnakeCase};
use serde_json::{Map, Value};

/// Translate every mapping key from snake_case to camelCase, recursively
pub fn camelize_keys(value: &Value) -> Value {
    map_keys(value, &|key| key.to_lower_camel_case())
}

/// Translate every mapping key from camelCase to snake_case, recursively
pub fn decamelize_keys(value: &Value) -> Value {
    map_keys(value, &|key| key.to_snake_case())
}

/// Rebuild a JSON tree with every object key passed through `rename`
///
/// Objects and arrays are walked recursively; scalars are cloned as-is.
fn map_keys(value: &Value, rename: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(fields) => {
            let translated: Map<String, Value> = fields
                .iter()
                .map(|(key, nested)| (rename(key), map_keys(nested, rename)))
                .collect();
            Value::Object(translated)
        }
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| map_keys(item, rename)).collect())
        }
        scalar => scalar.clone(),
    }
}
