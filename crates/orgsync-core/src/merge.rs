//! Deep merge of settings layers

use serde_json::Value;

/// Deep merge `other` into `base`.
///
/// If both values are objects, merge them recursively with `other` taking
/// precedence. Otherwise `other` replaces `base`, except that a `null`
/// overlay leaves `base` untouched.
pub fn deep_merge_value(base: &mut Value, other: &Value) {
    match (base, other) {
        (_, Value::Null) => {}
        (Value::Object(base_map), Value::Object(other_map)) => {
            for (key, other_val) in other_map {
                if let Some(base_val) = base_map.get_mut(key) {
                    deep_merge_value(base_val, other_val);
                } else {
                    base_map.insert(key.clone(), other_val.clone());
                }
            }
        }
        (base, other) => {
            *base = other.clone();
        }
    }
}
