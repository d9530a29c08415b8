//! Deep-merge rule for preset override deltas.

use serde_json::Value;

/// Merge `delta` into `base`.
///
/// Objects merge recursively per key. Every other pairing — scalars, arrays,
/// nulls, or mismatched kinds — is resolved by replacement, with `delta`
/// winning. Arrays replace rather than append, so an override can drop
/// inherited elements entirely.
pub fn deep_merge(base: &mut Value, delta: &Value) {
    match (base, delta) {
        (Value::Object(base_map), Value::Object(delta_map)) => {
            for (key, delta_val) in delta_map {
                if let Some(base_val) = base_map.get_mut(key) {
                    deep_merge(base_val, delta_val);
                } else {
                    base_map.insert(key.clone(), delta_val.clone());
                }
            }
        }
        (base, delta) => {
            *base = delta.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_conflict_later_wins() {
        let mut base = json!({"rangeStrategy": "auto"});
        deep_merge(&mut base, &json!({"rangeStrategy": "pin"}));
        assert_eq!(base, json!({"rangeStrategy": "pin"}));
    }

    #[test]
    fn test_objects_merge_recursively() {
        let mut base = json!({"a": {"x": 1, "y": 2}, "b": true});
        deep_merge(&mut base, &json!({"a": {"y": 3, "z": 4}}));
        assert_eq!(base, json!({"a": {"x": 1, "y": 3, "z": 4}, "b": true}));
    }

    #[test]
    fn test_arrays_replace_not_append() {
        let mut base = json!({"extends": ["config:recommended"]});
        deep_merge(&mut base, &json!({"extends": ["config:best-practices"]}));
        assert_eq!(base, json!({"extends": ["config:best-practices"]}));
    }

    #[test]
    fn test_delta_introduces_new_keys() {
        let mut base = json!({"a": 1});
        deep_merge(&mut base, &json!({"b": 2}));
        assert_eq!(base, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_mismatched_kinds_replace() {
        let mut base = json!({"packageRules": {"old": "shape"}});
        deep_merge(&mut base, &json!({"packageRules": [1, 2]}));
        assert_eq!(base, json!({"packageRules": [1, 2]}));
    }

    #[test]
    fn test_null_delta_replaces() {
        let mut base = json!({"a": 1});
        deep_merge(&mut base, &json!({"a": null}));
        assert_eq!(base, json!({"a": null}));
    }
}
