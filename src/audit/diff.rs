//! Diff summaries for audit entries
//!
//! Turns the before/after states of an audit entry into a single line such
//! as `nombre: Ana -> Ana Maria, activo: Si -> No`.

use serde_json::{Map, Number, Value};

use super::entry::AuditAction;

/// Summarize what an audit entry changed
///
/// - creation: every field of `after` as `key: value`
/// - deletion: every field of `before` as `key: value`
/// - otherwise, when both states are present: `key: old -> new` for each
///   field that differs, over the union of keys (`before` order first)
///
/// Anything else yields an empty string. States that are not JSON objects
/// count as absent.
pub fn diff_summary(before: Option<&Value>, after: Option<&Value>, action: &AuditAction) -> String {
    let before = before.and_then(Value::as_object);
    let after = after.and_then(Value::as_object);

    match (action, before, after) {
        (AuditAction::Created, _, Some(after)) => list_fields(after),
        (AuditAction::Deleted, Some(before), _) => list_fields(before),
        (_, Some(before), Some(after)) => changed_fields(before, after),
        _ => String::new(),
    }
}

fn list_fields(fields: &Map<String, Value>) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}: {}", key, value_to_text(Some(value))))
        .collect::<Vec<_>>()
        .join(", ")
}

fn changed_fields(before: &Map<String, Value>, after: &Map<String, Value>) -> String {
    let keys = before
        .keys()
        .chain(after.keys().filter(|k| !before.contains_key(k.as_str())));

    let mut changes = Vec::new();
    for key in keys {
        let old = before.get(key);
        let new = after.get(key);

        let equal = match (old, new) {
            (Some(a), Some(b)) => deep_equal(a, b),
            (None, None) => true,
            _ => false,
        };
        if !equal {
            changes.push(format!(
                "{}: {} -> {}",
                key,
                value_to_text(old),
                value_to_text(new)
            ));
        }
    }

    changes.join(", ")
}

/// Render one value for a summary
///
/// Missing and null values render as `-`; booleans as `Si`/`No`; strings
/// trimmed (blank becomes `-`); objects and arrays as compact JSON with
/// sorted keys.
pub fn value_to_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::Bool(true)) => "Si".to_string(),
        Some(Value::Bool(false)) => "No".to_string(),
        Some(Value::Number(n)) => number_to_text(n),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                "-".to_string()
            } else {
                trimmed.to_string()
            }
        }
        Some(other) => canonical_json(other),
    }
}

fn number_to_text(n: &Number) -> String {
    // f64's Display drops the ".0" of integral values
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

/// Structural equality that ignores object key order
///
/// Numbers compare by value, so `1` equals `1.0`.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| deep_equal(a, b))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, v)| y.get(key).is_some_and(|w| deep_equal(v, w)))
        }
        _ => a == b,
    }
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return a == b;
    }
    x.as_f64() == y.as_f64()
}

/// Compact JSON with object keys sorted at every level
pub fn canonical_json(value: &Value) -> String {
    let canonical = canonicalize(value);
    serde_json::to_string(&canonical).unwrap_or_else(|_| canonical.to_string())
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), canonicalize(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        Value::Number(n) => Value::Number(integral_number(n)),
        other => other.clone(),
    }
}

// 2.0 serializes as "2.0"; integral floats within i64 range become integers
fn integral_number(n: &Number) -> Number {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            Number::from(f as i64)
        }
        _ => n.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_created_lists_after_fields() {
        let after = json!({"a": 1, "b": true});
        assert_eq!(
            diff_summary(None, Some(&after), &AuditAction::Created),
            "a: 1, b: Si"
        );
    }

    #[test]
    fn test_created_keeps_insertion_order() {
        let after = json!({"nombre": "Ana", "cedula": "1020", "activo": true});
        assert_eq!(
            diff_summary(None, Some(&after), &AuditAction::Created),
            "nombre: Ana, cedula: 1020, activo: Si"
        );
    }

    #[test]
    fn test_deleted_lists_before_fields() {
        let before = json!({"x": null});
        assert_eq!(
            diff_summary(Some(&before), None, &AuditAction::Deleted),
            "x: -"
        );
    }

    #[test]
    fn test_updated_shows_changed_fields_only() {
        let before = json!({"n": "Ana", "active": false});
        let after = json!({"n": "Ana", "active": true});
        assert_eq!(
            diff_summary(Some(&before), Some(&after), &AuditAction::Updated),
            "active: No -> Si"
        );
    }

    #[test]
    fn test_nested_key_order_is_not_a_change() {
        let before = json!({"meta": {"a": 1, "b": [1, {"y": 2, "x": 1}]}, "n": "Ana"});
        let after = json!({"n": "Ana", "meta": {"b": [1, {"x": 1, "y": 2}], "a": 1}});
        assert_eq!(
            diff_summary(Some(&before), Some(&after), &AuditAction::Updated),
            ""
        );
    }

    #[test]
    fn test_missing_key_renders_dash() {
        let before = json!({"codigo": "RF1"});
        let after = json!({"codigo": "RF1", "descripcion": "Zebra"});
        assert_eq!(
            diff_summary(Some(&before), Some(&after), &AuditAction::Updated),
            "descripcion: - -> Zebra"
        );

        let before = json!({"codigo": "RF1", "descripcion": "Zebra"});
        let after = json!({"codigo": "RF1"});
        assert_eq!(
            diff_summary(Some(&before), Some(&after), &AuditAction::Updated),
            "descripcion: Zebra -> -"
        );
    }

    #[test]
    fn test_missing_sides_never_fail() {
        assert_eq!(diff_summary(None, None, &AuditAction::Updated), "");
        assert_eq!(diff_summary(None, None, &AuditAction::Created), "");
        let after = json!({"a": 1});
        assert_eq!(diff_summary(None, Some(&after), &AuditAction::Updated), "");
        assert_eq!(
            diff_summary(Some(&json!("oops")), Some(&after), &AuditAction::Deleted),
            ""
        );
    }

    #[test]
    fn test_unknown_action_diffs_both_sides() {
        let before = json!({"activo": true});
        let after = json!({"activo": false});
        let action = AuditAction::Other("RESTORED".into());
        assert_eq!(
            diff_summary(Some(&before), Some(&after), &action),
            "activo: Si -> No"
        );
    }

    #[test]
    fn test_value_to_text() {
        assert_eq!(value_to_text(Some(&json!("-"))), "-");
        assert_eq!(value_to_text(Some(&json!("  Ana  "))), "Ana");
        assert_eq!(value_to_text(Some(&json!("   "))), "-");
        assert_eq!(value_to_text(Some(&json!(null))), "-");
        assert_eq!(value_to_text(None), "-");
        assert_eq!(value_to_text(Some(&json!(false))), "No");
        assert_eq!(value_to_text(Some(&json!(42))), "42");
        assert_eq!(value_to_text(Some(&json!(-7))), "-7");
        assert_eq!(value_to_text(Some(&json!(2.0))), "2");
        assert_eq!(value_to_text(Some(&json!(2.5))), "2.5");
        assert_eq!(
            value_to_text(Some(&json!({"b": 1, "a": [true, null]}))),
            r#"{"a":[true,null],"b":1}"#
        );
    }

    #[test]
    fn test_nested_integral_floats_drop_fraction() {
        assert_eq!(value_to_text(Some(&json!({"a": [2.0]}))), r#"{"a":[2]}"#);
        assert_eq!(
            value_to_text(Some(&json!([1.5, {"x": -3.0}]))),
            r#"[1.5,{"x":-3}]"#
        );
    }

    #[test]
    fn test_deep_equal() {
        assert!(deep_equal(&json!(1), &json!(1.0)));
        assert!(deep_equal(&json!({"a": {"c": 1, "d": 2}}), &json!({"a": {"d": 2, "c": 1}})));
        assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
        assert!(!deep_equal(&json!({"a": 1}), &json!({"a": 1, "b": null})));
        assert!(!deep_equal(&json!("1"), &json!(1)));
    }
}
