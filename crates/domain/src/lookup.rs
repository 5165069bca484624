// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Prioritized-fallback field lookup.
//!
//! The backend exposes the same concept under several property names
//! (`participation_end`, `end_date`, ...). Every reader of a snapshot
//! goes through these helpers with an ordered list of candidate keys
//! instead of repeating fallback chains inline.
//!
//! ## Rules
//!
//! - A key matches when it is present and not `null`
//! - The first matching key wins; later keys are never consulted
//! - Non-object inputs match nothing

use crate::timestamp::parse_timestamp;
use serde_json::Value;
use std::num::FpCategory;
use time::OffsetDateTime;

/// Returns the first value among `keys` that is present and not `null`.
#[must_use]
pub fn first_present<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let object = value.as_object()?;
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|candidate| !candidate.is_null())
}

/// Returns the first present value rendered as a trimmed, non-empty string.
///
/// Numbers are rendered with their JSON representation so that numeric
/// identifiers and string identifiers read the same way.
#[must_use]
pub fn first_str(value: &Value, keys: &[&str]) -> Option<String> {
    match first_present(value, keys)? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Returns whether the first present value is truthy.
///
/// Absent keys are falsy.
#[must_use]
pub fn first_truthy(value: &Value, keys: &[&str]) -> bool {
    first_present(value, keys).is_some_and(is_truthy)
}

/// Returns the first present value parsed as a timestamp.
///
/// A present but malformed value yields `None`; it does not fall through
/// to later keys.
#[must_use]
pub fn first_timestamp(value: &Value, keys: &[&str]) -> Option<OffsetDateTime> {
    first_present(value, keys)?.as_str().and_then(parse_timestamp)
}

/// Returns the first present value when it is a JSON object.
///
/// A present value of another type yields `None`; it does not fall through
/// to later keys.
#[must_use]
pub fn first_object<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    first_present(value, keys).filter(|candidate| candidate.is_object())
}

/// Returns the first present value as a non-negative count.
///
/// Integer strings are accepted; negative or fractional values are not.
#[must_use]
pub fn first_count(value: &Value, keys: &[&str]) -> Option<u64> {
    match first_present(value, keys)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Truthiness of a snapshot field.
///
/// `null`, `false`, zero, the empty string and the strings `"false"` and
/// `"0"` are falsy. Everything else, including empty arrays and objects,
/// is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.classify() != FpCategory::Zero),
        Value::String(s) => {
            let s = s.trim();
            !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false"))
        }
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_present_skips_null() {
        let value = json!({ "participation_end": null, "end_date": "2025-01-01" });
        let found = first_present(&value, &["participation_end", "end_date"]);
        assert_eq!(found, Some(&json!("2025-01-01")));
    }

    #[test]
    fn test_first_present_respects_priority() {
        let value = json!({ "end_date": "b", "participation_end": "a" });
        let found = first_present(&value, &["participation_end", "end_date"]);
        assert_eq!(found, Some(&json!("a")));
    }

    #[test]
    fn test_first_present_non_object() {
        assert!(first_present(&json!([1, 2]), &["a"]).is_none());
        assert!(first_present(&Value::Null, &["a"]).is_none());
    }

    #[test]
    fn test_first_str_renders_numbers() {
        let value = json!({ "id": 42 });
        assert_eq!(first_str(&value, &["id"]), Some(String::from("42")));
    }

    #[test]
    fn test_first_str_blank_is_absent() {
        let value = json!({ "title": "   " });
        assert_eq!(first_str(&value, &["title"]), None);
    }

    #[test]
    fn test_first_timestamp_malformed_does_not_fall_through() {
        let value = json!({ "participation_end": "soon", "end_date": "2025-01-01" });
        assert!(first_timestamp(&value, &["participation_end", "end_date"]).is_none());
    }

    #[test]
    fn test_first_object_does_not_fall_through() {
        let value = json!({ "roulette": 12, "raffle": { "title": "Spring" } });
        assert!(first_object(&value, &["roulette", "raffle"]).is_none());

        let value = json!({ "roulette": null, "raffle": { "title": "Spring" } });
        assert_eq!(
            first_object(&value, &["roulette", "raffle"]),
            Some(&json!({ "title": "Spring" }))
        );
    }

    #[test]
    fn test_first_count() {
        assert_eq!(first_count(&json!({ "n": 3 }), &["n"]), Some(3));
        assert_eq!(first_count(&json!({ "n": " 7 " }), &["n"]), Some(7));
        assert_eq!(first_count(&json!({ "n": -1 }), &["n"]), None);
        assert_eq!(first_count(&json!({ "n": 1.5 }), &["n"]), None);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!("false")));
        assert!(!is_truthy(&json!("0")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(17)));
        assert!(is_truthy(&json!("2025-01-01T00:00:00Z")));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
    }
}
