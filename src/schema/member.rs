//! Member field contract
//!
//! Validation semantics:
//! - `name` and `age` must both be present
//! - JSON strings pass through, JSON numbers are coerced to their decimal form
//! - Null and every other shape is rejected with a per-field message
//!
//! No business rules are enforced: `age` is never checked to be numeric and
//! `name` is never checked for content. The `age` column is text in the
//! database and the value stays a string end to end.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::FieldErrors;

const MISSING_FIELD: &str = "Missing data for required field.";
const NULL_FIELD: &str = "Field may not be null.";
const NOT_A_STRING: &str = "Not a valid string.";

/// A stored member row projected to the API shape.
///
/// Field declaration order is the serialized order: `name`, `age`, `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MemberRecord {
    pub name: String,
    pub age: String,
    pub id: i64,
}

/// Validated input for create and update.
///
/// Carries only the client-settable fields; `id` is assigned by the
/// database and immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDraft {
    pub name: String,
    pub age: String,
}

impl MemberDraft {
    /// Validate a raw JSON body into a draft.
    ///
    /// Collects a message for every failing field rather than stopping at
    /// the first, so the 400 body reports all of them at once.
    pub fn from_json(body: &Value) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = coerce_string(body.get("name"), "name", &mut errors);
        let age = coerce_string(body.get("age"), "age", &mut errors);

        match (name, age) {
            (Some(name), Some(age)) => Ok(Self { name, age }),
            _ => Err(errors),
        }
    }
}

/// Presence check plus string coercion for one field.
fn coerce_string(
    value: Option<&Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Null) => {
            errors.push(field, NULL_FIELD);
            None
        }
        Some(_) => {
            errors.push(field, NOT_A_STRING);
            None
        }
        None => {
            errors.push(field, MISSING_FIELD);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_body_passes() {
        let draft = MemberDraft::from_json(&json!({"name": "Alice", "age": "30"})).unwrap();
        assert_eq!(draft.name, "Alice");
        assert_eq!(draft.age, "30");
    }

    #[test]
    fn test_numbers_are_coerced_to_strings() {
        let draft = MemberDraft::from_json(&json!({"name": "Alice", "age": 30})).unwrap();
        assert_eq!(draft.age, "30");
    }

    #[test]
    fn test_empty_body_reports_both_fields() {
        let errors = MemberDraft::from_json(&json!({})).unwrap_err();
        assert_eq!(
            errors.get("name"),
            Some(&["Missing data for required field.".to_string()][..])
        );
        assert_eq!(
            errors.get("age"),
            Some(&["Missing data for required field.".to_string()][..])
        );
    }

    #[test]
    fn test_null_field_is_rejected() {
        let errors =
            MemberDraft::from_json(&json!({"name": null, "age": "30"})).unwrap_err();
        assert_eq!(
            errors.get("name"),
            Some(&["Field may not be null.".to_string()][..])
        );
        assert_eq!(errors.get("age"), None);
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        let errors =
            MemberDraft::from_json(&json!({"name": ["Alice"], "age": true})).unwrap_err();
        assert!(errors.get("name").is_some());
        assert!(errors.get("age").is_some());
    }

    #[test]
    fn test_record_serializes_name_age_id_in_order() {
        let record = MemberRecord {
            name: "Alice".to_string(),
            age: "30".to_string(),
            id: 1,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Alice","age":"30","id":1}"#);
    }

    #[test]
    fn test_records_serialize_as_array() {
        let records = vec![
            MemberRecord { name: "Alice".to_string(), age: "30".to_string(), id: 1 },
            MemberRecord { name: "Bob".to_string(), age: "41".to_string(), id: 2 },
        ];
        let json = serde_json::to_value(&records).unwrap();
        assert_eq!(json[0]["name"], "Alice");
        assert_eq!(json[1]["id"], 2);
    }
}
