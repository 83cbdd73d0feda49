//! JSON contact document parsing.
//!
//! The document must be a top-level array of objects. Every key is optional:
//!
//! ```json
//! [{"id": "...", "name": "...", "phone": "...", "email": "...", "role": "...",
//!   "organization": "...", "notes": "...", "createdAt": "2024-01-31T10:00:00Z"}]
//! ```
//!
//! Unlike the delimited parser, records without a name are passed through with an
//! empty name; they are rejected when the import is committed.

use crate::contacts::import::error::ImportError;
use crate::contacts::types::{ContactRole, IntermediateContact};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Render a JSON scalar as text. Missing keys, nulls and nested values become empty.
fn text_field(record: &Map<String, Value>, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(value)) => value.clone(),
        Some(Value::Number(value)) => value.to_string(),
        Some(Value::Bool(value)) => value.to_string(),
        _ => String::new(),
    }
}

fn optional_text_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    match record.get(key) {
        None | Some(Value::Null) => None,
        Some(_) => Some(text_field(record, key)),
    }
}

/// Read `createdAt` as a date string or epoch milliseconds. Zone-less strings are UTC.
fn created_at_field(record: &Map<String, Value>, fallback: DateTime<Utc>) -> DateTime<Utc> {
    match record.get("createdAt") {
        Some(Value::String(raw)) if !raw.trim().is_empty() => {
            match dateparser::parse_with_timezone(raw, &Utc) {
                Ok(parsed) => parsed,
                Err(err) => {
                    log::debug!("unparsable createdAt `{}`, using import time: {}", raw, err);
                    fallback
                }
            }
        }
        Some(Value::Number(millis)) => millis
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .unwrap_or(fallback),
        _ => fallback,
    }
}

fn parse_record(value: &Value, created_at: DateTime<Utc>) -> IntermediateContact {
    let empty = Map::new();
    let record = value.as_object().unwrap_or(&empty);

    let id = match text_field(record, "id") {
        id if id.is_empty() => Uuid::new_v4().to_string(),
        id => id,
    };

    IntermediateContact {
        id,
        name: text_field(record, "name"),
        phone: text_field(record, "phone"),
        email: text_field(record, "email"),
        role: ContactRole::from_import_text(&text_field(record, "role")),
        organization: text_field(record, "organization"),
        notes: optional_text_field(record, "notes"),
        created_at: created_at_field(record, created_at),
    }
}

/// Parse a JSON array of contact objects.
///
/// Fails with [`ImportError::Format`] when the text is not valid JSON or the
/// top-level value is not an array. `created_at` is used for records that do not
/// carry their own timestamp.
pub fn parse_structured(
    text: &str,
    created_at: DateTime<Utc>,
) -> Result<Vec<IntermediateContact>, ImportError> {
    let document: Value = serde_json::from_str(text)
        .map_err(|err| ImportError::format(format!("Invalid JSON format: {err}")))?;

    let Value::Array(records) = document else {
        return Err(ImportError::format(
            "Invalid JSON format: expected an array of contacts",
        ));
    };

    Ok(records
        .iter()
        .map(|record| parse_record(record, created_at))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn missing_fields_get_defaults() {
        let now = Utc::now();
        let contacts = parse_structured(r#"[{"name":"Y"}]"#, now).expect("valid document");

        assert_eq!(contacts.len(), 1);
        let contact = &contacts[0];
        assert_eq!(contact.name, "Y");
        assert_eq!(contact.phone, "");
        assert_eq!(contact.email, "");
        assert_eq!(contact.role, ContactRole::Other);
        assert_eq!(contact.organization, "");
        assert_eq!(contact.notes, None);
        assert_eq!(contact.created_at, now);
        assert!(Uuid::parse_str(&contact.id).is_ok());
    }

    #[test]
    fn keeps_supplied_fields() {
        let text = r#"[{
            "id": "c-1",
            "name": "Star Health Desk",
            "phone": "+919876543210",
            "email": "desk@star.example",
            "role": "insurance_agent",
            "organization": "Star Health",
            "notes": "prefers email",
            "createdAt": "2024-01-31T10:00:00Z"
        }]"#;
        let contact = parse_structured(text, Utc::now()).expect("valid document").remove(0);

        assert_eq!(contact.id, "c-1");
        assert_eq!(contact.role, ContactRole::InsuranceAgent);
        assert_eq!(contact.notes.as_deref(), Some("prefers email"));
        assert_eq!(
            contact.created_at,
            Utc.with_ymd_and_hms(2024, 1, 31, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn zoneless_created_at_is_read_as_utc() {
        let text = r#"[{"name":"Z","createdAt":"2024-01-31 10:00"}]"#;
        let contact = parse_structured(text, Utc::now()).expect("valid document").remove(0);
        assert_eq!(
            contact.created_at,
            Utc.with_ymd_and_hms(2024, 1, 31, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn accepts_epoch_millis_and_numeric_phone() {
        let text = r#"[{"name":"N","phone":9876543210,"createdAt":1706695200000}]"#;
        let contact = parse_structured(text, Utc::now()).expect("valid document").remove(0);
        assert_eq!(contact.phone, "9876543210");
        assert_eq!(
            contact.created_at,
            Utc.with_ymd_and_hms(2024, 1, 31, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn nameless_records_pass_through() {
        let contacts =
            parse_structured(r#"[{"phone":"9876543210"}, 42, {}]"#, Utc::now()).expect("valid");
        assert_eq!(contacts.len(), 3);
        assert!(contacts.iter().all(|contact| contact.name.is_empty()));
    }

    #[test]
    fn unparsable_created_at_falls_back() {
        let now = Utc::now();
        let contact = parse_structured(r#"[{"name":"A","createdAt":"not a date"}]"#, now)
            .expect("valid")
            .remove(0);
        assert_eq!(contact.created_at, now);
    }

    #[test]
    fn rejects_invalid_json() {
        let err = parse_structured("[{\"name\":", Utc::now()).unwrap_err();
        assert!(matches!(err, ImportError::Format(_)));
        assert!(err.to_string().starts_with("Invalid JSON format"));
    }

    #[test]
    fn rejects_non_array_document() {
        let err = parse_structured(r#"{"name":"Y"}"#, Utc::now()).unwrap_err();
        assert!(matches!(err, ImportError::Format(_)));
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_structured("[]", Utc::now()).expect("valid").is_empty());
    }
}
