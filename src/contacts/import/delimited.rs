//! Comma-delimited contact parsing.
//!
//! Accepted layout, one contact per line:
//!
//! ```text
//! name,phone,email,role,organization
//! A Corp,9876543210,a@b.com,payer_contact,ESIC
//! ```
//!
//! The header row is optional and recognised by the word `name` anywhere in the
//! first line. Rows with fewer than three fields, or without a name, are dropped
//! without an error so that one bad line never blocks the rest of the file.

use crate::contacts::types::{ContactRole, IntermediateContact};
use chrono::{DateTime, Utc};

/// Fields required before a row is considered a contact.
pub const MIN_FIELDS: usize = 3;

/// Columns read from each row; anything past the fifth is ignored.
pub const COLUMNS: [&str; 5] = ["name", "phone", "email", "role", "organization"];

fn is_header(line: &str) -> bool {
    line.to_lowercase().contains("name")
}

fn clean_field(field: &str) -> String {
    field.trim().replace('"', "")
}

fn parse_row(line: &str, created_at: DateTime<Utc>) -> Option<IntermediateContact> {
    let fields: Vec<String> = line.split(',').map(clean_field).collect();
    if fields.len() < MIN_FIELDS {
        log::debug!(
            "dropping row with {} fields (need {}): {}",
            fields.len(),
            MIN_FIELDS,
            line
        );
        return None;
    }

    let field = |index: usize| fields.get(index).cloned().unwrap_or_default();
    let name = field(0);
    if name.is_empty() {
        log::debug!("dropping row without a name: {}", line);
        return None;
    }

    Some(IntermediateContact {
        id: String::new(),
        name,
        phone: field(1),
        email: field(2),
        role: ContactRole::from_import_text(&field(3)),
        organization: field(4),
        notes: None,
        created_at,
    })
}

/// Parse comma-delimited text into contacts, stamping each with `created_at`.
pub fn parse_delimited(text: &str, created_at: DateTime<Utc>) -> Vec<IntermediateContact> {
    let mut lines = text.lines().peekable();

    if lines.peek().is_some_and(|first| is_header(first)) {
        lines.next();
    }

    lines
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| parse_row(line, created_at))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn parses_rows_after_header() {
        let text = "name,phone,email,role,organization\nA Corp,9876543210,a@b.com,payer_contact,ESIC\nonly,two";
        let contacts = parse_delimited(text, now());

        assert_eq!(contacts.len(), 1);
        let contact = &contacts[0];
        assert_eq!(contact.name, "A Corp");
        assert_eq!(contact.phone, "9876543210");
        assert_eq!(contact.email, "a@b.com");
        assert_eq!(contact.role, ContactRole::PayerContact);
        assert_eq!(contact.organization, "ESIC");
        assert!(contact.id.is_empty());
    }

    #[test]
    fn header_detection_is_case_insensitive() {
        let text = "Full NAME,Phone,Email\nRavi,9876543210,ravi@example.com";
        let contacts = parse_delimited(text, now());
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "Ravi");
    }

    #[test]
    fn first_line_without_header_is_data() {
        let text = "Ravi,9876543210,ravi@example.com\nMeera,9123456789,meera@example.com";
        assert_eq!(parse_delimited(text, now()).len(), 2);
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let contacts = parse_delimited("Ravi,9876543210,ravi@example.com", now());
        assert_eq!(contacts[0].role, ContactRole::Other);
        assert_eq!(contacts[0].organization, "");
        assert_eq!(contacts[0].notes, None);
    }

    #[test]
    fn strips_quotes_and_whitespace() {
        let text = "\"Ravi Kumar\" , \"9876543210\",ravi@example.com , hospital_contact ,\"City Hospital\"";
        let contact = &parse_delimited(text, now())[0];
        assert_eq!(contact.name, "Ravi Kumar");
        assert_eq!(contact.phone, "9876543210");
        assert_eq!(contact.email, "ravi@example.com");
        assert_eq!(contact.role, ContactRole::HospitalContact);
        assert_eq!(contact.organization, "City Hospital");
    }

    #[test]
    fn ignores_fields_past_organization() {
        let contact = &parse_delimited("Ravi,1,r@x.io,tpa_contact,Org,extra,more", now())[0];
        assert_eq!(contact.organization, "Org");
        assert_eq!(contact.role, ContactRole::TpaContact);
    }

    #[test]
    fn drops_blank_short_and_nameless_rows() {
        let text = "name,phone,email\n\n   \nshort,row\n,9876543210,x@y.com\nKeep,9876543210,k@y.com\r\n";
        let contacts = parse_delimited(text, now());
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "Keep");
    }

    #[test]
    fn parsing_twice_yields_equal_contacts() {
        let text = "Ravi,9876543210,ravi@example.com\nMeera,9123456789,meera@example.com,payer_contact";
        let stamp = now();
        assert_eq!(parse_delimited(text, stamp), parse_delimited(text, stamp));
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_delimited("", now()).is_empty());
    }
}
