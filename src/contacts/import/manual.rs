//! Manual-entry form rows.
//!
//! Each [`RowDraft`](crate::contacts::RowDraft) becomes one contact with its
//! fields trimmed. Rows left without a name are dropped silently, like short
//! delimited rows.

use crate::contacts::types::{IntermediateContact, RowDrafts};
use chrono::{DateTime, Utc};

/// Convert manual-entry rows into contacts.
///
/// Rows whose name is blank are skipped; every other field is trimmed.
pub fn parse_manual_rows(rows: &RowDrafts, created_at: DateTime<Utc>) -> Vec<IntermediateContact> {
    rows.iter()
        .filter(|row| !row.name.trim().is_empty())
        .map(|row| IntermediateContact {
            id: String::new(),
            name: row.name.trim().to_string(),
            phone: row.phone.trim().to_string(),
            email: row.email.trim().to_string(),
            role: row.role,
            organization: row.organization.trim().to_string(),
            notes: None,
            created_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::types::{ContactRole, RowDraft};

    #[test]
    fn filters_rows_without_name() {
        let mut rows = RowDrafts::new();
        rows.push(RowDraft {
            name: "X".to_string(),
            phone: String::new(),
            email: String::new(),
            role: ContactRole::Other,
            organization: String::new(),
        });

        let contacts = parse_manual_rows(&rows, Utc::now());
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "X");
        assert_eq!(contacts[0].role, ContactRole::Other);
    }

    #[test]
    fn trims_fields_and_treats_whitespace_name_as_blank() {
        let rows = RowDrafts::try_from(vec![
            RowDraft {
                name: "   ".to_string(),
                phone: "9876543210".to_string(),
                ..RowDraft::default()
            },
            RowDraft {
                name: "  Dr. Iyer ".to_string(),
                phone: " 9876543210 ".to_string(),
                email: " iyer@hospital.example ".to_string(),
                role: ContactRole::HospitalContact,
                organization: " Apollo ".to_string(),
            },
        ])
        .expect("non-empty rows");

        let stamp = Utc::now();
        let contacts = parse_manual_rows(&rows, stamp);
        assert_eq!(contacts.len(), 1);
        let contact = &contacts[0];
        assert_eq!(contact.name, "Dr. Iyer");
        assert_eq!(contact.phone, "9876543210");
        assert_eq!(contact.email, "iyer@hospital.example");
        assert_eq!(contact.organization, "Apollo");
        assert_eq!(contact.created_at, stamp);
        assert!(contact.id.is_empty());
    }

    #[test]
    fn does_not_modify_rows() {
        let rows = RowDrafts::try_from(vec![RowDraft {
            name: " padded ".to_string(),
            ..RowDraft::default()
        }])
        .expect("non-empty rows");
        let before = rows.clone();
        parse_manual_rows(&rows, Utc::now());
        assert_eq!(rows, before);
    }
}
