//! Commit coordination for previewed contacts.
//!
//! Records are persisted strictly in order with one awaited store call at a
//! time. A failing record is reported in the [`ImportResult`] and the loop moves
//! on; nothing aborts the batch and there is no mid-commit cancellation.

use crate::contacts::import::stats::{
    FailureKind, ImportFailure, ImportResult, MISSING_FIELDS_MESSAGE,
};
use crate::contacts::store::{ContactStore, SharedContactStore};
use crate::contacts::types::{IntermediateContact, NewContact};

/// Persists previewed contacts and reconciles the outcome.
pub struct ContactImporter {
    store: SharedContactStore,
}

/// A contact needs a name plus at least one of phone or email.
fn missing_required_fields(contact: &IntermediateContact) -> bool {
    contact.name.trim().is_empty()
        || (contact.phone.trim().is_empty() && contact.email.trim().is_empty())
}

impl ContactImporter {
    pub fn new(store: SharedContactStore) -> Self {
        Self { store }
    }

    fn store(&self) -> &dyn ContactStore {
        self.store.as_ref()
    }

    /// Commit contacts one by one and return the reconciliation.
    ///
    /// # Process
    /// 1. Records without a name, or with neither phone nor email, are skipped
    ///    without a store call
    /// 2. Every other record is handed to the store and awaited
    /// 3. A missing record or store error marks that record skipped
    pub async fn commit(&self, contacts: &[IntermediateContact]) -> ImportResult {
        log::info!("committing {} contacts", contacts.len());
        let mut result = ImportResult::default();

        for (index, contact) in contacts.iter().enumerate() {
            if missing_required_fields(contact) {
                log::warn!("contact #{} skipped: missing required fields", index);
                result.record_skipped(ImportFailure {
                    index,
                    name: contact.name.clone(),
                    kind: FailureKind::MissingRequiredFields,
                    message: MISSING_FIELDS_MESSAGE.to_string(),
                });
                continue;
            }

            let label = contact.label();
            match self.store().create(NewContact::from(contact)).await {
                Ok(Some(stored)) => {
                    log::debug!("contact #{} imported as {}", index, stored.id);
                    result.record_imported();
                }
                Ok(None) => {
                    log::warn!("contact #{} ({}) rejected by store", index, label);
                    result.record_skipped(ImportFailure {
                        index,
                        name: contact.name.clone(),
                        kind: FailureKind::Rejected,
                        message: format!(
                            "Failed to import {label}: store did not return a record"
                        ),
                    });
                }
                Err(err) => {
                    log::warn!("contact #{} ({}) failed: {}", index, label, err);
                    result.record_skipped(ImportFailure {
                        index,
                        name: contact.name.clone(),
                        kind: FailureKind::StoreError,
                        message: format!("Failed to import {label}: {err}"),
                    });
                }
            }
        }

        log::info!(
            "contact import finished: {} imported, {} skipped",
            result.imported,
            result.skipped
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::import::structured::parse_structured;
    use crate::contacts::store::StoreError;
    use crate::contacts::types::ContactRole;
    use crate::models::StoredContact;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[derive(Clone, Copy, Debug)]
    enum Outcome {
        Created,
        Declined,
        Fails,
    }

    /// Store that answers each call from a script and records the names it saw.
    struct ScriptedStore {
        outcomes: Mutex<Vec<Outcome>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedStore {
        fn new(outcomes: Vec<Outcome>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(outcomes.into_iter().rev().collect()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[rocket::async_trait]
    impl ContactStore for ScriptedStore {
        async fn create(&self, contact: NewContact) -> Result<Option<StoredContact>, StoreError> {
            self.calls.lock().unwrap().push(contact.name.clone());
            let outcome = self.outcomes.lock().unwrap().pop().unwrap_or(Outcome::Created);
            match outcome {
                Outcome::Created => Ok(Some(StoredContact {
                    id: Uuid::new_v4(),
                    name: contact.name,
                    phone: contact.phone,
                    email: contact.email,
                    role: contact.role,
                    organization: contact.organization,
                    notes: contact.notes,
                    created_at: Utc::now(),
                })),
                Outcome::Declined => Ok(None),
                Outcome::Fails => Err(StoreError::Unavailable("connection reset".to_string())),
            }
        }

        async fn list(&self, _limit: i64, _offset: i64) -> Result<Vec<StoredContact>, StoreError> {
            Ok(Vec::new())
        }
    }

    fn contact(name: &str, phone: &str, email: &str) -> IntermediateContact {
        IntermediateContact {
            id: String::new(),
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            role: ContactRole::PayerContact,
            organization: String::new(),
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn empty_commit_is_empty_result() {
        let store = ScriptedStore::new(vec![]);
        let result = ContactImporter::new(store.clone()).commit(&[]).await;
        assert_eq!(result, ImportResult::default());
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn store_failures_are_counted_per_record() {
        let store = ScriptedStore::new(vec![
            Outcome::Created,
            Outcome::Fails,
            Outcome::Created,
            Outcome::Declined,
            Outcome::Created,
        ]);
        let contacts = vec![
            contact("A", "9876543210", ""),
            contact("B", "9876543211", ""),
            contact("C", "", "c@example.com"),
            contact("D", "9876543213", ""),
            contact("E", "9876543214", ""),
        ];

        let result = ContactImporter::new(store.clone()).commit(&contacts).await;

        assert_eq!(result.imported, 3);
        assert_eq!(result.skipped, 2);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0], "Failed to import B: connection reset");
        assert_eq!(
            result.errors[1],
            "Failed to import D: store did not return a record"
        );
        assert_eq!(result.failures[0].kind, FailureKind::StoreError);
        assert_eq!(result.failures[1].kind, FailureKind::Rejected);
        assert_eq!(result.failures[1].index, 3);
        assert_eq!(store.calls(), vec!["A", "B", "C", "D", "E"]);
    }

    #[tokio::test]
    async fn incomplete_records_never_reach_the_store() {
        let store = ScriptedStore::new(vec![]);
        let contacts = vec![
            contact("", "", ""),
            contact(" ", "9876543210", "x@example.com"),
            contact("Name Only", "", " "),
            contact("Complete", "9876543210", ""),
        ];

        let result = ContactImporter::new(store.clone()).commit(&contacts).await;

        assert_eq!(result.imported, 1);
        assert_eq!(result.skipped, 3);
        assert_eq!(result.errors, vec![MISSING_FIELDS_MESSAGE.to_string(); 3]);
        assert!(
            result
                .failures
                .iter()
                .all(|failure| failure.kind == FailureKind::MissingRequiredFields)
        );
        assert_eq!(
            result.failures.iter().map(|f| f.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(store.calls(), vec!["Complete"]);
    }

    #[tokio::test]
    async fn structured_record_with_name_only_is_skipped() {
        let store = ScriptedStore::new(vec![]);
        let contacts = parse_structured(r#"[{"name":"Y"}]"#, Utc::now()).expect("valid document");

        let result = ContactImporter::new(store.clone()).commit(&contacts).await;

        assert_eq!(result.imported, 0);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.errors, vec![MISSING_FIELDS_MESSAGE.to_string()]);
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn every_record_is_classified_once() {
        let outcomes = vec![Outcome::Fails, Outcome::Created, Outcome::Declined, Outcome::Fails];
        let store = ScriptedStore::new(outcomes);
        let contacts: Vec<_> = (0..6)
            .map(|i| contact(&format!("C{i}"), "9876543210", ""))
            .collect();

        let result = ContactImporter::new(store).commit(&contacts).await;

        assert_eq!(result.total(), contacts.len());
        assert_eq!(result.imported, 3);
        assert_eq!(result.skipped, 3);
        assert_eq!(result.errors.len(), result.skipped);
    }
}
