//! Transaction repository over the key-value store
//!
//! Each user's transactions live under one key as a JSON array:
//! `<namespace>:transactions_user:<user id>`.

use serde_json::Value;
use tracing::{debug, info};

use super::key_value::KeyValueStore;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{TransactionRecord, UserId};

/// Build the storage key for a user's transactions
pub fn transactions_key(namespace: &str, user: &UserId) -> String {
    format!("{}:transactions_user:{}", namespace, user)
}

/// Reads and appends a user's stored transaction array
pub struct TransactionRepository<'a> {
    store: &'a dyn KeyValueStore,
    namespace: &'a str,
}

impl<'a> TransactionRepository<'a> {
    pub fn new(store: &'a dyn KeyValueStore, namespace: &'a str) -> Self {
        Self { store, namespace }
    }

    pub fn key(&self, user: &UserId) -> String {
        transactions_key(self.namespace, user)
    }

    /// Load the raw array elements for a user
    ///
    /// Nothing stored yields an empty collection. A payload that is not a JSON
    /// array is `CorruptData`; individual elements are left uninterpreted.
    pub fn load_raw(&self, user: &UserId) -> FinanceResult<Vec<Value>> {
        let key = self.key(user);
        let Some(payload) = self.store.get_item(&key)? else {
            debug!(%key, "no stored transactions");
            return Ok(Vec::new());
        };

        let value: Value = serde_json::from_str(&payload)
            .map_err(|e| FinanceError::corrupt(&key, format!("not valid JSON: {}", e)))?;

        match value {
            Value::Array(items) => Ok(items),
            Value::Null => Ok(Vec::new()),
            other => Err(FinanceError::corrupt(
                &key,
                format!("expected an array, found {}", json_kind(&other)),
            )),
        }
    }

    /// Append a record to the user's array and write it back
    pub fn append(&self, user: &UserId, record: &TransactionRecord) -> FinanceResult<()> {
        let key = self.key(user);
        let mut items = self.load_raw(user)?;
        items.push(serde_json::to_value(record)?);

        let payload = serde_json::to_string(&items)?;
        self.store.set_item(&key, &payload)?;

        info!(%key, id = %record.id, count = items.len(), "stored transaction");
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use crate::storage::MemoryStore;
    use chrono::{TimeZone, Utc};

    fn user() -> UserId {
        UserId::parse("42").unwrap()
    }

    #[test]
    fn test_key_format() {
        assert_eq!(
            transactions_key("@gofinances", &user()),
            "@gofinances:transactions_user:42"
        );
    }

    #[test]
    fn test_missing_key_is_empty() {
        let store = MemoryStore::new();
        let repo = TransactionRepository::new(&store, "@gofinances");
        assert!(repo.load_raw(&user()).unwrap().is_empty());
    }

    #[test]
    fn test_non_array_is_corrupt() {
        let store = MemoryStore::with_item("@gofinances:transactions_user:42", r#"{"a":1}"#);
        let repo = TransactionRepository::new(&store, "@gofinances");
        let err = repo.load_raw(&user()).unwrap_err();
        assert!(matches!(err, FinanceError::CorruptData { .. }));
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_invalid_json_is_corrupt() {
        let store = MemoryStore::with_item("@gofinances:transactions_user:42", "[{");
        let repo = TransactionRepository::new(&store, "@gofinances");
        assert!(matches!(
            repo.load_raw(&user()),
            Err(FinanceError::CorruptData { .. })
        ));
    }

    #[test]
    fn test_append() {
        let store = MemoryStore::new();
        let repo = TransactionRepository::new(&store, "@gofinances");
        let at = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();

        let first = TransactionRecord::new(
            "Salary",
            Money::from_cents(500_000),
            TransactionKind::Income,
            "salary",
            at,
        );
        let second = TransactionRecord::new(
            "Pizza",
            Money::from_cents(5_990),
            TransactionKind::Expense,
            "food",
            at,
        );
        repo.append(&user(), &first).unwrap();
        repo.append(&user(), &second).unwrap();

        let items = repo.load_raw(&user()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], "Salary");
        assert_eq!(items[1]["type"], "negative");
    }

    #[test]
    fn test_users_do_not_share_keys() {
        let store = MemoryStore::new();
        let repo = TransactionRepository::new(&store, "@gofinances");
        let at = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        let record = TransactionRecord::new(
            "Salary",
            Money::from_cents(100),
            TransactionKind::Income,
            "salary",
            at,
        );

        repo.append(&user(), &record).unwrap();

        let other = UserId::parse("43").unwrap();
        assert!(repo.load_raw(&other).unwrap().is_empty());
    }
}
