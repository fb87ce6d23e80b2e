//! Dashboard service
//!
//! Reads a user's stored transactions and aggregates them into the summary
//! the dashboard renders. Each call is an independent, read-only pass.

use tracing::{info, warn};

use crate::config::Settings;
use crate::error::FinanceResult;
use crate::models::{AggregateSummary, UserId};
use crate::reports::dashboard::aggregate;
use crate::storage::{KeyValueStore, TransactionRepository};

/// Service producing dashboard summaries
pub struct DashboardService<'a> {
    store: &'a dyn KeyValueStore,
    settings: &'a Settings,
}

impl<'a> DashboardService<'a> {
    /// Create a new dashboard service
    pub fn new(store: &'a dyn KeyValueStore, settings: &'a Settings) -> Self {
        Self { store, settings }
    }

    /// Read the user's transactions and aggregate them
    ///
    /// Nothing stored yields an all-zero summary with placeholder labels.
    ///
    /// # Errors
    ///
    /// `StorageUnavailable` when the store cannot be read, `CorruptData` when
    /// the stored payload is not a JSON array, and `MalformedRecord` when a
    /// record is unreadable and the policy is `abort`.
    pub fn load_and_aggregate(&self, user: &UserId) -> FinanceResult<AggregateSummary> {
        let repo = TransactionRepository::new(self.store, &self.settings.storage_namespace);

        let items = repo.load_raw(user).inspect_err(|e| {
            warn!(user = %user, error = %e, "failed to load transactions");
        })?;

        let summary = aggregate(
            &items,
            &self.settings.locale_format(),
            self.settings.malformed_records,
        )?;

        info!(
            user = %user,
            transactions = summary.transactions.len(),
            skipped = summary.skipped.len(),
            "dashboard summary ready"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LocaleSettings, MalformedRecordPolicy};
    use crate::error::FinanceError;
    use crate::locale::{Currency, Locale};
    use crate::models::Money;
    use crate::storage::MemoryStore;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get_item(&self, _key: &str) -> FinanceResult<Option<String>> {
            Err(FinanceError::StorageUnavailable("disk on fire".into()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> FinanceResult<()> {
            Err(FinanceError::StorageUnavailable("disk on fire".into()))
        }
    }

    fn user() -> UserId {
        UserId::parse("7").unwrap()
    }

    const PAYLOAD: &str = r#"[
        {"id":"1","name":"Salary","amount":"100","type":"positive","category":"salary","date":"2024-01-10T12:00:00.000Z"},
        {"id":"2","name":"Lunch","amount":"30","type":"negative","category":"food","date":"2024-01-05T12:00:00.000Z"}
    ]"#;

    #[test]
    fn test_reads_namespaced_key() {
        let store = MemoryStore::with_item("@gofinances:transactions_user:7", PAYLOAD);
        let settings = Settings::default();
        let summary = DashboardService::new(&store, &settings)
            .load_and_aggregate(&user())
            .unwrap();

        assert_eq!(summary.transactions.len(), 2);
        assert_eq!(summary.total.total, Money::from_cents(7_000));
        assert_eq!(summary.total.last_transaction, "01 a 5 de janeiro");
    }

    #[test]
    fn test_custom_namespace_and_locale() {
        let store = MemoryStore::with_item("@other:transactions_user:7", PAYLOAD);
        let settings = Settings {
            storage_namespace: "@other".into(),
            locale: LocaleSettings {
                locale: Locale::EnUs,
                currency: Currency::Usd,
            },
            ..Settings::default()
        };
        let summary = DashboardService::new(&store, &settings)
            .load_and_aggregate(&user())
            .unwrap();
        assert_eq!(summary.income.amount, "$100.00");
    }

    #[test]
    fn test_nothing_stored() {
        let store = MemoryStore::new();
        let settings = Settings::default();
        let summary = DashboardService::new(&store, &settings)
            .load_and_aggregate(&user())
            .unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.income.last_transaction, "Nenhuma transação");
    }

    #[test]
    fn test_storage_failure_propagates() {
        let settings = Settings::default();
        let err = DashboardService::new(&FailingStore, &settings)
            .load_and_aggregate(&user())
            .unwrap_err();
        assert!(err.is_storage_unavailable());
    }

    #[test]
    fn test_corrupt_payload() {
        let store = MemoryStore::with_item("@gofinances:transactions_user:7", "\"hello\"");
        let settings = Settings::default();
        let err = DashboardService::new(&store, &settings)
            .load_and_aggregate(&user())
            .unwrap_err();
        assert!(matches!(err, FinanceError::CorruptData { .. }));
    }

    #[test]
    fn test_abort_policy_from_settings() {
        let store = MemoryStore::with_item(
            "@gofinances:transactions_user:7",
            r#"[{"id":"x","name":"?","amount":"NaN","type":"positive","category":"c","date":"2024-01-01"}]"#,
        );
        let settings = Settings {
            malformed_records: MalformedRecordPolicy::Abort,
            ..Settings::default()
        };
        let err = DashboardService::new(&store, &settings)
            .load_and_aggregate(&user())
            .unwrap_err();
        assert!(matches!(err, FinanceError::MalformedRecord { index: 0, .. }));
    }
}
