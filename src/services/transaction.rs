//! Transaction service
//!
//! Registers new transactions for a user and lists what is stored.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::config::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, TransactionKind, TransactionRecord, UserId};
use crate::storage::{KeyValueStore, TransactionRepository};

/// Service for transaction registration
pub struct TransactionService<'a> {
    store: &'a dyn KeyValueStore,
    settings: &'a Settings,
}

/// Input for registering a new transaction
#[derive(Debug, Clone, Default)]
pub struct CreateTransactionInput {
    pub name: String,
    pub amount: Money,
    /// `None` until the user picks a side in the type selector
    pub kind: Option<TransactionKind>,
    pub category: String,
    /// Defaults to now
    pub occurred_at: Option<DateTime<Utc>>,
}

impl CreateTransactionInput {
    fn validate(&self) -> FinanceResult<TransactionKind> {
        if self.name.trim().is_empty() {
            return Err(FinanceError::Validation("Name is required".into()));
        }
        if !self.amount.is_positive() {
            return Err(FinanceError::Validation(
                "Amount must be greater than zero".into(),
            ));
        }
        let kind = self
            .kind
            .ok_or_else(|| FinanceError::Validation("Select income or expense".into()))?;
        if self.category.trim().is_empty() {
            return Err(FinanceError::Validation("Category is required".into()));
        }
        Ok(kind)
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(store: &'a dyn KeyValueStore, settings: &'a Settings) -> Self {
        Self { store, settings }
    }

    fn repository(&self) -> TransactionRepository<'_> {
        TransactionRepository::new(self.store, &self.settings.storage_namespace)
    }

    /// Validate the input and append it to the user's stored transactions
    ///
    /// A stored payload that cannot be read as an array is left untouched.
    pub fn register(
        &self,
        user: &UserId,
        input: CreateTransactionInput,
    ) -> FinanceResult<TransactionRecord> {
        let kind = input.validate()?;
        let record = TransactionRecord::new(
            input.name.trim(),
            input.amount,
            kind,
            input.category.trim(),
            input.occurred_at.unwrap_or_else(Utc::now),
        );

        self.repository().append(user, &record)?;
        Ok(record)
    }

    /// The user's stored records, uninterpreted and in stored order
    pub fn list(&self, user: &UserId) -> FinanceResult<Vec<Value>> {
        self.repository().load_raw(user)
    }
}
