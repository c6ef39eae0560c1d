// Copyright 2025 Cowboy AI, LLC.

//! Transaction repository

use crate::entity::AggregateRoot;
use crate::errors::{WorkflowError, WorkflowResult};
use crate::identifiers::TransactionId;
use crate::workflow::Transaction;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Loads and saves transactions
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Load a transaction
    async fn load(&self, id: &TransactionId) -> WorkflowResult<Option<Transaction>>;

    /// Save a transaction
    ///
    /// `expected_version` is the version the caller loaded. A stored
    /// transaction at any other version is a concurrency conflict.
    async fn save(&self, transaction: &Transaction, expected_version: u64) -> WorkflowResult<()>;

    /// Check if exists
    async fn exists(&self, id: &TransactionId) -> WorkflowResult<bool>;
}

/// In-memory repository
#[derive(Clone, Default)]
pub struct InMemoryTransactionRepository {
    storage: Arc<RwLock<HashMap<TransactionId, Transaction>>>,
}

impl InMemoryTransactionRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new transaction, replacing nothing
    pub async fn insert(&self, transaction: Transaction) -> WorkflowResult<()> {
        let mut storage = self.storage.write().await;
        let id = transaction.id();
        if storage.contains_key(&id) {
            return Err(WorkflowError::rule(format!("transaction {id} already exists")));
        }
        storage.insert(id, transaction);
        Ok(())
    }

    /// Number of stored transactions
    pub async fn len(&self) -> usize {
        self.storage.read().await.len()
    }

    /// Check if the repository is empty
    pub async fn is_empty(&self) -> bool {
        self.storage.read().await.is_empty()
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn load(&self, id: &TransactionId) -> WorkflowResult<Option<Transaction>> {
        Ok(self.storage.read().await.get(id).cloned())
    }

    async fn save(&self, transaction: &Transaction, expected_version: u64) -> WorkflowResult<()> {
        let mut storage = self.storage.write().await;
        let id = transaction.id();

        if let Some(stored) = storage.get(&id) {
            if stored.version() != expected_version {
                return Err(WorkflowError::ConcurrencyConflict {
                    expected: expected_version,
                    actual: stored.version(),
                });
            }
        }

        debug!(transaction = %id, version = transaction.version(), "saving transaction");
        storage.insert(id, transaction.clone());
        Ok(())
    }

    async fn exists(&self, id: &TransactionId) -> WorkflowResult<bool> {
        Ok(self.storage.read().await.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::{ContactId, DocumentType, TransactionType};
    use crate::workflow::{TransactionStatus, WorkflowTask};

    fn sample() -> Transaction {
        Transaction::new(
            TransactionId::new(),
            TransactionType::CERTIFICATES,
            DocumentType::PROPERTY_CERTIFICATE,
            WorkflowTask::new(TransactionStatus::Payment, ContactId::new(), ""),
        )
    }

    #[tokio::test]
    async fn test_insert_load_exists() {
        let repo = InMemoryTransactionRepository::new();
        let transaction = sample();
        let id = transaction.id();

        assert!(repo.is_empty().await);
        repo.insert(transaction.clone()).await.unwrap();

        assert!(repo.exists(&id).await.unwrap());
        assert_eq!(repo.load(&id).await.unwrap(), Some(transaction.clone()));
        assert_eq!(repo.len().await, 1);
        assert!(repo.insert(transaction).await.is_err());
        assert_eq!(repo.load(&TransactionId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_detects_stale_version() {
        let repo = InMemoryTransactionRepository::new();
        let transaction = sample();
        let id = transaction.id();
        repo.insert(transaction).await.unwrap();

        let mut first = repo.load(&id).await.unwrap().unwrap();
        let mut second = first.clone();

        first.increment_version();
        repo.save(&first, 0).await.unwrap();

        second.increment_version();
        let err = repo.save(&second, 0).await.unwrap_err();
        assert!(err.is_concurrency_error());
        assert_eq!(repo.load(&id).await.unwrap().unwrap().version(), 1);
    }

    #[test]
    fn test_save_of_unknown_transaction_stores_it() {
        let repo = InMemoryTransactionRepository::new();
        let transaction = sample();
        let id = transaction.id();

        tokio_test::block_on(async {
            assert!(!repo.exists(&id).await.unwrap());
            repo.save(&transaction, 0).await.unwrap();
            assert!(repo.exists(&id).await.unwrap());
        });
    }
}
