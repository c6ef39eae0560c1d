// Copyright 2025 Cowboy AI, LLC.

//! # Persistence Layer
//!
//! Transactions are stored by the registry's object store. This module
//! defines the narrow interface the workflow engine needs from it and an
//! in-memory implementation for tests and embedding.

pub mod transaction_repository;

pub use transaction_repository::{InMemoryTransactionRepository, TransactionRepository};
