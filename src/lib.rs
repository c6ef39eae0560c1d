// Copyright 2025 Cowboy AI, LLC.

//! # Land Workflow
//!
//! Transaction workflow engine for a land registry office.
//!
//! Filings (transactions) move between registry desks through a fixed set of
//! statuses. This crate provides:
//! - **Statuses and transitions**: the status set, its persistence codes and
//!   the transition table, driven by the transaction and document type
//! - **Authorization**: which workflow commands a user may run, based on
//!   registry roles and task ownership
//! - **Command menus**: applicable commands for one transaction or merged
//!   across a multi-selection
//! - **Execution**: an engine that appends tasks to transaction histories and
//!   persists them through an injected repository
//!
//! ## Example
//!
//! ```rust
//! use land_workflow::workflow::{CatalogRules, TransactionStatus};
//! use land_workflow::workflow::next_statuses;
//! use land_workflow::{DocumentType, TransactionType};
//!
//! let rules = CatalogRules::default();
//! let next = next_statuses(
//!     TransactionStatus::Payment,
//!     TransactionType::INSCRIPTION,
//!     DocumentType::NOTARIAL_DEED,
//!     &rules,
//! );
//! assert_eq!(next, vec![TransactionStatus::Received, TransactionStatus::Deleted]);
//! ```

#![warn(missing_docs)]

mod config;
mod dto;
mod entity;
mod errors;
mod identifiers;

pub mod persistence;
pub mod state_machine;
pub mod workflow;

pub use config::{EngineConfig, WorkflowConfig};
pub use dto::{
    map_applicable_commands, map_history, ApplicableCommandDto, NamedEntityDto, WorkflowTaskDto,
};
pub use entity::{AggregateRoot, EntityId, TaskMarker, TransactionMarker};
pub use errors::{WorkflowError, WorkflowResult};
pub use identifiers::{ContactId, DocumentType, TaskId, TransactionId, TransactionType};
pub use persistence::{InMemoryTransactionRepository, TransactionRepository};
pub use workflow::{
    WorkflowCommand, WorkflowCommandType, WorkflowEngine, WorkflowTask, Transaction,
    TransactionStatus,
};
