// Copyright 2025 Cowboy AI, LLC.

//! Land registry transaction workflow
//!
//! A transaction moves between desks of the registry office through a fixed
//! set of statuses. Each move is a task appended to its history. Which moves
//! are legal depends on the status, the transaction and document type of the
//! filing, and the roles of the person asking.
//!
//! - [`status`] and [`transition`] hold the status set and the transition table
//! - [`rules`] classifies filings against the registry catalog
//! - [`roles`] and [`authorization`] decide who may do what
//! - [`applicable`] builds the command menu for one or many transactions
//! - [`engine`] executes commands against a repository

pub mod aggregate;
pub mod applicable;
pub mod authorization;
pub mod commands;
pub mod engine;
pub mod events;
pub mod roles;
pub mod rules;
pub mod status;
pub mod task;
pub mod transition;

pub use aggregate::Transaction;
pub use applicable::{ApplicableCommand, CommandBuilder, NamedStatus};
pub use authorization::{ensure_executable, is_applicable};
pub use commands::{WorkflowCommand, WorkflowCommandPayload, WorkflowCommandType};
pub use engine::WorkflowEngine;
pub use events::{EventPublisher, InMemoryEventPublisher, NoopEventPublisher, WorkflowTaskRecorded};
pub use roles::{can_receive, InMemoryRoleDirectory, RoleMembership, WorkflowRole, ROLE_NAMESPACE};
pub use rules::{CatalogRules, RulesConfig, WorkflowRules};
pub use status::TransactionStatus;
pub use task::WorkflowTask;
pub use transition::{next_statuses, TransitionContext};
