// Copyright 2025 Cowboy AI, LLC.

//! Workflow events
//!
//! Every task the engine appends is announced once, after the transaction
//! holding it has been saved.

use super::commands::WorkflowCommandType;
use super::status::TransactionStatus;
use super::task::WorkflowTask;
use crate::errors::{WorkflowError, WorkflowResult};
use crate::identifiers::{ContactId, TransactionId};
use std::sync::{Arc, RwLock};

/// A task was appended to a transaction's history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowTaskRecorded {
    /// The transaction that moved
    pub transaction_id: TransactionId,
    /// Command that produced the task
    pub command_type: WorkflowCommandType,
    /// Status before the command
    pub previous_status: TransactionStatus,
    /// Who ran the command
    pub acting_user: ContactId,
    /// The appended task
    pub task: WorkflowTask,
}

impl WorkflowTaskRecorded {
    /// Event type name
    pub fn event_type(&self) -> &'static str {
        "WorkflowTaskRecorded"
    }
}

/// Sink for workflow events
pub trait EventPublisher: Send + Sync {
    /// Publish one event
    fn publish(&self, event: WorkflowTaskRecorded) -> WorkflowResult<()>;
}

/// Publisher that keeps events in memory
#[derive(Clone, Default)]
pub struct InMemoryEventPublisher {
    published: Arc<RwLock<Vec<WorkflowTaskRecorded>>>,
}

impl InMemoryEventPublisher {
    /// Create an empty publisher
    pub fn new() -> Self {
        Self::default()
    }

    /// Events published so far, oldest first
    pub fn published(&self) -> Vec<WorkflowTaskRecorded> {
        self.published
            .read()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl EventPublisher for InMemoryEventPublisher {
    fn publish(&self, event: WorkflowTaskRecorded) -> WorkflowResult<()> {
        let mut published = self
            .published
            .write()
            .map_err(|e| WorkflowError::RepositoryError(format!("event log poisoned: {e}")))?;
        published.push(event);
        Ok(())
    }
}

/// Publisher that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventPublisher;

impl EventPublisher for NoopEventPublisher {
    fn publish(&self, _event: WorkflowTaskRecorded) -> WorkflowResult<()> {
        Ok(())
    }
}
