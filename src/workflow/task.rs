// Copyright 2025 Cowboy AI, LLC.

//! Workflow tasks
//!
//! A task is one recorded step of a transaction's workflow. Tasks are values:
//! once created nothing changes them, a new step is a new task.

use super::status::TransactionStatus;
use crate::identifiers::{ContactId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One step in a transaction's workflow history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowTask {
    id: TaskId,
    current_status: TransactionStatus,
    responsible: ContactId,
    next_status: Option<TransactionStatus>,
    next_responsible: Option<ContactId>,
    note: String,
    created_at: DateTime<Utc>,
}

impl WorkflowTask {
    /// A task owned by `responsible` at `current_status`, with no proposal
    pub fn new(current_status: TransactionStatus, responsible: ContactId, note: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            current_status,
            responsible,
            next_status: None,
            next_responsible: None,
            note: note.into(),
            created_at: Utc::now(),
        }
    }

    /// Same task, proposing a next status and, optionally, who receives it
    pub fn proposing(mut self, next_status: TransactionStatus, next_responsible: Option<ContactId>) -> Self {
        self.next_status = Some(next_status);
        self.next_responsible = next_responsible;
        self
    }

    /// Task identity
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Status of the transaction when this task was created
    pub fn current_status(&self) -> TransactionStatus {
        self.current_status
    }

    /// Who owns the task
    pub fn responsible(&self) -> ContactId {
        self.responsible
    }

    /// Proposed status for the next transition
    pub fn next_status(&self) -> Option<TransactionStatus> {
        self.next_status
    }

    /// Proposed receiver of the next task
    pub fn next_responsible(&self) -> Option<ContactId> {
        self.next_responsible
    }

    /// Free text supplied by the acting user
    pub fn note(&self) -> &str {
        &self.note
    }

    /// When the task was recorded
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Is `user` the owner of this task?
    pub fn is_responsible(&self, user: &ContactId) -> bool {
        &self.responsible == user
    }
}
