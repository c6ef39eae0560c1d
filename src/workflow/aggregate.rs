// Copyright 2025 Cowboy AI, LLC.

//! Transaction aggregate
//!
//! A transaction (filing request) owns its workflow history. The history
//! always holds at least the initial task and only ever grows; the current
//! task is the last one and the current status follows it.

use super::rules::WorkflowRules;
use super::status::TransactionStatus;
use super::task::WorkflowTask;
use super::transition::TransitionContext;
use crate::entity::AggregateRoot;
use crate::identifiers::{DocumentType, TransactionId, TransactionType};
use serde::{Deserialize, Serialize};

/// A filing request moving through the clerical workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    transaction_type: TransactionType,
    document_type: DocumentType,
    status: TransactionStatus,
    initial_task: WorkflowTask,
    later_tasks: Vec<WorkflowTask>,
    version: u64,
}

impl Transaction {
    /// Create a transaction whose history starts with `initial_task`
    pub fn new(
        id: TransactionId,
        transaction_type: TransactionType,
        document_type: DocumentType,
        initial_task: WorkflowTask,
    ) -> Self {
        Self {
            id,
            transaction_type,
            document_type,
            status: initial_task.current_status(),
            initial_task,
            later_tasks: Vec::new(),
            version: 0,
        }
    }

    /// Catalog type of the filing
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// Catalog type of the instrument
    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    /// Current workflow status
    pub fn status(&self) -> TransactionStatus {
        self.status
    }

    /// The task the transaction is at now
    pub fn current_task(&self) -> &WorkflowTask {
        self.later_tasks.last().unwrap_or(&self.initial_task)
    }

    /// Status the next Receive takes the transaction to
    ///
    /// The current task's proposal, or the control desk for freshly
    /// received and reentered transactions.
    pub fn pending_status(&self) -> Option<TransactionStatus> {
        self.current_task().next_status().or(match self.status {
            TransactionStatus::Received | TransactionStatus::Reentry => {
                Some(TransactionStatus::Control)
            }
            _ => None,
        })
    }

    /// Status Finish hands the transaction over as, from the delivery desks
    pub fn closing_status(&self) -> Option<TransactionStatus> {
        match self.status {
            TransactionStatus::ToDeliver => Some(TransactionStatus::Delivered),
            TransactionStatus::ToReturn => Some(TransactionStatus::Returned),
            _ => None,
        }
    }

    /// Finish already ran: the current task proposes the closing status
    pub fn is_finished(&self) -> bool {
        self.closing_status().is_some() && self.current_task().next_status() == self.closing_status()
    }

    /// All tasks, oldest first
    pub fn history(&self) -> impl Iterator<Item = &WorkflowTask> {
        std::iter::once(&self.initial_task).chain(self.later_tasks.iter())
    }

    /// Number of recorded tasks, the initial one included
    pub fn history_len(&self) -> usize {
        1 + self.later_tasks.len()
    }

    /// Classify this transaction for the transition table
    pub fn transition_context(&self, rules: &dyn WorkflowRules) -> TransitionContext {
        TransitionContext::classify(self.transaction_type, self.document_type, rules)
    }

    /// Append a task and move the status pointer to it
    pub(crate) fn record_task(&mut self, task: WorkflowTask) {
        self.status = task.current_status();
        self.later_tasks.push(task);
        self.increment_version();
    }
}

impl AggregateRoot for Transaction {
    type Id = TransactionId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn increment_version(&mut self) {
        self.version += 1;
    }
}
