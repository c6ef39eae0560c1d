// Copyright 2025 Cowboy AI, LLC.

//! Wire shapes for workflow data
//!
//! Statuses travel as their single-character codes and contacts as their
//! UUIDs. Field names are camelCase.

use crate::entity::AggregateRoot;
use crate::identifiers::ContactId;
use crate::workflow::{ApplicableCommand, NamedStatus, Transaction, TransactionStatus, WorkflowTask};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A uid/name pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NamedEntityDto {
    /// Identifier; a status code for statuses
    pub uid: String,
    /// Display name
    pub name: String,
}

impl From<&NamedStatus> for NamedEntityDto {
    fn from(status: &NamedStatus) -> Self {
        Self {
            uid: status.status.code().to_string(),
            name: status.name.to_string(),
        }
    }
}

impl From<TransactionStatus> for NamedEntityDto {
    fn from(status: TransactionStatus) -> Self {
        Self::from(&NamedStatus::from(status))
    }
}

impl From<ContactId> for NamedEntityDto {
    fn from(contact: ContactId) -> Self {
        Self {
            uid: contact.to_string(),
            name: String::new(),
        }
    }
}

/// A command offered to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicableCommandDto {
    /// Wire name of the command type
    #[serde(rename = "type")]
    pub command_type: String,
    /// Display name
    pub name: String,
    /// Candidate destinations
    pub next_status: Vec<NamedEntityDto>,
    /// Candidate assignees
    pub next_users: Vec<NamedEntityDto>,
}

impl From<&ApplicableCommand> for ApplicableCommandDto {
    fn from(command: &ApplicableCommand) -> Self {
        Self {
            command_type: command.command_type.name().to_string(),
            name: command.name.to_string(),
            next_status: command.next_states.iter().map(NamedEntityDto::from).collect(),
            next_users: command
                .next_users
                .iter()
                .copied()
                .map(NamedEntityDto::from)
                .collect(),
        }
    }
}

/// Map a command menu to its wire shape
pub fn map_applicable_commands(commands: &[ApplicableCommand]) -> Vec<ApplicableCommandDto> {
    commands.iter().map(ApplicableCommandDto::from).collect()
}

/// One entry of a transaction's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTaskDto {
    /// Task id
    pub uid: Uuid,
    /// Owning transaction
    pub transaction_uid: Uuid,
    /// Status code the task sits at
    pub current_status: String,
    /// Display name of that status
    pub current_status_name: String,
    /// Who holds the task
    pub responsible: Uuid,
    /// Proposed next status code, empty when nothing is proposed
    pub next_status: String,
    /// Display name of the proposed status
    pub next_status_name: String,
    /// Proposed receiver
    pub next_contact: Option<Uuid>,
    /// Free text
    pub note: String,
    /// When the task was recorded
    pub created_at: DateTime<Utc>,
}

impl WorkflowTaskDto {
    /// Map `task` of `transaction`
    pub fn new(transaction: &Transaction, task: &WorkflowTask) -> Self {
        let (next_status, next_status_name) = match task.next_status() {
            Some(status) => (status.code().to_string(), status.display_name().to_string()),
            None => (String::new(), String::new()),
        };

        Self {
            uid: *task.id().as_uuid(),
            transaction_uid: *transaction.id().as_uuid(),
            current_status: task.current_status().code().to_string(),
            current_status_name: task.current_status().display_name().to_string(),
            responsible: *task.responsible().as_uuid(),
            next_status,
            next_status_name,
            next_contact: task.next_responsible().map(|c| *c.as_uuid()),
            note: task.note().to_string(),
            created_at: task.created_at(),
        }
    }
}

/// Map the whole history of `transaction`, oldest first
pub fn map_history(transaction: &Transaction) -> Vec<WorkflowTaskDto> {
    transaction
        .history()
        .map(|task| WorkflowTaskDto::new(transaction, task))
        .collect()
}
