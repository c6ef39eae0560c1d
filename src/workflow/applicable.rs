// Copyright 2025 Cowboy AI, LLC.

//! Applicable commands
//!
//! Builds the commands a user is offered for one transaction, and merges
//! them across a multi-selection of transactions.

use super::aggregate::Transaction;
use super::authorization::is_applicable;
use super::commands::WorkflowCommandType;
use super::roles::RoleMembership;
use super::rules::WorkflowRules;
use super::status::TransactionStatus;
use crate::entity::AggregateRoot;
use crate::identifiers::ContactId;
use crate::state_machine::MealyStateTransitions;
use indexmap::IndexMap;
use tracing::debug;

/// A destination status with its display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedStatus {
    /// The status
    pub status: TransactionStatus,
    /// Its Spanish display name
    pub name: &'static str,
}

impl From<TransactionStatus> for NamedStatus {
    fn from(status: TransactionStatus) -> Self {
        Self {
            status,
            name: status.display_name(),
        }
    }
}

/// A command currently offered to a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicableCommand {
    /// The command
    pub command_type: WorkflowCommandType,
    /// Its Spanish display name
    pub name: &'static str,
    /// Candidate destinations
    pub next_states: Vec<NamedStatus>,
    /// Candidate assignees; no candidate resolution exists, always empty
    pub next_users: Vec<ContactId>,
}

/// Builds applicable commands against the registry rules and role directory
#[derive(Clone, Copy)]
pub struct CommandBuilder<'a> {
    roles: &'a dyn RoleMembership,
    rules: &'a dyn WorkflowRules,
}

impl<'a> CommandBuilder<'a> {
    /// Create a builder
    pub fn new(roles: &'a dyn RoleMembership, rules: &'a dyn WorkflowRules) -> Self {
        Self { roles, rules }
    }

    /// Describe `command_type` for `transaction`
    pub fn build(
        &self,
        command_type: WorkflowCommandType,
        transaction: &Transaction,
        user: &ContactId,
    ) -> ApplicableCommand {
        let next_states = if command_type.needs_next_states() {
            let context = transaction.transition_context(self.rules);
            transaction
                .status()
                .valid_transitions(&context)
                .into_iter()
                .map(NamedStatus::from)
                .collect()
        } else {
            Vec::new()
        };

        debug!(
            transaction = %transaction.id(),
            user = %user,
            command = %command_type,
            next_states = next_states.len(),
            "built applicable command"
        );

        ApplicableCommand {
            command_type,
            name: command_type.display_name(),
            next_states,
            next_users: Vec::new(),
        }
    }

    /// Commands applicable to one transaction, in offer order
    pub fn applicable_commands(&self, transaction: &Transaction, user: &ContactId) -> Vec<ApplicableCommand> {
        WorkflowCommandType::ALL
            .into_iter()
            .filter(|command_type| is_applicable(*command_type, transaction, user, self.roles))
            .map(|command_type| self.build(command_type, transaction, user))
            .collect()
    }

    /// Union of applicable commands over `transactions`, one per command type
    ///
    /// A command type seen again replaces the earlier entry and moves to the
    /// end, so the last transaction offering it decides its destinations.
    pub fn aggregate<'t, I>(&self, user: &ContactId, transactions: I) -> Vec<ApplicableCommand>
    where
        I: IntoIterator<Item = &'t Transaction>,
    {
        let mut merged: IndexMap<WorkflowCommandType, ApplicableCommand> = IndexMap::new();
        let mut count = 0usize;

        for transaction in transactions {
            count += 1;
            for command in self.applicable_commands(transaction, user) {
                merged.shift_remove(&command.command_type);
                merged.insert(command.command_type, command);
            }
        }

        debug!(
            user = %user,
            transactions = count,
            commands = merged.len(),
            "aggregated applicable commands"
        );

        merged.into_values().collect()
    }
}
