// Copyright 2025 Cowboy AI, LLC.

//! Command authorization
//!
//! `is_applicable` answers whether a command is offered to a user for a
//! transaction right now. It never fails: a missing case is a `false`.
//! `ensure_executable` is the stricter guard the engine runs before mutating.

use super::aggregate::Transaction;
use super::commands::WorkflowCommandType;
use super::roles::{can_receive, RoleMembership, WorkflowRole};
use super::rules::WorkflowRules;
use super::status::TransactionStatus;
use crate::entity::AggregateRoot;
use crate::errors::{WorkflowError, WorkflowResult};
use crate::identifiers::ContactId;
use crate::state_machine::{MealyStateTransitions, State};

/// Is `command_type` presently applicable to `transaction` for `user`?
pub fn is_applicable(
    command_type: WorkflowCommandType,
    transaction: &Transaction,
    user: &ContactId,
    roles: &dyn RoleMembership,
) -> bool {
    use WorkflowCommandType as C;

    let task = transaction.current_task();
    let status = transaction.status();

    match command_type {
        C::PullToControlDesk | C::Unarchive => roles.has_role(user, WorkflowRole::ControlClerk),
        C::Reentry => roles.has_role(user, WorkflowRole::Supervisor),
        C::Sign | C::Unsign => roles.has_role(user, WorkflowRole::Signer),
        C::Receive => {
            if status.is_terminal() {
                false
            } else if task.is_responsible(user) && status != TransactionStatus::Reentry {
                false
            } else {
                can_receive(roles, user, transaction.pending_status())
            }
        }
        C::ReturnToMe => task.is_responsible(user) && !status.is_terminal(),
        C::SetNextStatus => true,
        C::Finish => {
            transaction.closing_status().is_some()
                && !transaction.is_finished()
                && roles.has_role(user, WorkflowRole::DeliveryClerk)
        }
        C::AssignTo => false,
    }
}

/// Reject a command the engine must not run against `transaction`
///
/// Role-gated commands need the role. Receive and ReturnToMe need to be
/// applicable. Reentry needs a returned or closed status. SetNextStatus
/// needs `next_status` to be in the transition table. Finish outside the
/// delivery desks passes, the engine skips it.
pub fn ensure_executable(
    command_type: WorkflowCommandType,
    next_status: TransactionStatus,
    transaction: &Transaction,
    user: &ContactId,
    roles: &dyn RoleMembership,
    rules: &dyn WorkflowRules,
) -> WorkflowResult<()> {
    if let Some(role) = command_type.required_role() {
        if !roles.has_role(user, role) {
            return Err(WorkflowError::AuthorizationError(format!(
                "{command_type} requires role {}",
                role.qualified_name()
            )));
        }
    }

    match command_type {
        WorkflowCommandType::Receive | WorkflowCommandType::ReturnToMe => {
            if !is_applicable(command_type, transaction, user, roles) {
                return Err(WorkflowError::rule(format!(
                    "{command_type} is not applicable to transaction {} at {}",
                    transaction.id(),
                    transaction.status()
                )));
            }
        }
        WorkflowCommandType::SetNextStatus => {
            let context = transaction.transition_context(rules);
            if !transaction.status().can_transition_to(&next_status, &context) {
                return Err(WorkflowError::InvalidStateTransition {
                    from: transaction.status().to_string(),
                    to: next_status.to_string(),
                });
            }
        }
        WorkflowCommandType::Reentry => {
            if !transaction.status().is_reenterable() {
                return Err(WorkflowError::rule(format!(
                    "transaction {} at {} is not returned or closed and cannot be reentered",
                    transaction.id(),
                    transaction.status()
                )));
            }
        }
        WorkflowCommandType::AssignTo
        | WorkflowCommandType::PullToControlDesk
        | WorkflowCommandType::Sign
        | WorkflowCommandType::Unsign
        | WorkflowCommandType::Finish
        | WorkflowCommandType::Unarchive => {}
    }
    Ok(())
}
