// Copyright 2025 Cowboy AI, LLC.

//! Workflow commands
//!
//! Commands are requests from registry staff to move one or more
//! transactions. They are validated before any transaction is loaded.

use super::roles::WorkflowRole;
use super::status::TransactionStatus;
use crate::errors::{WorkflowError, WorkflowResult};
use crate::identifiers::{ContactId, TransactionId};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of workflow commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum WorkflowCommandType {
    /// Assign the transaction to a person
    AssignTo,
    /// Bring the transaction back to the control desk
    PullToControlDesk,
    /// Take a transaction sent to the user's desk
    Receive,
    /// File a returned or delivered transaction again
    Reentry,
    /// Take back a transaction the user still owns
    ReturnToMe,
    /// Send the transaction to its next status
    SetNextStatus,
    /// Sign the registry documents electronically
    Sign,
    /// Revoke the electronic signature
    Unsign,
    /// Deliver or return the transaction to the applicant
    Finish,
    /// Bring an archived transaction back to the control desk
    Unarchive,
}

impl WorkflowCommandType {
    /// Every command type, in the order commands are offered
    pub const ALL: [WorkflowCommandType; 10] = [
        WorkflowCommandType::AssignTo,
        WorkflowCommandType::PullToControlDesk,
        WorkflowCommandType::Receive,
        WorkflowCommandType::Reentry,
        WorkflowCommandType::ReturnToMe,
        WorkflowCommandType::SetNextStatus,
        WorkflowCommandType::Sign,
        WorkflowCommandType::Unsign,
        WorkflowCommandType::Finish,
        WorkflowCommandType::Unarchive,
    ];

    /// Wire name of the command type
    pub fn name(&self) -> &'static str {
        match self {
            Self::AssignTo => "AssignTo",
            Self::PullToControlDesk => "PullToControlDesk",
            Self::Receive => "Receive",
            Self::Reentry => "Reentry",
            Self::ReturnToMe => "ReturnToMe",
            Self::SetNextStatus => "SetNextStatus",
            Self::Sign => "Sign",
            Self::Unsign => "Unsign",
            Self::Finish => "Finish",
            Self::Unarchive => "Unarchive",
        }
    }

    /// Spanish label shown to registry staff
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AssignTo => "Asignar a",
            Self::Finish => "Entregar o devolver al interesado",
            Self::PullToControlDesk => "Traer a la mesa de control",
            Self::Receive => "Recibir en el siguiente estado",
            Self::Reentry => "Reingresar el trámite",
            Self::ReturnToMe => "Regresar a mi bandeja de trabajo",
            Self::SetNextStatus => "Mover al siguiente estado",
            Self::Sign => "Firmar electrónicamente",
            Self::Unarchive => "Desarchivar y moverlo a la mesa de control",
            Self::Unsign => "Cancelar firma electrónica",
        }
    }

    /// Role the acting user must hold, for role-gated commands
    pub fn required_role(&self) -> Option<WorkflowRole> {
        match self {
            Self::PullToControlDesk | Self::Unarchive => Some(WorkflowRole::ControlClerk),
            Self::Reentry => Some(WorkflowRole::Supervisor),
            Self::Sign | Self::Unsign => Some(WorkflowRole::Signer),
            Self::Finish => Some(WorkflowRole::DeliveryClerk),
            Self::AssignTo | Self::Receive | Self::ReturnToMe | Self::SetNextStatus => None,
        }
    }

    /// Does building this command list destination statuses?
    pub fn needs_next_states(&self) -> bool {
        matches!(self, Self::AssignTo | Self::Receive | Self::SetNextStatus)
    }
}

impl fmt::Display for WorkflowCommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorkflowCommandType {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command_type| command_type.name() == s)
            .ok_or_else(|| WorkflowError::UnknownCommandType(s.to_string()))
    }
}

/// Data carried by a workflow command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowCommandPayload {
    /// Target transactions, processed in this order
    #[serde(rename = "transactionUID")]
    pub transaction_uids: Vec<TransactionId>,
    /// Requested destination status
    pub next_status: TransactionStatus,
    /// Proposed receiver of the next task
    #[serde(default)]
    pub assign_to: Option<ContactId>,
    /// Free text from the acting user
    #[serde(default)]
    pub note: String,
    /// Search the command was issued from, if any
    #[serde(default, rename = "searchUID")]
    pub search_uid: Option<String>,
}

impl Default for WorkflowCommandPayload {
    fn default() -> Self {
        Self {
            transaction_uids: Vec::new(),
            next_status: TransactionStatus::Undefined,
            assign_to: None,
            note: String::new(),
            search_uid: None,
        }
    }
}

/// A request to move one or more transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowCommand {
    /// Which command to run
    #[serde(rename = "type")]
    pub command_type: WorkflowCommandType,
    /// Targets and arguments
    pub payload: WorkflowCommandPayload,
}

impl WorkflowCommand {
    /// Create a command over the given transactions
    pub fn new(
        command_type: WorkflowCommandType,
        transaction_uids: Vec<TransactionId>,
        next_status: TransactionStatus,
    ) -> Self {
        Self {
            command_type,
            payload: WorkflowCommandPayload {
                transaction_uids,
                next_status,
                ..Default::default()
            },
        }
    }

    /// Attach a proposed receiver
    pub fn assign_to(mut self, contact: ContactId) -> Self {
        self.payload.assign_to = Some(contact);
        self
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.payload.note = note.into();
        self
    }

    /// Reject malformed commands
    pub fn validate(&self) -> WorkflowResult<()> {
        if self.payload.next_status.is_sentinel() {
            return Err(WorkflowError::ValidationError(format!(
                "{} requires a concrete next status, got {}",
                self.command_type, self.payload.next_status
            )));
        }
        if self.payload.transaction_uids.is_empty() {
            return Err(WorkflowError::ValidationError(format!(
                "{} names no transactions",
                self.command_type
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_display_names_are_fixed() {
        assert_eq!(WorkflowCommandType::AssignTo.display_name(), "Asignar a");
        assert_eq!(
            WorkflowCommandType::Finish.display_name(),
            "Entregar o devolver al interesado"
        );
        assert_eq!(
            WorkflowCommandType::PullToControlDesk.display_name(),
            "Traer a la mesa de control"
        );
        assert_eq!(
            WorkflowCommandType::Receive.display_name(),
            "Recibir en el siguiente estado"
        );
        assert_eq!(WorkflowCommandType::Reentry.display_name(), "Reingresar el trámite");
        assert_eq!(
            WorkflowCommandType::ReturnToMe.display_name(),
            "Regresar a mi bandeja de trabajo"
        );
        assert_eq!(
            WorkflowCommandType::SetNextStatus.display_name(),
            "Mover al siguiente estado"
        );
        assert_eq!(WorkflowCommandType::Sign.display_name(), "Firmar electrónicamente");
        assert_eq!(
            WorkflowCommandType::Unarchive.display_name(),
            "Desarchivar y moverlo a la mesa de control"
        );
        assert_eq!(
            WorkflowCommandType::Unsign.display_name(),
            "Cancelar firma electrónica"
        );
    }

    #[test]
    fn test_parse_command_type() {
        for command_type in WorkflowCommandType::ALL {
            assert_eq!(command_type.name().parse::<WorkflowCommandType>().unwrap(), command_type);
        }
        let err = "Teleport".parse::<WorkflowCommandType>().unwrap_err();
        assert!(matches!(err, WorkflowError::UnknownCommandType(name) if name == "Teleport"));
    }

    #[test_case(WorkflowCommandType::PullToControlDesk, Some(WorkflowRole::ControlClerk))]
    #[test_case(WorkflowCommandType::Unarchive, Some(WorkflowRole::ControlClerk))]
    #[test_case(WorkflowCommandType::Reentry, Some(WorkflowRole::Supervisor))]
    #[test_case(WorkflowCommandType::Sign, Some(WorkflowRole::Signer))]
    #[test_case(WorkflowCommandType::Unsign, Some(WorkflowRole::Signer))]
    #[test_case(WorkflowCommandType::Finish, Some(WorkflowRole::DeliveryClerk))]
    #[test_case(WorkflowCommandType::Receive, None)]
    #[test_case(WorkflowCommandType::SetNextStatus, None)]
    fn test_required_roles(command_type: WorkflowCommandType, role: Option<WorkflowRole>) {
        assert_eq!(command_type.required_role(), role);
    }

    #[test_case(TransactionStatus::Undefined ; "undefined")]
    #[test_case(TransactionStatus::All ; "all")]
    fn test_validate_rejects_sentinel_next_status(next_status: TransactionStatus) {
        let command = WorkflowCommand::new(
            WorkflowCommandType::SetNextStatus,
            vec![TransactionId::new()],
            next_status,
        );
        assert!(command.validate().unwrap_err().is_validation_error());
    }

    #[test]
    fn test_validate_rejects_empty_targets() {
        let command =
            WorkflowCommand::new(WorkflowCommandType::Receive, vec![], TransactionStatus::Control);
        assert!(command.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_well_formed_command() {
        let command = WorkflowCommand::new(
            WorkflowCommandType::SetNextStatus,
            vec![TransactionId::new()],
            TransactionStatus::Recording,
        )
        .assign_to(ContactId::new())
        .with_note("turnar a registro");
        assert!(command.validate().is_ok());
    }

    #[test]
    fn test_command_wire_format() {
        let uid = TransactionId::new();
        let json = format!(
            r#"{{ "type": "SetNextStatus", "payload": {{ "transactionUID": ["{uid}"], "nextStatus": "OnSign", "note": "listo" }} }}"#
        );
        let command: WorkflowCommand = serde_json::from_str(&json).unwrap();

        assert_eq!(command.command_type, WorkflowCommandType::SetNextStatus);
        assert_eq!(command.payload.transaction_uids, vec![uid]);
        assert_eq!(command.payload.next_status, TransactionStatus::OnSign);
        assert_eq!(command.payload.assign_to, None);
        assert_eq!(command.payload.note, "listo");
    }
}
