// Copyright 2025 Cowboy AI, LLC.

//! Transaction statuses
//!
//! Every filing request sits in exactly one of these statuses. The
//! single-character codes are the persistence encoding used by stored
//! registry data.

use crate::errors::{WorkflowError, WorkflowResult};
use crate::state_machine::State;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a registry transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TransactionStatus {
    /// Awaiting fee payment
    Payment,
    /// Filed at the reception desk
    Received,
    /// Filed again after a return or delivery
    Reentry,
    /// At the control desk, waiting for distribution
    Control,
    /// Generic in-process status used by older records
    Process,
    /// Legal qualification of the instrument
    Qualification,
    /// Recording acts into registry books
    Recording,
    /// Elaboration of certificates and other issued documents
    Elaboration,
    /// Supervisor revision
    Revision,
    /// Waiting for the registrar's signature
    OnSign,
    /// Scanning and safekeeping of the instrument
    Digitalization,
    /// Ready at the delivery desk
    ToDeliver,
    /// Sent to the archive
    Archived,
    /// Ready at the returns desk
    ToReturn,
    /// Returned to the applicant without recording
    Returned,
    /// Held by the legal department
    Juridic,
    /// Delivered to the applicant
    Delivered,
    /// Workflow finished
    EndPoint,
    /// Cancelled before payment
    Deleted,
    /// No status given
    Undefined,
    /// Query wildcard matching every status
    All,
}

impl TransactionStatus {
    /// Every status, sentinels included, in declaration order
    pub const VARIANTS: [TransactionStatus; 21] = [
        TransactionStatus::Payment,
        TransactionStatus::Received,
        TransactionStatus::Reentry,
        TransactionStatus::Control,
        TransactionStatus::Process,
        TransactionStatus::Qualification,
        TransactionStatus::Recording,
        TransactionStatus::Elaboration,
        TransactionStatus::Revision,
        TransactionStatus::OnSign,
        TransactionStatus::Digitalization,
        TransactionStatus::ToDeliver,
        TransactionStatus::Archived,
        TransactionStatus::ToReturn,
        TransactionStatus::Returned,
        TransactionStatus::Juridic,
        TransactionStatus::Delivered,
        TransactionStatus::EndPoint,
        TransactionStatus::Deleted,
        TransactionStatus::Undefined,
        TransactionStatus::All,
    ];

    /// Single-character persistence code
    pub fn code(&self) -> char {
        match self {
            Self::Payment => 'Y',
            Self::Received => 'R',
            Self::Reentry => 'N',
            Self::Control => 'K',
            Self::Process => 'P',
            Self::Qualification => 'F',
            Self::Recording => 'G',
            Self::Elaboration => 'E',
            Self::Revision => 'V',
            Self::OnSign => 'S',
            Self::Digitalization => 'I',
            Self::ToDeliver => 'D',
            Self::Archived => 'H',
            Self::ToReturn => 'T',
            Self::Returned => 'X',
            Self::Juridic => 'J',
            Self::Delivered => 'C',
            Self::EndPoint => 'Z',
            Self::Deleted => 'L',
            Self::Undefined => 'U',
            Self::All => '@',
        }
    }

    /// Parse a persistence code
    pub fn from_code(code: char) -> WorkflowResult<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|status| status.code() == code)
            .ok_or_else(|| {
                WorkflowError::SerializationError(format!("unknown transaction status code '{code}'"))
            })
    }

    /// Spanish display name shown to registry staff
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Payment => "Precalificación",
            Self::Received => "Trámite recibido",
            Self::Reentry => "Reingreso",
            Self::Control => "Mesa de control",
            Self::Process => "En proceso",
            Self::Qualification => "Calificación",
            Self::Recording => "Registro en libros",
            Self::Elaboration => "Elaboración",
            Self::Revision => "Revisión",
            Self::OnSign => "En firma",
            Self::Digitalization => "Digitalización y resguardo",
            Self::ToDeliver => "Ventanilla de entregas",
            Self::Archived => "Archivado",
            Self::ToReturn => "Ventanilla de devoluciones",
            Self::Returned => "Devuelto al interesado",
            Self::Juridic => "Área jurídica",
            Self::Delivered => "Entregado al interesado",
            Self::EndPoint => "Finalizado",
            Self::Deleted => "Trámite eliminado",
            Self::Undefined => "No determinado",
            Self::All => "Todos",
        }
    }

    /// Undefined and All are query/placeholder values, never real statuses
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::Undefined | Self::All)
    }

    /// Returned or closed statuses a transaction may be reentered from
    pub fn is_reenterable(&self) -> bool {
        matches!(
            self,
            Self::Returned | Self::Delivered | Self::ToReturn | Self::ToDeliver | Self::Archived
        )
    }
}

impl State for TransactionStatus {
    fn name(&self) -> &'static str {
        match self {
            Self::Payment => "Payment",
            Self::Received => "Received",
            Self::Reentry => "Reentry",
            Self::Control => "Control",
            Self::Process => "Process",
            Self::Qualification => "Qualification",
            Self::Recording => "Recording",
            Self::Elaboration => "Elaboration",
            Self::Revision => "Revision",
            Self::OnSign => "OnSign",
            Self::Digitalization => "Digitalization",
            Self::ToDeliver => "ToDeliver",
            Self::Archived => "Archived",
            Self::ToReturn => "ToReturn",
            Self::Returned => "Returned",
            Self::Juridic => "Juridic",
            Self::Delivered => "Delivered",
            Self::EndPoint => "EndPoint",
            Self::Deleted => "Deleted",
            Self::Undefined => "Undefined",
            Self::All => "All",
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Self::EndPoint | Self::Deleted)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
