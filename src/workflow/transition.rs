// Copyright 2025 Cowboy AI, LLC.

//! Transition rule table
//!
//! Maps (current status, transaction type, document type) to the ordered list
//! of statuses a transaction may legally move to. The order is the order in
//! which callers present the options and must not change.

use super::rules::WorkflowRules;
use super::status::TransactionStatus;
use crate::identifiers::{DocumentType, TransactionType};
use crate::state_machine::{MealyStateTransitions, TransitionInput};

/// Everything the transition table knows about a transaction
///
/// The rule predicates are evaluated once, when the context is built, so the
/// table itself stays a pure function of plain values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionContext {
    /// Catalog type of the filing
    pub transaction_type: TransactionType,
    /// Catalog type of the instrument
    pub document_type: DocumentType,
    /// A certificate is being requested
    pub certificate_issue: bool,
    /// The instrument goes to the archive
    pub archivable: bool,
    /// The instrument is scanned
    pub digitalizable: bool,
    /// The instrument's acts are recorded into books
    pub recording_document: bool,
}

impl TransitionContext {
    /// Classify a transaction with the registry rules
    pub fn classify(
        transaction_type: TransactionType,
        document_type: DocumentType,
        rules: &dyn WorkflowRules,
    ) -> Self {
        Self {
            transaction_type,
            document_type,
            certificate_issue: rules.is_certificate_issue_case(transaction_type, document_type),
            archivable: rules.is_archivable(transaction_type, document_type),
            digitalizable: rules.is_digitalizable(transaction_type, document_type),
            recording_document: rules.is_recording_document_case(transaction_type, document_type),
        }
    }

    /// A context with every predicate false
    pub fn unclassified(transaction_type: TransactionType, document_type: DocumentType) -> Self {
        Self {
            transaction_type,
            document_type,
            certificate_issue: false,
            archivable: false,
            digitalizable: false,
            recording_document: false,
        }
    }
}

impl TransitionInput for TransitionContext {
    fn description(&self) -> String {
        format!(
            "transaction type {} / document type {}",
            self.transaction_type, self.document_type
        )
    }
}

/// Recording for book-recorded instruments, Elaboration for certificates,
/// both when the rules cannot tell
fn recording_or_elaboration(context: &TransitionContext) -> Vec<TransactionStatus> {
    if context.recording_document {
        vec![TransactionStatus::Recording]
    } else if context.certificate_issue {
        vec![TransactionStatus::Elaboration]
    } else {
        vec![TransactionStatus::Elaboration, TransactionStatus::Recording]
    }
}

fn is_preventive_notice(context: &TransitionContext) -> bool {
    context.transaction_type == TransactionType::PREVENTIVE_NOTICES
        || context.document_type == DocumentType::PREVENTIVE_NOTICE
}

impl MealyStateTransitions for TransactionStatus {
    type Input = TransitionContext;

    fn valid_transitions(&self, context: &TransitionContext) -> Vec<Self> {
        use TransactionStatus as S;

        let mut list = Vec::new();
        match self {
            S::Payment => {
                list.push(S::Received);
                list.push(S::Deleted);
            }
            S::Received | S::Reentry => {
                list.push(S::Control);
            }
            S::Control => {
                if context.certificate_issue || context.transaction_type == TransactionType::COPIES {
                    list.push(S::Elaboration);
                } else if context.recording_document {
                    list.push(S::Qualification);
                    list.push(S::Recording);
                } else {
                    list.push(S::Qualification);
                    list.push(S::Elaboration);
                    list.push(S::Recording);
                }
                if is_preventive_notice(context) {
                    list.push(S::Juridic);
                }
                list.push(S::Revision);
                list.push(S::OnSign);
                if context.digitalizable {
                    list.push(S::Digitalization);
                }
                list.push(S::ToReturn);
                list.push(S::ToDeliver);
                if context.archivable {
                    list.push(S::Archived);
                }
            }
            S::Qualification => {
                list.extend(recording_or_elaboration(context));
                list.push(S::Revision);
                list.push(S::Juridic);
                list.push(S::ToReturn);
                list.push(S::Control);
            }
            S::Recording | S::Elaboration => {
                list.push(S::Revision);
                list.push(S::OnSign);
                list.push(S::Juridic);
                list.push(S::Control);
            }
            S::Revision => {
                list.push(S::Control);
                list.extend(recording_or_elaboration(context));
                list.push(S::OnSign);
                list.push(S::Juridic);
                list.push(S::ToReturn);
            }
            S::OnSign => {
                // Copies leave the registry as issued, there is nothing to scan
                if context.digitalizable && context.transaction_type != TransactionType::COPIES {
                    list.push(S::Digitalization);
                }
                list.push(S::ToDeliver);
                list.push(S::Revision);
                list.push(S::Control);
            }
            S::Digitalization => {
                if context.archivable {
                    list.push(S::Archived);
                }
                list.push(S::ToDeliver);
                list.push(S::Control);
            }
            S::ToDeliver => {
                list.push(S::Control);
                list.extend(recording_or_elaboration(context));
                list.push(S::Juridic);
                list.push(S::OnSign);
            }
            S::ToReturn => {
                list.push(S::Control);
                list.push(S::Juridic);
            }
            // Juridic needs manual intervention outside the workflow
            S::Juridic => {}
            S::Process
            | S::Archived
            | S::Returned
            | S::Delivered
            | S::EndPoint
            | S::Deleted
            | S::Undefined
            | S::All => {}
        }
        list
    }
}

/// Ordered list of statuses reachable from `current_status`
pub fn next_statuses(
    current_status: TransactionStatus,
    transaction_type: TransactionType,
    document_type: DocumentType,
    rules: &dyn WorkflowRules,
) -> Vec<TransactionStatus> {
    current_status.valid_transitions(&TransitionContext::classify(
        transaction_type,
        document_type,
        rules,
    ))
}
