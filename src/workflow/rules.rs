// Copyright 2025 Cowboy AI, LLC.

//! Registry classification rules consumed by the transition table
//!
//! Whether a filing is a certificate request, whether its instrument gets
//! recorded into books, scanned or archived: these are catalog facts owned
//! by the registry's rules lookup. The transition table only asks.

use crate::identifiers::{DocumentType, TransactionType};
use serde::{Deserialize, Serialize};

/// Classification predicates over (transaction type, document type)
pub trait WorkflowRules: Send + Sync {
    /// The filing asks the registry to issue a certificate
    fn is_certificate_issue_case(&self, transaction_type: TransactionType, document_type: DocumentType) -> bool;

    /// The finished instrument goes to the archive
    fn is_archivable(&self, transaction_type: TransactionType, document_type: DocumentType) -> bool;

    /// The instrument is scanned before leaving the registry
    fn is_digitalizable(&self, transaction_type: TransactionType, document_type: DocumentType) -> bool;

    /// The instrument's acts are recorded into registry books
    fn is_recording_document_case(&self, transaction_type: TransactionType, document_type: DocumentType) -> bool;
}

/// Catalog id lists behind [`CatalogRules`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Transaction types that always issue a certificate
    pub certificate_issue_transaction_types: Vec<u32>,
    /// Document types that are certificate forms
    pub certificate_issue_document_types: Vec<u32>,
    /// Transaction types whose instruments are recorded into books
    pub recording_document_transaction_types: Vec<u32>,
    /// Transaction types whose instruments are archived
    pub archivable_transaction_types: Vec<u32>,
    /// Document types that are scanned
    pub digitalizable_document_types: Vec<u32>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            certificate_issue_transaction_types: vec![TransactionType::CERTIFICATES.id()],
            certificate_issue_document_types: vec![
                DocumentType::PROPERTY_CERTIFICATE.id(),
                DocumentType::NO_PROPERTY_CERTIFICATE.id(),
                DocumentType::LIENS_CERTIFICATE.id(),
            ],
            recording_document_transaction_types: vec![
                TransactionType::INSCRIPTION.id(),
                TransactionType::PREVENTIVE_NOTICES.id(),
            ],
            archivable_transaction_types: vec![
                TransactionType::INSCRIPTION.id(),
                TransactionType::ARCHIVE_SEARCH.id(),
            ],
            digitalizable_document_types: vec![
                DocumentType::NOTARIAL_DEED.id(),
                DocumentType::COURT_ORDER.id(),
                DocumentType::PREVENTIVE_NOTICE.id(),
            ],
        }
    }
}

/// Rules backed by catalog id lists
#[derive(Debug, Clone, Default)]
pub struct CatalogRules {
    config: RulesConfig,
}

impl CatalogRules {
    /// Create rules from catalog lists
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// The catalog lists in use
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }
}

impl WorkflowRules for CatalogRules {
    fn is_certificate_issue_case(&self, transaction_type: TransactionType, document_type: DocumentType) -> bool {
        self.config
            .certificate_issue_transaction_types
            .contains(&transaction_type.id())
            || self
                .config
                .certificate_issue_document_types
                .contains(&document_type.id())
    }

    fn is_archivable(&self, transaction_type: TransactionType, _document_type: DocumentType) -> bool {
        self.config
            .archivable_transaction_types
            .contains(&transaction_type.id())
    }

    fn is_digitalizable(&self, _transaction_type: TransactionType, document_type: DocumentType) -> bool {
        self.config
            .digitalizable_document_types
            .contains(&document_type.id())
    }

    fn is_recording_document_case(&self, transaction_type: TransactionType, document_type: DocumentType) -> bool {
        // A certificate form filed under an inscription is still a certificate
        !self
            .config
            .certificate_issue_document_types
            .contains(&document_type.id())
            && self
                .config
                .recording_document_transaction_types
                .contains(&transaction_type.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_certificate_cases() {
        let rules = CatalogRules::default();
        assert!(rules.is_certificate_issue_case(TransactionType::CERTIFICATES, DocumentType::EMPTY));
        assert!(rules.is_certificate_issue_case(
            TransactionType::INSCRIPTION,
            DocumentType::LIENS_CERTIFICATE
        ));
        assert!(!rules.is_certificate_issue_case(
            TransactionType::INSCRIPTION,
            DocumentType::NOTARIAL_DEED
        ));
    }

    #[test]
    fn test_recording_case_excludes_certificate_forms() {
        let rules = CatalogRules::default();
        assert!(rules.is_recording_document_case(
            TransactionType::INSCRIPTION,
            DocumentType::NOTARIAL_DEED
        ));
        assert!(!rules.is_recording_document_case(
            TransactionType::INSCRIPTION,
            DocumentType::PROPERTY_CERTIFICATE
        ));
        assert!(!rules.is_recording_document_case(TransactionType::COPIES, DocumentType::NOTARIAL_DEED));
    }

    #[test]
    fn test_archivable_and_digitalizable() {
        let rules = CatalogRules::default();
        assert!(rules.is_archivable(TransactionType::INSCRIPTION, DocumentType::EMPTY));
        assert!(!rules.is_archivable(TransactionType::CERTIFICATES, DocumentType::EMPTY));
        assert!(rules.is_digitalizable(TransactionType::COPIES, DocumentType::COURT_ORDER));
        assert!(!rules.is_digitalizable(TransactionType::INSCRIPTION, DocumentType::EMPTY));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: RulesConfig =
            serde_json::from_str(r#"{ "archivable_transaction_types": [900] }"#).unwrap();
        assert_eq!(config.archivable_transaction_types, vec![900]);
        assert_eq!(
            config.certificate_issue_transaction_types,
            RulesConfig::default().certificate_issue_transaction_types
        );

        let rules = CatalogRules::new(config);
        assert!(rules.is_archivable(TransactionType::new(900), DocumentType::EMPTY));
        assert!(!rules.is_archivable(TransactionType::INSCRIPTION, DocumentType::EMPTY));
    }
}
