// Copyright 2025 Cowboy AI, LLC.

//! Error types for workflow operations

use thiserror::Error;

/// Errors that can occur while validating or executing workflow commands
#[derive(Debug, Clone, Error)]
pub enum WorkflowError {
    /// Malformed command, rejected before any transaction is touched
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The acting user lacks the role a command requires
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// Business rule violation
    #[error("Business rule violation: {rule}")]
    BusinessRuleViolation {
        /// Description of the violated rule
        rule: String,
    },

    /// Invalid state transition
    #[error("Invalid state transition from {from} to {to}")]
    InvalidStateTransition {
        /// Current status
        from: String,
        /// Attempted target status
        to: String,
    },

    /// Transaction not found
    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    /// Concurrency conflict
    #[error("Concurrency conflict: expected version {expected}, but found {actual}")]
    ConcurrencyConflict {
        /// Expected version
        expected: u64,
        /// Actual version
        actual: u64,
    },

    /// Persistence collaborator failure
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Command type name that has no counterpart in the command vocabulary
    #[error("Unknown workflow command type: {0}")]
    UnknownCommandType(String),

    /// A batch stopped after some transactions were already committed
    #[error("Batch interrupted at transaction {transaction} after {processed} committed: {source}")]
    BatchInterrupted {
        /// Number of transactions already mutated and saved
        processed: usize,
        /// Transaction that failed
        transaction: String,
        /// The underlying failure
        source: Box<WorkflowError>,
    },
}

/// Result type for workflow operations
pub type WorkflowResult<T> = Result<T, WorkflowError>;

impl From<serde_json::Error> for WorkflowError {
    fn from(err: serde_json::Error) -> Self {
        WorkflowError::SerializationError(err.to_string())
    }
}

impl WorkflowError {
    /// Create a business rule violation
    pub fn rule(rule: impl Into<String>) -> Self {
        WorkflowError::BusinessRuleViolation { rule: rule.into() }
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, WorkflowError::TransactionNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            WorkflowError::ValidationError(_)
                | WorkflowError::BusinessRuleViolation { .. }
                | WorkflowError::InvalidStateTransition { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization_error(&self) -> bool {
        matches!(self, WorkflowError::AuthorizationError(_))
    }

    /// Check if this is a concurrency error
    pub fn is_concurrency_error(&self) -> bool {
        matches!(self, WorkflowError::ConcurrencyConflict { .. })
    }

    /// The innermost error, looking through batch wrappers
    pub fn root_cause(&self) -> &WorkflowError {
        match self {
            WorkflowError::BatchInterrupted { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
