// Copyright 2025 Cowboy AI, LLC.

//! Workflow configuration

use crate::errors::{WorkflowError, WorkflowResult};
use crate::identifiers::ContactId;
use crate::workflow::RulesConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the execution engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Actor that receives delivered and returned transactions
    pub delivery_actor: ContactId,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            delivery_actor: ContactId::system(),
        }
    }
}

/// Complete workflow configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Engine settings
    pub engine: EngineConfig,
    /// Registry catalog lists behind the classification rules
    pub rules: RulesConfig,
}

impl WorkflowConfig {
    /// Parse a JSON document; missing sections keep their defaults
    pub fn from_json_str(json: &str) -> WorkflowResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| WorkflowError::ConfigurationError(format!("invalid workflow config: {e}")))
    }

    /// Read and parse a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> WorkflowResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            WorkflowError::ConfigurationError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }
}
