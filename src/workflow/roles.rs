// Copyright 2025 Cowboy AI, LLC.

//! Workflow roles and role membership
//!
//! Role membership belongs to the identity collaborator. The core only asks
//! one question of it: does this contact hold this role?

use super::status::TransactionStatus;
use crate::identifiers::ContactId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::RwLock;

/// Prefix of every role name in the identity collaborator
pub const ROLE_NAMESPACE: &str = "Land";

/// Capability grouping that governs command authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum WorkflowRole {
    /// Reception desk staff
    Receptionist,
    /// Control desk staff, distributes work
    ControlClerk,
    /// Qualifies, records and elaborates
    Registrar,
    /// Revises work before signing
    Supervisor,
    /// Signs registry documents electronically
    Signer,
    /// Legal department
    LegalAdvisor,
    /// Scanning and archive staff
    DigitalizationClerk,
    /// Delivery and returns desk staff
    DeliveryClerk,
}

impl WorkflowRole {
    /// Short role name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Receptionist => "Receptionist",
            Self::ControlClerk => "ControlClerk",
            Self::Registrar => "Registrar",
            Self::Supervisor => "Supervisor",
            Self::Signer => "Signer",
            Self::LegalAdvisor => "LegalAdvisor",
            Self::DigitalizationClerk => "DigitalizationClerk",
            Self::DeliveryClerk => "DeliveryClerk",
        }
    }

    /// Name under which the identity collaborator stores the role, e.g. `Land.Signer`
    pub fn qualified_name(&self) -> String {
        format!("{ROLE_NAMESPACE}.{}", self.name())
    }

    /// Parse a qualified role name
    pub fn from_qualified_name(name: &str) -> Option<Self> {
        let short = name.strip_prefix(ROLE_NAMESPACE)?.strip_prefix('.')?;
        [
            Self::Receptionist,
            Self::ControlClerk,
            Self::Registrar,
            Self::Supervisor,
            Self::Signer,
            Self::LegalAdvisor,
            Self::DigitalizationClerk,
            Self::DeliveryClerk,
        ]
        .into_iter()
        .find(|role| role.name() == short)
    }

    /// Role that receives transactions sent to `next_status`
    pub fn receiving_role(next_status: TransactionStatus) -> Option<Self> {
        use TransactionStatus as S;
        match next_status {
            S::Received => Some(Self::Receptionist),
            S::Control => Some(Self::ControlClerk),
            S::Qualification | S::Recording | S::Elaboration => Some(Self::Registrar),
            S::Revision => Some(Self::Supervisor),
            S::OnSign => Some(Self::Signer),
            S::Juridic => Some(Self::LegalAdvisor),
            S::Digitalization | S::Archived => Some(Self::DigitalizationClerk),
            S::ToDeliver | S::ToReturn => Some(Self::DeliveryClerk),
            S::Payment
            | S::Reentry
            | S::Process
            | S::Returned
            | S::Delivered
            | S::EndPoint
            | S::Deleted
            | S::Undefined
            | S::All => None,
        }
    }
}

impl fmt::Display for WorkflowRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Role membership query supplied by the identity collaborator
pub trait RoleMembership: Send + Sync {
    /// Does `user` hold `role`?
    fn has_role(&self, user: &ContactId, role: WorkflowRole) -> bool;
}

/// Can `user` receive transactions whose proposed next status is `next_status`?
pub fn can_receive(
    roles: &dyn RoleMembership,
    user: &ContactId,
    next_status: Option<TransactionStatus>,
) -> bool {
    next_status
        .and_then(WorkflowRole::receiving_role)
        .is_some_and(|role| roles.has_role(user, role))
}

/// In-memory role directory keyed by qualified role names
#[derive(Debug, Default)]
pub struct InMemoryRoleDirectory {
    memberships: RwLock<HashMap<ContactId, HashSet<String>>>,
}

impl InMemoryRoleDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant a role to a contact
    pub fn grant(&self, user: ContactId, role: WorkflowRole) {
        if let Ok(mut memberships) = self.memberships.write() {
            memberships
                .entry(user)
                .or_default()
                .insert(role.qualified_name());
        }
    }

    /// Revoke a role from a contact
    pub fn revoke(&self, user: &ContactId, role: WorkflowRole) {
        if let Ok(mut memberships) = self.memberships.write() {
            if let Some(roles) = memberships.get_mut(user) {
                roles.remove(&role.qualified_name());
            }
        }
    }

    /// Builder-style grant
    pub fn with_role(self, user: ContactId, role: WorkflowRole) -> Self {
        self.grant(user, role);
        self
    }
}

impl RoleMembership for InMemoryRoleDirectory {
    fn has_role(&self, user: &ContactId, role: WorkflowRole) -> bool {
        // A poisoned lock denies; authorization fails closed
        self.memberships
            .read()
            .map(|memberships| {
                memberships
                    .get(user)
                    .is_some_and(|roles| roles.contains(&role.qualified_name()))
            })
            .unwrap_or(false)
    }
}
