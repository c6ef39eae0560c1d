// Copyright 2025 Cowboy AI, LLC.

//! Identifier types for transactions, contacts and registry catalogs

use crate::entity::{EntityId, TaskMarker, TransactionMarker};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Transaction (filing request) identity
pub type TransactionId = EntityId<TransactionMarker>;

/// Workflow task identity
pub type TaskId = EntityId<TaskMarker>;

/// Contact ID - identifies a person acting in the workflow
///
/// Contacts are owned by the identity collaborator; this crate only
/// carries their identity as responsible parties and acting users.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ContactId(Uuid);

impl ContactId {
    /// Create a new random contact ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from a UUID
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// The system actor, used when no person owns a task
    pub fn system() -> Self {
        Self(Uuid::nil())
    }

    /// Check if this is the system actor
    pub fn is_system(&self) -> bool {
        self.0.is_nil()
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ContactId> for Uuid {
    fn from(id: ContactId) -> Self {
        id.0
    }
}

/// Transaction type - catalog classification of a filing request
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct TransactionType(u32);

impl TransactionType {
    /// Inscripción de documentos
    pub const INSCRIPTION: Self = Self(699);
    /// Avisos preventivos
    pub const PREVENTIVE_NOTICES: Self = Self(700);
    /// Certificados
    pub const CERTIFICATES: Self = Self(702);
    /// Copias simples y certificadas
    pub const COPIES: Self = Self(705);
    /// Búsqueda y consulta en acervo
    pub const ARCHIVE_SEARCH: Self = Self(706);

    /// Create from a catalog id
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Catalog id
    pub const fn id(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Document type - catalog classification of the instrument being filed
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct DocumentType(u32);

impl DocumentType {
    /// Documento sin clasificar
    pub const EMPTY: Self = Self(0);
    /// Escritura pública
    pub const NOTARIAL_DEED: Self = Self(709);
    /// Resolución u orden judicial
    pub const COURT_ORDER: Self = Self(710);
    /// Certificado de propiedad
    pub const PROPERTY_CERTIFICATE: Self = Self(722);
    /// Certificado de no propiedad
    pub const NO_PROPERTY_CERTIFICATE: Self = Self(723);
    /// Certificado de libertad de gravamen
    pub const LIENS_CERTIFICATE: Self = Self(724);
    /// Aviso preventivo
    pub const PREVENTIVE_NOTICE: Self = Self(728);

    /// Create from a catalog id
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Catalog id
    pub const fn id(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_id_system() {
        let system = ContactId::system();
        assert!(system.is_system());
        assert_eq!(system, ContactId::system());
        assert!(!ContactId::new().is_system());
    }

    #[test]
    fn test_contact_id_display() {
        let uuid = Uuid::new_v4();
        let id = ContactId::from_uuid(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
        assert_eq!(Uuid::from(id), uuid);
    }

    #[test]
    fn test_catalog_codes_serialize_as_numbers() {
        let json = serde_json::to_string(&TransactionType::CERTIFICATES).unwrap();
        assert_eq!(json, "702");

        let doc: DocumentType = serde_json::from_str("728").unwrap();
        assert_eq!(doc, DocumentType::PREVENTIVE_NOTICE);
        assert_eq!(doc.id(), 728);
    }
}
