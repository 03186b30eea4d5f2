//! Error types for the domain layer
//!
//! [`DomainError`] covers building an entity from a catalog document and
//! parsing domain vocabulary. [`EntryError`] is the per-slot marker that
//! stands in for an entity that could not be fetched or built.

use thiserror::Error;

use crate::ids::Identifier;
use crate::value_objects::EntityKind;

/// Text rendered in place of an entity that failed to fetch or construct.
pub const ERROR_PLACEHOLDER: &str = "An error occurred. Skipping this request.";

/// A slot in an ordered result sequence: the entity, or the marker for it.
pub type Resolved<T> = Result<T, EntryError>;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was absent from a catalog document
    #[error("{kind} document is missing required field `{field}`")]
    MissingField { kind: EntityKind, field: String },

    /// A catalog document had the wrong shape (wrong type, bad nesting, ...)
    #[error("{kind} document is malformed: {message}")]
    Malformed { kind: EntityKind, message: String },

    /// Parse error for domain vocabulary (modes, kinds)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create a missing field error
    pub fn missing_field(kind: EntityKind, field: impl Into<String>) -> Self {
        Self::MissingField {
            kind,
            field: field.into(),
        }
    }

    /// Create a malformed document error
    pub fn malformed(kind: EntityKind, message: impl Into<String>) -> Self {
        Self::Malformed {
            kind,
            message: message.into(),
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// Per-item failure marker.
///
/// Keeps the identifier that failed so a result sequence stays aligned with
/// the keys that produced it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// Transport failure, error status, or a body that was not JSON
    #[error("fetching {kind} '{key}' failed: {message}")]
    Fetch {
        kind: EntityKind,
        key: Identifier,
        message: String,
    },

    /// The catalog did not answer within the per-call timeout
    #[error("fetching {kind} '{key}' timed out after {after_secs}s")]
    Timeout {
        kind: EntityKind,
        key: Identifier,
        after_secs: u64,
    },

    /// The document arrived but could not be turned into an entity
    #[error("building {kind} '{key}' failed: {source}")]
    Construction {
        kind: EntityKind,
        key: Identifier,
        #[source]
        source: DomainError,
    },
}

impl EntryError {
    pub fn fetch(kind: EntityKind, key: Identifier, message: impl ToString) -> Self {
        Self::Fetch {
            kind,
            key,
            message: message.to_string(),
        }
    }

    pub fn timeout(kind: EntityKind, key: Identifier, after_secs: u64) -> Self {
        Self::Timeout {
            kind,
            key,
            after_secs,
        }
    }

    pub fn construction(kind: EntityKind, key: Identifier, source: DomainError) -> Self {
        Self::Construction { kind, key, source }
    }

    /// The identifier this marker stands in for.
    pub fn key(&self) -> &Identifier {
        match self {
            Self::Fetch { key, .. } | Self::Timeout { key, .. } | Self::Construction { key, .. } => {
                key
            }
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Fetch { kind, .. }
            | Self::Timeout { kind, .. }
            | Self::Construction { kind, .. } => *kind,
        }
    }

    /// Human-readable placeholder shown instead of the entity.
    pub fn placeholder(&self) -> &'static str {
        ERROR_PLACEHOLDER
    }
}
