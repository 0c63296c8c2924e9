//! Error types for change detection

use thiserror::Error;

use crate::schema::FieldName;

/// Main error type for snapwatch operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    /// Detection requested before the first snapshot was recorded
    #[error("Uninitialized state: detect_changes called before initialize")]
    UninitializedState,

    /// The observed object's field set drifted from the snapshot's
    #[error("Schema mismatch: missing fields {missing:?}, unexpected fields {unexpected:?}")]
    SchemaMismatch {
        /// Tracked fields the object no longer exposes
        missing: Vec<FieldName>,
        /// Fields the object exposes that were never tracked
        unexpected: Vec<FieldName>,
    },

    /// A binding named a field that is not tracked
    #[error("Unknown field: {0}")]
    UnknownField(FieldName),

    /// A binding named no fields, so it could never fire
    #[error("Empty binding: at least one field is required")]
    EmptyBinding,
}

impl DetectError {
    /// Schema mismatch for fields that went missing.
    pub fn missing(missing: Vec<FieldName>) -> Self {
        DetectError::SchemaMismatch {
            missing,
            unexpected: Vec::new(),
        }
    }
}

/// Result type alias for snapwatch operations
pub type Result<T> = std::result::Result<T, DetectError>;
