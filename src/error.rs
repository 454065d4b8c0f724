use thiserror::Error;

/// Raised by an admin operation when the object it must act on is absent.
///
/// Carries the name of the failing operation so the message reads the same
/// way the remote manager's SDK reports it:
/// `ntp_server_remove: NTP Server not found. Nothing to remove.`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{method}: {message}")]
pub struct OperationError {
    /// Operation that failed, e.g. `time_zone_set`
    pub method: &'static str,
    /// Human readable context
    pub message: String,
}

impl OperationError {
    /// Creates an error for `method` with the given context message.
    pub fn new(method: &'static str, message: impl Into<String>) -> Self {
        Self {
            method,
            message: message.into(),
        }
    }
}

/// Raised by the object model when a property cannot be read or written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// Naming properties are fixed once the object exists
    #[error("property '{name}' is read-only on {class_id}")]
    ReadOnly { class_id: &'static str, name: String },
    /// Value does not fit the property's type
    #[error("invalid value '{value}' for property '{name}' on {class_id}")]
    InvalidValue {
        class_id: &'static str,
        name: String,
        value: String,
    },
    /// Record handed to the wrong typed view
    #[error("record {dn} is of class {found}, expected {expected}")]
    ClassMismatch {
        dn: String,
        expected: &'static str,
        found: String,
    },
}
