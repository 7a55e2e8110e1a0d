//! Error taxonomy shared by the store and the HTTP layer.
//!
//! Four variants cover everything the system can report:
//! - [`Error::Malformed`]: the request payload could not be parsed at all
//! - [`Error::Validation`]: a field was present but failed its check
//! - [`Error::NotFound`]: the referenced id does not exist in the store
//! - [`Error::Internal`]: any unexpected failure; never carries internals
//!   the caller should not see
//!
//! The split between `Malformed` and `Validation` is deliberate: both map to
//! 400 at the HTTP layer, but a validation failure always names the offending
//! field while a malformed payload cannot.

use thiserror::Error;

/// Result alias used throughout mockbase.
pub type Result<T> = std::result::Result<T, Error>;

/// All failures the mock backend can surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The incoming payload could not be parsed as the expected structure.
    #[error("{reason}")]
    Malformed {
        /// Human-readable parse failure description.
        reason: String,
    },

    /// A field was present but failed its type/format/range check.
    #[error("Invalid '{field}': {reason}")]
    Validation {
        /// Name of the offending field.
        field: &'static str,
        /// Exactly one failure reason.
        reason: String,
    },

    /// No record with the given id exists.
    #[error("No record with id '{id}'")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Unexpected failure. The message is safe to show to callers.
    #[error("Internal error: {reason}")]
    Internal {
        /// Generic description, no internal detail.
        reason: String,
    },
}

impl Error {
    /// Create a Malformed error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Error::Malformed {
            reason: reason.into(),
        }
    }

    /// Create a Validation error naming the offending field.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Error::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Create a NotFound error for an id.
    pub fn not_found(id: impl Into<String>) -> Self {
        Error::NotFound { id: id.into() }
    }

    /// Create an Internal error.
    pub fn internal(reason: impl Into<String>) -> Self {
        Error::Internal {
            reason: reason.into(),
        }
    }

    /// The field named by a validation error, if this is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
