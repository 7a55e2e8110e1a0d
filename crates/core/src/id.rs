//! Record identifiers.
//!
//! Every record carries a `RecordId`, a string id that is unique within its
//! store for the lifetime of the process. Freshly generated ids are UUIDv4,
//! which is collision-resistant enough that two near-simultaneous creations
//! never draw the same id; the store additionally re-draws under its write
//! lock if a collision ever does occur. Seed data uses fixed literal ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a record within one store.
///
/// Wraps the wire representation (a plain JSON string) so ids are not mixed
/// up with other strings inside the codebase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh random id (UUIDv4).
    pub fn generate() -> Self {
        RecordId(Uuid::new_v4().to_string())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId(s.to_string())
    }
}
