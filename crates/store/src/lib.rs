//! In-memory record store for mockbase.
//!
//! One [`RecordStore`] per resource holds the process-wide current set of
//! records behind a keyed map. State is seeded at startup (see [`seed`]) and
//! discarded when the process exits; there is no persistence.

pub mod seed;
mod store;

pub use store::RecordStore;
