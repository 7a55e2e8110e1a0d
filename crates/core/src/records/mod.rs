//! The three record shapes served by the mock backend.
//!
//! Each resource module defines its record struct, the create body
//! (`Create*`) and the partial-update body (`*Patch`), and implements
//! [`Record`] so the generic store can drive validation without knowing the
//! concrete shape.

mod kpi;
mod sale;
mod todo;

pub use kpi::{CreateKpi, Kpi, KpiPatch};
pub use sale::{CreateSale, Sale, SalePatch};
pub use todo::{CreateTodo, Todo, TodoPatch};

use crate::error::Result;
use crate::id::RecordId;

/// A record shape the store can hold.
///
/// `build` and `apply` own all validation for their resource: both check
/// every supplied field before assigning anything, so a failure never
/// produces a half-constructed or half-patched record. The store updates a
/// clone and only writes it back on success, so even a partially assigning
/// `apply` could not corrupt stored state.
pub trait Record: Clone + Send + Sync + 'static {
    /// Body of a create request for this resource.
    type Draft: Send;
    /// Body of a partial-update request. Absent fields leave the record
    /// untouched.
    type Patch: Send;

    /// Resource name used in routes and list envelopes ("todos", "sales", ...).
    const RESOURCE: &'static str;

    /// The record's immutable id.
    fn id(&self) -> &RecordId;

    /// Validate a draft and construct the record under the given id.
    fn build(id: RecordId, draft: Self::Draft) -> Result<Self>;

    /// Validate the present fields of a patch and apply them.
    fn apply(&mut self, patch: Self::Patch) -> Result<()>;
}

/// Deserialize helper distinguishing an absent field from an explicit null.
///
/// Used with `#[serde(default, deserialize_with = "double_option")]`:
/// absent => `None`, `null` => `Some(None)`, value => `Some(Some(v))`.
/// Needed for nullable fields (todo category, KPI meta) whose patches must
/// tell "leave alone" apart from "clear".
pub(crate) fn double_option<'de, T, D>(
    deserializer: D,
) -> std::result::Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}
