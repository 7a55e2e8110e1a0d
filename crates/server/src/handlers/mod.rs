//! Per-resource request handlers.
//!
//! Each handler is a thin validate-locate-mutate wrapper over the store:
//! the stores own all validation and the error type owns the status
//! mapping, so handlers only shape requests and responses.

pub mod kpis;
pub mod sales;
pub mod todos;

use mockbase_core::RecordId;
use serde::Deserialize;

/// Body of a delete request for resources that carry the id in the body.
#[derive(Debug, Deserialize)]
pub struct DeleteBody {
    pub id: RecordId,
}
