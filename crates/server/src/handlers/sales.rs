//! Handlers for `/sales`. Mutations carry the id in the request body.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use mockbase_core::{CreateSale, RecordId, Sale, SalePatch};

use crate::error::ApiError;
use crate::state::AppState;

use super::DeleteBody;

/// Body of `PATCH /sales`: the target id plus any subset of sale fields.
#[derive(Debug, Deserialize)]
pub struct UpdateSaleBody {
    pub id: RecordId,
    #[serde(flatten)]
    pub patch: SalePatch,
}

/// `GET /sales`
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "sales": state.sales.list() }))
}

/// `POST /sales`
pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateSale>, JsonRejection>,
) -> Result<(StatusCode, Json<Sale>), ApiError> {
    let Json(draft) = payload?;
    let sale = state.sales.create(draft)?;
    Ok((StatusCode::CREATED, Json(sale)))
}

/// `PATCH /sales`
pub async fn update(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateSaleBody>, JsonRejection>,
) -> Result<Json<Sale>, ApiError> {
    let Json(body) = payload?;
    let sale = state.sales.update(&body.id, body.patch)?;
    Ok(Json(sale))
}

/// `DELETE /sales`
pub async fn remove(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DeleteBody>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(body) = payload?;
    state.sales.delete(&body.id)?;
    Ok(StatusCode::NO_CONTENT)
}
