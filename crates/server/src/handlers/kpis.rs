//! Handlers for `/kpis`. Mutations carry the id in the request body.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use mockbase_core::{CreateKpi, Kpi, KpiPatch, RecordId};

use crate::error::ApiError;
use crate::state::AppState;

use super::DeleteBody;

/// Body of `PATCH /kpis`: the target id plus any subset of KPI fields.
#[derive(Debug, Deserialize)]
pub struct UpdateKpiBody {
    pub id: RecordId,
    #[serde(flatten)]
    pub patch: KpiPatch,
}

/// `GET /kpis`
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "kpis": state.kpis.list() }))
}

/// `POST /kpis`
pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateKpi>, JsonRejection>,
) -> Result<(StatusCode, Json<Kpi>), ApiError> {
    let Json(draft) = payload?;
    let kpi = state.kpis.create(draft)?;
    Ok((StatusCode::CREATED, Json(kpi)))
}

/// `PATCH /kpis`
pub async fn update(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateKpiBody>, JsonRejection>,
) -> Result<Json<Kpi>, ApiError> {
    let Json(body) = payload?;
    let kpi = state.kpis.update(&body.id, body.patch)?;
    Ok(Json(kpi))
}

/// `DELETE /kpis`
pub async fn remove(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DeleteBody>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(body) = payload?;
    state.kpis.delete(&body.id)?;
    Ok(StatusCode::NO_CONTENT)
}
