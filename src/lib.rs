//! mockbase: an in-memory mock CRUD backend for demo dashboards.
//!
//! Serves three resources (todos, sales, KPIs) over HTTP, each backed by a
//! process-local seeded record store. Nothing is persisted; restarting the
//! process restores the seed data. See the member crates for the layers:
//!
//! - [`mockbase_core`]: record shapes, validation, error taxonomy
//! - [`mockbase_store`]: the generic keyed in-memory store and seed data
//! - [`mockbase_server`]: axum routes, error mapping, config

pub use mockbase_core::{
    CreateKpi, CreateSale, CreateTodo, Error, Kpi, KpiPatch, Record, RecordId, Result, Sale,
    SalePatch, Todo, TodoPatch,
};
pub use mockbase_server::{router, serve, AppState, Config};
pub use mockbase_store::{seed, RecordStore};
