//! Core types for mockbase.
//!
//! This crate defines the three record shapes served by the mock backend
//! (todos, sales, KPIs), the field validators shared by their create and
//! update paths, and the error taxonomy every layer above maps onto.
//!
//! Nothing here touches I/O: records are plain data, validators are pure
//! functions, and errors are a closed enum.

pub mod error;
pub mod id;
pub mod records;
pub mod validate;

pub use error::{Error, Result};
pub use id::RecordId;
pub use records::{
    CreateKpi, CreateSale, CreateTodo, Kpi, KpiPatch, Record, Sale, SalePatch, Todo, TodoPatch,
};
