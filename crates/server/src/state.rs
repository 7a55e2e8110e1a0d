//! Shared application state: one store per resource.

use std::sync::Arc;

use mockbase_core::{Kpi, Sale, Todo};
use mockbase_store::{seed, RecordStore};

/// Process-wide state handed to every handler.
///
/// The stores are independent; no record references another. State lives for
/// the lifetime of the process and is rebuilt from seed data on restart.
pub struct AppState {
    pub todos: RecordStore<Todo>,
    pub sales: RecordStore<Sale>,
    pub kpis: RecordStore<Kpi>,
}

impl AppState {
    /// State pre-populated with the demo seed data.
    pub fn seeded() -> Arc<Self> {
        Arc::new(Self {
            todos: seed::todos(),
            sales: seed::sales(),
            kpis: seed::kpis(),
        })
    }

    /// Empty state, used by tests that need a clean slate.
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            todos: RecordStore::new(),
            sales: RecordStore::new(),
            kpis: RecordStore::new(),
        })
    }
}
