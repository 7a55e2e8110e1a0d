//! Fixed seed data loaded at startup.
//!
//! Mirrors the sample arrays the demo site shipped with: two todos, ten
//! sales spread over several months, and three KPI cards. Ids are fixed
//! literals so the front end demos are reproducible across restarts.

use chrono::{Duration, NaiveDate, Utc};
use mockbase_core::{Kpi, RecordId, Sale, Todo};

use crate::RecordStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid")
}

/// Seeded todo store: one open item, one completed an hour ago.
pub fn todos() -> RecordStore<Todo> {
    let now = Utc::now();
    RecordStore::with_records([
        Todo {
            id: RecordId::from("t1"),
            title: "Welcome - try adding, updating or deleting".to_string(),
            completed: false,
            category: Some("general".to_string()),
            created_at: now,
        },
        Todo {
            id: RecordId::from("t2"),
            title: "This is a sample completed todo".to_string(),
            completed: true,
            category: Some("done".to_string()),
            created_at: now - Duration::hours(1),
        },
    ])
}

/// Seeded sales store: ten sales spread over the last several months.
pub fn sales() -> RecordStore<Sale> {
    let rows: [(&str, i32, u32, u32, i64); 10] = [
        ("a1d4f7b8-1111-4c3a-9a1f-000000000001", 2025, 9, 5, 125_000),
        ("a1d4f7b8-1111-4c3a-9a1f-000000000002", 2025, 9, 18, 89_000),
        ("b2c5e8d9-2222-4d3b-8b2f-000000000003", 2025, 10, 2, 430_000),
        ("b2c5e8d9-2222-4d3b-8b2f-000000000004", 2025, 10, 21, 76_000),
        ("c3e6f9a0-3333-4e3c-7c3f-000000000005", 2025, 11, 11, 210_000),
        ("c3e6f9a0-3333-4e3c-7c3f-000000000006", 2025, 12, 30, 98_000),
        ("d4f7a1b2-4444-4f3d-6d4f-000000000007", 2026, 1, 9, 305_000),
        ("d4f7a1b2-4444-4f3d-6d4f-000000000008", 2026, 1, 27, 120_000),
        ("e5a8b2c3-5555-413e-5e5f-000000000009", 2026, 2, 3, 145_000),
        ("e5a8b2c3-5555-413e-5e5f-00000000000a", 2026, 2, 20, 225_000),
    ];
    RecordStore::with_records(rows.into_iter().map(|(id, y, m, d, amount)| Sale {
        id: RecordId::from(id),
        date: date(y, m, d),
        amount,
    }))
}

/// Seeded KPI store: revenue, order count and average order value.
pub fn kpis() -> RecordStore<Kpi> {
    RecordStore::with_records([
        Kpi {
            id: RecordId::from("kpi-0001-1111-aaaa-0001"),
            title: "Total Revenue".to_string(),
            // cents => $25,430.00
            value: 2_543_000.0,
            trend: Some(6.4),
            meta: Some("vs last month".to_string()),
        },
        Kpi {
            id: RecordId::from("kpi-0002-2222-bbbb-0002"),
            title: "Orders".to_string(),
            value: 321.0,
            trend: Some(2.1),
            meta: Some("total orders".to_string()),
        },
        Kpi {
            id: RecordId::from("kpi-0003-3333-cccc-0003"),
            title: "Avg Order Value".to_string(),
            // cents => $79.25
            value: 7_925.0,
            trend: Some(-1.8),
            meta: Some("per order".to_string()),
        },
    ])
}
