//! End-to-end CRUD scenarios through the public facade.
//!
//! These exercise the store invariants the HTTP layer relies on: id
//! uniqueness, partial-update semantics, no resurrection after delete, and
//! validation atomicity.

use std::collections::HashSet;

use mockbase::{
    seed, AppState, CreateKpi, CreateSale, CreateTodo, Error, KpiPatch, Record, RecordId,
    SalePatch, TodoPatch,
};

#[test]
fn created_ids_never_collide_with_existing_records() {
    let sales = seed::sales();
    let existing: HashSet<String> = sales
        .list()
        .iter()
        .map(|s| s.id().as_str().to_string())
        .collect();

    for i in 0..50 {
        let sale = sales
            .create(CreateSale {
                date: "2026-03-01".to_string(),
                amount: i,
            })
            .unwrap();
        assert!(!existing.contains(sale.id().as_str()));
    }
    assert_eq!(sales.len(), 60);
}

#[test]
fn create_then_get_returns_equal_record() {
    let state = AppState::empty();

    let todo = state
        .todos
        .create(CreateTodo {
            title: "round trip".to_string(),
            category: Some("general".to_string()),
        })
        .unwrap();
    assert_eq!(state.todos.get(todo.id()).unwrap(), todo);

    let kpi = state
        .kpis
        .create(CreateKpi {
            title: "Total Revenue".to_string(),
            value: 2_543_000.0,
            trend: Some(6.4),
            meta: Some("vs last month".to_string()),
        })
        .unwrap();
    assert_eq!(state.kpis.get(kpi.id()).unwrap(), kpi);
}

#[test]
fn partial_updates_do_not_touch_absent_fields() {
    let state = AppState::seeded();

    let before = state.sales.get(&RecordId::from("a1d4f7b8-1111-4c3a-9a1f-000000000001")).unwrap();
    let after = state
        .sales
        .update(
            before.id(),
            SalePatch {
                amount: Some(1),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(after.date, before.date);
    assert_eq!(after.amount, 1);

    let before = state.todos.get(&RecordId::from("t1")).unwrap();
    let after = state
        .todos
        .update(
            before.id(),
            TodoPatch {
                completed: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(after.title, before.title);
    assert_eq!(after.category, before.category);
    assert_eq!(after.created_at, before.created_at);
}

#[test]
fn delete_is_final() {
    let state = AppState::seeded();
    let id = RecordId::from("kpi-0001-1111-aaaa-0001");

    state.kpis.delete(&id).unwrap();
    assert!(matches!(
        state.kpis.get(&id).unwrap_err(),
        Error::NotFound { .. }
    ));
    assert!(matches!(
        state.kpis.update(&id, KpiPatch::default()).unwrap_err(),
        Error::NotFound { .. }
    ));
    assert_eq!(state.kpis.len(), 2);
}

#[test]
fn failed_validation_leaves_stores_untouched() {
    let state = AppState::seeded();

    assert!(state
        .sales
        .create(CreateSale {
            date: "2025-02-30".to_string(),
            amount: 100,
        })
        .is_err());
    assert!(state
        .todos
        .create(CreateTodo {
            title: "  ".to_string(),
            category: None,
        })
        .is_err());
    assert!(state
        .kpis
        .create(CreateKpi {
            title: "Bounce Rate".to_string(),
            value: f64::NAN,
            trend: None,
            meta: None,
        })
        .is_err());

    assert_eq!(state.sales.len(), 10);
    assert_eq!(state.todos.len(), 2);
    assert_eq!(state.kpis.len(), 3);
}

#[test]
fn ids_from_one_store_mean_nothing_to_another() {
    let a = AppState::empty();
    let b = AppState::empty();

    let sale = a
        .sales
        .create(CreateSale {
            date: "2025-09-05".to_string(),
            amount: 125_000,
        })
        .unwrap();

    assert!(matches!(
        b.sales.delete(sale.id()).unwrap_err(),
        Error::NotFound { .. }
    ));
    assert_eq!(a.sales.len(), 1);
}
