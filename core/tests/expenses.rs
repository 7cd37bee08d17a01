//! Expense logging: damage, refunds and the daily limit.

use std::collections::HashSet;

use stashdash_core::{
    clock::IdClock,
    config::GameConfig,
    event::GameEvent,
    expense::Category,
    slot::MemorySlot,
    state::Phase,
    GameError, GameStateStore,
};

fn build_store() -> GameStateStore<MemorySlot> {
    let _ = env_logger::builder().is_test(true).try_init();
    GameStateStore::load_with_clock(MemorySlot::new(), GameConfig::default(), IdClock::sequential(1))
        .expect("fresh store")
}

#[test]
fn need_expense_deals_its_amount() {
    let mut store = build_store();

    let outcome = store.add_expense("Groceries", "12", Category::Need).unwrap();

    assert_eq!(outcome.state.health, 88.0);
    assert_eq!(outcome.state.expenses.len(), 1);
    assert_eq!(outcome.state.expenses[0].name, "Groceries");
    assert_eq!(
        outcome.events,
        vec![GameEvent::Damage { amount: 12, damage: 12.0, category: Category::Need }]
    );
}

#[test]
fn want_expense_deals_one_and_a_half_times() {
    let mut store = build_store();

    let outcome = store.add_expense("Concert", "10", Category::Want).unwrap();

    assert_eq!(outcome.state.health, 85.0);
    assert_eq!(
        outcome.events,
        vec![GameEvent::Damage { amount: 15, damage: 15.0, category: Category::Want }]
    );
}

#[test]
fn damage_event_carries_rounded_amount() {
    let mut store = build_store();

    let outcome = store.add_expense("Coffee", "3.3", Category::Want).unwrap();

    assert!((outcome.state.health - 95.05).abs() < 1e-9);
    match outcome.events.as_slice() {
        [GameEvent::Damage { amount, damage, category }] => {
            assert_eq!(*amount, 5);
            assert!((damage - 4.95).abs() < 1e-9, "raw damage {damage}");
            assert_eq!(*category, Category::Want);
        }
        other => panic!("expected one damage event, got {other:?}"),
    }
}

#[test]
fn expenses_keep_insertion_order_and_unique_ids() {
    let mut store = build_store();

    store.add_expense("a", "1", Category::Need).unwrap();
    store.add_expense("b", "2", Category::Want).unwrap();
    store.add_expense("c", "3", Category::Need).unwrap();

    let names: Vec<_> = store.state().expenses.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);

    let ids: HashSet<_> = store.state().expenses.iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), 3, "ids must be unique");
    assert_eq!(store.total_spent(), 6.0);
}

#[test]
fn invalid_amount_leaves_state_untouched() {
    let mut store = build_store();
    let before = store.state().clone();

    for input in ["", "ten", "0", "-5", "NaN"] {
        let err = store.add_expense("x", input, Category::Need).unwrap_err();
        assert!(matches!(err, GameError::InvalidInput { .. }), "{input:?} gave {err:?}");
    }

    assert_eq!(store.state(), &before);
    assert_eq!(store.slot().write_count(), 0, "refusals never persist");
}

#[test]
fn limit_refuses_spending_past_fifty() {
    let mut store = build_store();
    store.add_expense("Rent share", "45", Category::Need).unwrap();
    let before = store.state().clone();
    let writes = store.slot().write_count();

    let err = store.add_expense("Snack", "5.01", Category::Need).unwrap_err();

    match &err {
        GameError::LimitExceeded { spent, amount, limit } => {
            assert_eq!(*spent, 45.0);
            assert_eq!(*amount, 5.01);
            assert_eq!(*limit, 50.0);
        }
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
    assert!(matches!(err.signal(), Some(GameEvent::SpendBlocked { .. })));
    assert_eq!(store.state(), &before, "no damage, no record");
    assert_eq!(store.slot().write_count(), writes);
}

#[test]
fn spending_exactly_up_to_the_limit_is_allowed() {
    let mut store = build_store();

    store.add_expense("a", "30", Category::Need).unwrap();
    store.add_expense("b", "20", Category::Need).unwrap();

    assert_eq!(store.total_spent(), 50.0);
    assert_eq!(store.remaining_allowance(), 0.0);
}

#[test]
fn limit_counts_amount_not_damage() {
    let mut store = build_store();

    // 40 want = 60 damage, but only 40 towards the limit.
    store.add_expense("Gadget", "40", Category::Want).unwrap();
    store.add_expense("Lunch", "10", Category::Need).unwrap();

    assert_eq!(store.state().health, 30.0);
}

#[test]
fn health_clamps_at_zero_and_defeat_is_signalled_once() {
    let mut store = build_store();

    let first = store.add_expense("Splurge", "45", Category::Want).unwrap();
    assert_eq!(first.state.health, 32.5);

    let config = GameConfig { daily_limit: 500.0, ..GameConfig::default() };
    let mut store =
        GameStateStore::load_with_clock(store.into_slot(), config, IdClock::sequential(100)).unwrap();

    let lethal = store.add_expense("Splurge 2", "40", Category::Want).unwrap();
    assert_eq!(lethal.state.health, 0.0);
    assert_eq!(store.phase(), Phase::Defeated);
    assert!(lethal.events.contains(&GameEvent::Defeated));

    // No lockout: further spending still records, health stays at zero.
    let after = store.add_expense("More", "1", Category::Need).unwrap();
    assert_eq!(after.state.health, 0.0);
    assert_eq!(after.state.expenses.len(), 3);
    assert!(!after.events.contains(&GameEvent::Defeated));
}

#[test]
fn delete_refunds_exact_health_cost() {
    let mut store = build_store();
    store.add_expense("Movie", "12", Category::Want).unwrap();
    let id = store.state().expenses[0].id;

    let outcome = store.delete_expense(id).unwrap();

    assert_eq!(outcome.state.health, 100.0);
    assert!(outcome.state.expenses.is_empty());
    assert_eq!(outcome.events, vec![GameEvent::Heal { amount: 18 }]);
}

#[test]
fn delete_then_re_add_restores_health() {
    let mut store = build_store();
    store.add_expense("Bus", "2.75", Category::Need).unwrap();
    store.add_expense("Treat", "7.4", Category::Want).unwrap();
    let before = store.state().health;
    let treat = store.state().expenses[1].clone();

    store.delete_expense(treat.id).unwrap();
    store.add_expense(&treat.name, &treat.amount.to_string(), treat.category).unwrap();

    assert!(
        (store.state().health - before).abs() < 1e-9,
        "health {} should return to {before}",
        store.state().health
    );
}

#[test]
fn delete_refund_clamps_at_max_health() {
    // Health was topped up by a potion after the expense was logged.
    let saved = r#"{"health":95,"currency":0,"expenses":[{"id":1,"name":"Game","amount":10,"category":"want"}]}"#;
    let slot = MemorySlot::with_entry("stashDashData", saved);
    let mut store = GameStateStore::load(slot, GameConfig::default()).unwrap();

    let outcome = store.delete_expense(1).unwrap();

    assert_eq!(outcome.state.health, 100.0);
    assert_eq!(outcome.events, vec![GameEvent::Heal { amount: 15 }]);
}

#[test]
fn delete_unknown_id_is_a_persisted_no_op() {
    let mut store = build_store();
    store.add_expense("Tea", "2", Category::Need).unwrap();
    let before = store.state().clone();
    let writes = store.slot().write_count();

    let outcome = store.delete_expense(999_999).unwrap();

    assert_eq!(outcome.state, before);
    assert!(outcome.events.is_empty());
    assert_eq!(store.slot().write_count(), writes + 1);
}

#[test]
fn deleting_frees_allowance() {
    let mut store = build_store();
    store.add_expense("Big", "40", Category::Need).unwrap();
    let id = store.state().expenses[0].id;
    assert!(store.add_expense("Other", "20", Category::Need).is_err());

    store.delete_expense(id).unwrap();

    store.add_expense("Other", "20", Category::Need).unwrap();
    assert_eq!(store.total_spent(), 20.0);
}

#[test]
fn exhausted_id_space_errors_instead_of_panicking() {
    let saved = format!(
        r#"{{"health":100,"currency":0,"expenses":[{{"id":{},"name":"Edge","amount":1,"category":"need"}}]}}"#,
        u64::MAX
    );
    let slot = MemorySlot::with_entry("stashDashData", &saved);
    let mut store = GameStateStore::load(slot, GameConfig::default()).unwrap();
    let before = store.state().clone();

    let err = store.add_expense("Next", "1", Category::Need).unwrap_err();

    assert!(!err.is_user_facing(), "got {err:?}");
    assert_eq!(store.state(), &before);
}
