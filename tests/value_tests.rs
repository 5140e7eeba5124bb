//! Behaviour tests for value decisions.
//!
//! Producers count their calls so every test can check that exactly the
//! expected producer ran.

#![cfg(feature = "value")]

use conditional::prelude::*;
use rstest::rstest;
use std::cell::Cell;

const TRUE: &str = "true";
const FALSE: &str = "false";

fn producer<'a>(counter: &'a Cell<u32>, value: &'static str) -> impl FnOnce() -> &'static str + 'a {
    move || {
        counter.set(counter.get() + 1);
        value
    }
}

fn counting(counter: &Cell<u32>, result: bool) -> impl FnOnce() -> bool + '_ {
    move || {
        counter.set(counter.get() + 1);
        result
    }
}

// =============================================================================
// Two-stage builder
// =============================================================================

#[rstest]
#[case(true, TRUE)]
#[case(false, FALSE)]
fn then_otherwise_selects_value(#[case] clause: bool, #[case] expected: &str) {
    let result = value::when(clause).then(|| TRUE).otherwise(|| FALSE);
    assert_eq!(result, expected);
}

#[rstest]
#[case(true, 1, 0)]
#[case(false, 0, 1)]
fn exactly_one_producer_runs(
    #[case] clause: bool,
    #[case] true_calls: u32,
    #[case] false_calls: u32,
) {
    let true_counter = Cell::new(0);
    let false_counter = Cell::new(0);

    let _ = value::when(clause)
        .then(producer(&true_counter, TRUE))
        .otherwise(producer(&false_counter, FALSE));

    assert_eq!(true_counter.get(), true_calls);
    assert_eq!(false_counter.get(), false_calls);
}

#[rstest]
fn then_alone_invokes_nothing() {
    let counter = Cell::new(0);

    let supplier = value::when(true).then(producer(&counter, TRUE));

    assert!(supplier.is_true());
    assert_eq!(counter.get(), 0);
    drop(supplier);
    assert_eq!(counter.get(), 0);
}

#[rstest]
fn optional_on_true_contains_value() {
    let counter = Cell::new(0);

    let result = value::when(true).then(producer(&counter, "x")).optional();

    assert_eq!(result, Some("x"));
    assert_eq!(counter.get(), 1);
}

#[rstest]
fn optional_on_false_is_empty_and_skips_producer() {
    let counter = Cell::new(0);

    let result = value::when(false).then(producer(&counter, "x")).optional();

    assert_eq!(result, None);
    assert_eq!(counter.get(), 0);
}

#[rstest]
fn values_may_be_owned_types() {
    let names = vec!["ada".to_string(), "grace".to_string()];

    let first = value::when(!names.is_empty())
        .then(|| names[0].clone())
        .otherwise(String::new);

    assert_eq!(first, "ada");
}

// =============================================================================
// Factories from conditions
// =============================================================================

#[cfg(feature = "condition")]
#[rstest]
#[case(Condition::TRUE, TRUE)]
#[case(Condition::FALSE, FALSE)]
fn when_accepts_condition(#[case] condition: Condition, #[case] expected: &str) {
    let result = value::when(condition).then(|| TRUE).otherwise(|| FALSE);
    assert_eq!(result, expected);
}

#[cfg(feature = "condition")]
#[rstest]
fn value_clause_from_condition() {
    let clause: ValueClause<i32> = Condition::when(true).and(false).into();
    assert!(clause.is_false());
}

#[rstest]
#[case(true, FALSE)]
#[case(false, TRUE)]
fn when_not_inverts_clause(#[case] clause: bool, #[case] expected: &str) {
    let result = value::when_not(clause).then(|| TRUE).otherwise(|| FALSE);
    assert_eq!(result, expected);
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
#[case(true, true, TRUE)]
#[case(true, false, FALSE)]
#[case(false, true, FALSE)]
#[case(false, false, FALSE)]
fn and_combines_clauses(#[case] first: bool, #[case] second: bool, #[case] expected: &str) {
    let result = value::when(first)
        .and(move || second)
        .then(|| TRUE)
        .otherwise(|| FALSE);
    assert_eq!(result, expected);
}

#[rstest]
#[case(true, true, TRUE)]
#[case(true, false, TRUE)]
#[case(false, true, TRUE)]
#[case(false, false, FALSE)]
fn or_combines_clauses(#[case] first: bool, #[case] second: bool, #[case] expected: &str) {
    let result = value::when(first)
        .or(move || second)
        .then(|| TRUE)
        .otherwise(|| FALSE);
    assert_eq!(result, expected);
}

#[rstest]
#[case(true, true, FALSE)]
#[case(true, false, TRUE)]
#[case(false, true, FALSE)]
#[case(false, false, FALSE)]
fn and_not_combines_clauses(#[case] first: bool, #[case] second: bool, #[case] expected: &str) {
    let result = value::when(first)
        .and_not(move || second)
        .then(|| TRUE)
        .otherwise(|| FALSE);
    assert_eq!(result, expected);
}

#[rstest]
#[case(true, true, TRUE)]
#[case(true, false, TRUE)]
#[case(false, true, FALSE)]
#[case(false, false, TRUE)]
fn or_not_combines_clauses(#[case] first: bool, #[case] second: bool, #[case] expected: &str) {
    let result = value::when(first)
        .or_not(move || second)
        .then(|| TRUE)
        .otherwise(|| FALSE);
    assert_eq!(result, expected);
}

#[rstest]
#[case(true, FALSE)]
#[case(false, TRUE)]
fn not_inverts_clause(#[case] clause: bool, #[case] expected: &str) {
    let result = value::when(clause).not().then(|| TRUE).otherwise(|| FALSE);
    assert_eq!(result, expected);
}

#[rstest]
fn value_clause_short_circuits() {
    let counter = Cell::new(0);

    let anded = value::when::<&str>(false).and(counting(&counter, true));
    let ored = value::when::<&str>(true).or(counting(&counter, false));

    assert!(anded.is_false());
    assert!(ored.is_true());
    assert_eq!(counter.get(), 0);
}

// =============================================================================
// Static conveniences
// =============================================================================

#[rstest]
#[case(true, TRUE)]
#[case(false, FALSE)]
fn select_matches_builder(#[case] clause: bool, #[case] expected: &str) {
    assert_eq!(value::select(clause, || TRUE, || FALSE), expected);
    assert_eq!(
        value::select(clause, || TRUE, || FALSE),
        value::when(clause).then(|| TRUE).otherwise(|| FALSE)
    );
}

#[rstest]
fn optional_convenience_skips_producer_when_false() {
    let counter = Cell::new(0);

    assert_eq!(value::optional(false, producer(&counter, TRUE)), None);
    assert_eq!(value::optional(true, producer(&counter, TRUE)), Some(TRUE));
    assert_eq!(counter.get(), 1);
}

#[cfg(feature = "condition")]
#[rstest]
fn select_accepts_condition() {
    let condition = Condition::when(2 > 1).and_not(|| 1 > 2);
    assert_eq!(value::select(condition, || 10, || 20), 10);
    assert_eq!(value::optional(condition.not(), || 10), None);
}
