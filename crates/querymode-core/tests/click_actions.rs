use querymode_core::mode::classify::classify;
use querymode_core::mode::click::{ClickContext, ClickRule};

mod common;
use crate::common::load_fixture;

// Rudimentary coverage of the click-context filter; per-action drill
// behavior lives with each action's consumer.

#[test]
fn cell_click_keeps_the_full_timeseries_menu() {
    let classification = classify(&load_fixture("orders_count_by_day.json")).expect("classify");
    let clicked = classification.actions_for_click(&ClickContext::cell());

    let names: Vec<_> = clicked.iter().map(|a| a.name).collect();
    assert_eq!(names, vec!["pivot-by-category", "pivot-by-location", "underlying-data"]);
}

#[test]
fn header_click_drops_cell_only_pivots() {
    let classification = classify(&load_fixture("orders_count_by_day.json")).expect("classify");
    let clicked = classification.actions_for_click(&ClickContext::header());

    let names: Vec<_> = clicked.iter().map(|a| a.name).collect();
    assert_eq!(names, vec!["underlying-data"]);
}

#[test]
fn header_rule_matches_header_clicks_only() {
    // Reserved for column-scoped actions; the predicate itself still holds.
    assert!(ClickRule::Header.applies_to(&ClickContext::header()));
    assert!(!ClickRule::Header.applies_to(&ClickContext::cell()));
}

#[test]
fn click_filtering_is_stable() {
    let classification = classify(&load_fixture("orders_raw.json")).expect("classify");
    let a = classification.actions_for_click(&ClickContext::cell());
    let b = classification.actions_for_click(&ClickContext::cell());
    assert_eq!(a, b);
    assert_eq!(a.len(), classification.actions().len());
}
