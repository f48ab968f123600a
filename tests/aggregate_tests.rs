//! Tests for emission aggregation
//!
//! These tests verify:
//! - Totals and flight equivalence for known selections
//! - New/refurbished pairing and savings
//! - JSON shape of the aggregate

use laptop_co2::aggregate::{two_decimals, Aggregate, FLIGHT_EQUIVALENT_KG};
use laptop_co2::catalog::Catalog;
use laptop_co2::selection::SelectionSet;

const EPSILON: f64 = 1e-9;

fn selection_of(ids: &[&str]) -> SelectionSet<'static> {
    let catalog = Catalog::builtin();
    let mut selection = SelectionSet::new();
    for id in ids {
        selection.select(catalog.get(id).expect("id in catalog"));
    }
    selection
}

#[test]
fn test_flight_divisor_is_fixed() {
    assert_eq!(FLIGHT_EQUIVALENT_KG, 90.0);
}

#[test]
fn test_thinkpad_t450_pair() {
    let selection = selection_of(&["4", "9"]);
    let aggregate = Aggregate::from_selection(&selection);

    assert_eq!(aggregate.pairings.len(), 1);
    let pair = &aggregate.pairings[0];
    assert_eq!(pair.new.id, "4");
    assert_eq!(pair.refurbished.id, "9");
    assert!((pair.saving - 365.60).abs() < EPSILON);

    assert!((aggregate.total_savings - 365.60).abs() < EPSILON);
    assert!((aggregate.total_co2 - 548.40).abs() < EPSILON);
    assert_eq!(two_decimals(aggregate.flights_equivalent), "6.09");
    assert_eq!(two_decimals(aggregate.savings_flights_equivalent), "4.06");
}

#[test]
fn test_macbook_air_m1_alone_has_no_pairs() {
    let selection = selection_of(&["6"]);
    let aggregate = Aggregate::from_selection(&selection);

    assert!(aggregate.pairings.is_empty());
    assert_eq!(aggregate.total_savings, 0.0);
    assert_eq!(aggregate.total_co2, 160.0);
    assert_eq!(two_decimals(aggregate.flights_equivalent), "1.78");
}

#[test]
fn test_zero_figures_are_positive_zero() {
    let aggregate = Aggregate::from_selection(&selection_of(&["6"]));
    assert!(!aggregate.total_savings.is_sign_negative());
    assert!(!aggregate.savings_flights_equivalent.is_sign_negative());
    assert_eq!(two_decimals(aggregate.savings_flights_equivalent), "0.00");

    let json = serde_json::to_string(&aggregate).unwrap();
    assert!(json.contains("\"totalSavings\":0.0"));
    assert!(!json.contains("-0.0"));

    let empty = Aggregate::from_selection(&SelectionSet::new());
    assert_eq!(two_decimals(empty.total_co2), "0.00");
    assert_eq!(two_decimals(empty.flights_equivalent), "0.00");
}

#[test]
fn test_unpaired_new_records_contribute_nothing_to_savings() {
    let selection = selection_of(&["1", "4", "7", "9"]);
    let aggregate = Aggregate::from_selection(&selection);

    assert_eq!(aggregate.pairings.len(), 1);
    assert!((aggregate.total_savings - 365.60).abs() < EPSILON);
    assert!((aggregate.total_co2 - (340.0 + 457.0 + 296.0 + 91.4)).abs() < EPSILON);
}

#[test]
fn test_total_is_order_independent() {
    let forward = Aggregate::from_selection(&selection_of(&["1", "2", "3", "10", "11"]));
    let backward = Aggregate::from_selection(&selection_of(&["11", "10", "3", "2", "1"]));
    assert!((forward.total_co2 - backward.total_co2).abs() < EPSILON);
}

#[test]
fn test_aggregate_json_shape() {
    let selection = selection_of(&["4", "9"]);
    let json = serde_json::to_value(Aggregate::from_selection(&selection)).unwrap();

    assert!(json.get("totalCo2").is_some());
    assert!(json.get("flightsEquivalent").is_some());
    assert!(json.get("savingsFlightsEquivalent").is_some());
    assert_eq!(json["pairings"][0]["new"]["id"], "4");
    assert_eq!(json["pairings"][0]["refurbished"]["isRefurbished"], true);
}
