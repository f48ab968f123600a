//! Property-Based Tests for the laptop CO2 calculator
//!
//! These tests verify:
//! - Search is total and returns a catalog-ordered subset
//! - Search is case-insensitive
//! - Selections never hold duplicates, whatever the input sequence
//! - Removal is idempotent
//! - Aggregate totals and savings invariants

use laptop_co2::aggregate::{Aggregate, FLIGHT_EQUIVALENT_KG};
use laptop_co2::catalog::Catalog;
use laptop_co2::query::search;
use laptop_co2::selection::SelectionSet;
use proptest::prelude::*;
use std::collections::HashSet;

/// Strategy for ids present in the built-in catalog
fn catalog_id_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(Catalog::builtin().iter().map(|r| r.id).collect::<Vec<_>>())
}

/// Arbitrary select/remove operations: `true` selects, `false` removes
fn operations_strategy() -> impl Strategy<Value = Vec<(bool, &'static str)>> {
    prop::collection::vec((any::<bool>(), catalog_id_strategy()), 0..40)
}

fn apply(operations: &[(bool, &'static str)]) -> SelectionSet<'static> {
    let catalog = Catalog::builtin();
    let mut selection = SelectionSet::new();
    for (select, id) in operations {
        if *select {
            selection.select(catalog.get(id).expect("strategy yields catalog ids"));
        } else {
            selection.remove(id);
        }
    }
    selection
}

// =============================================================================
// Search Properties
// =============================================================================

proptest! {
    /// Any term yields a catalog-ordered subset of the catalog
    #[test]
    fn search_is_ordered_subset(term in ".{0,12}") {
        let catalog = Catalog::builtin();
        let results = search(&term, &catalog);

        let mut position = 0;
        for found in &results {
            let offset = catalog.records()[position..]
                .iter()
                .position(|r| r.id == found.id);
            prop_assert!(offset.is_some(), "result out of catalog order");
            position += offset.unwrap_or(0) + 1;
        }
    }

    /// Every result contains the term in model or manufacturer
    #[test]
    fn search_results_match_term(term in "[a-zA-Z0-9 ]{1,6}") {
        let catalog = Catalog::builtin();
        let needle = term.to_lowercase();
        for record in search(&term, &catalog) {
            prop_assert!(
                record.model.to_lowercase().contains(&needle)
                    || record.manufacturer.to_lowercase().contains(&needle)
            );
        }
    }

    /// Letter case of the term never changes the results
    #[test]
    fn search_is_case_insensitive(term in "[a-zA-Z0-9 ]{0,8}") {
        let catalog = Catalog::builtin();
        let lower = search(&term.to_lowercase(), &catalog);
        let upper = search(&term.to_uppercase(), &catalog);
        prop_assert_eq!(lower, upper);
    }
}

// =============================================================================
// Selection Properties
// =============================================================================

proptest! {
    /// No id appears twice, whatever sequence of operations ran
    #[test]
    fn selection_has_no_duplicates(operations in operations_strategy()) {
        let selection = apply(&operations);
        let ids = selection.ids();
        let unique: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len());
    }

    /// Removing the same id twice equals removing it once
    #[test]
    fn remove_is_idempotent(
        operations in operations_strategy(),
        id in catalog_id_strategy(),
    ) {
        let mut once = apply(&operations);
        once.remove(id);
        let mut twice = once.clone();
        twice.remove(id);
        prop_assert_eq!(&once, &twice);
        prop_assert!(!once.contains(id));
    }
}

// =============================================================================
// Aggregate Properties
// =============================================================================

proptest! {
    /// Total is the plain sum and flights divide it by the fixed factor
    #[test]
    fn aggregate_total_is_sum(operations in operations_strategy()) {
        let selection = apply(&operations);
        let aggregate = Aggregate::from_selection(&selection);

        let sum: f64 = selection.iter().map(|r| r.co2).sum();
        prop_assert!((aggregate.total_co2 - sum).abs() < 1e-6);
        prop_assert!(
            (aggregate.flights_equivalent - aggregate.total_co2 / FLIGHT_EQUIVALENT_KG).abs() < 1e-9
        );
    }

    /// Savings are the sum over pairings and each pairing is a real variant pair
    #[test]
    fn aggregate_pairings_are_variants(operations in operations_strategy()) {
        let selection = apply(&operations);
        let aggregate = Aggregate::from_selection(&selection);

        let mut savings = 0.0;
        for pairing in &aggregate.pairings {
            prop_assert!(!pairing.new.is_refurbished);
            prop_assert!(pairing.refurbished.is_refurbished);
            prop_assert!(pairing.new.same_model_as(pairing.refurbished));
            prop_assert!(selection.contains(pairing.new.id));
            prop_assert!(selection.contains(pairing.refurbished.id));
            savings += pairing.saving;
        }
        prop_assert!((aggregate.total_savings - savings).abs() < 1e-6);
    }
}
