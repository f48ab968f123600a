//! Emission figures derived from a selection
//!
//! Everything here is recomputed from scratch on every call; the selection is
//! small and the UI asks for a fresh [`Aggregate`] after each event.

use crate::catalog::{Condition, LaptopRecord};
use crate::selection::SelectionSet;
use serde::Serialize;

/// Kilograms of CO2-equivalent per passenger for one Amsterdam-Paris round trip.
pub const FLIGHT_EQUIVALENT_KG: f64 = 90.0;

/// Express an emission figure as a number of reference flights.
pub fn flights_equivalent(kg: f64) -> f64 {
    kg / FLIGHT_EQUIVALENT_KG
}

/// Two-decimal rendering used for every figure shown to the user.
pub fn two_decimals(value: f64) -> String {
    format!("{:.2}", value)
}

/// A new laptop matched with its refurbished counterpart in the selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pairing<'a> {
    pub new: &'a LaptopRecord,
    pub refurbished: &'a LaptopRecord,
    /// `new.co2 - refurbished.co2`
    pub saving: f64,
}

/// All figures the summary panel shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregate<'a> {
    pub total_co2: f64,
    pub flights_equivalent: f64,
    pub pairings: Vec<Pairing<'a>>,
    pub total_savings: f64,
    pub savings_flights_equivalent: f64,
}

impl<'a> Aggregate<'a> {
    pub fn from_selection(selection: &SelectionSet<'a>) -> Self {
        // fold from +0.0; an empty f64 `sum` yields -0.0
        let total_co2 = selection.iter().fold(0.0, |acc, r| acc + r.co2);
        let pairings = pair_new_with_refurbished(selection);
        let total_savings = pairings.iter().fold(0.0, |acc, p| acc + p.saving);

        Self {
            total_co2,
            flights_equivalent: flights_equivalent(total_co2),
            pairings,
            total_savings,
            savings_flights_equivalent: flights_equivalent(total_savings),
        }
    }

    pub fn has_pairings(&self) -> bool {
        !self.pairings.is_empty()
    }
}

/// Pair every new record with the first refurbished record of the same model.
///
/// Pairs follow the order of the new records in the selection; the refurbished
/// side is the first match in selection order. A refurbished record may serve
/// more than one new record if the selection allowed it.
pub fn pair_new_with_refurbished<'a>(selection: &SelectionSet<'a>) -> Vec<Pairing<'a>> {
    let (refurbs, news): (Vec<&'a LaptopRecord>, Vec<&'a LaptopRecord>) =
        selection.iter().partition(|r| r.is_refurbished);

    news.into_iter()
        .filter_map(|new| {
            refurbs
                .iter()
                .copied()
                .find(|refurb| refurb.same_model_as(new))
                .map(|refurbished| Pairing {
                    new,
                    refurbished,
                    saving: new.co2 - refurbished.co2,
                })
        })
        .collect()
}

/// One bar group of the comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartEntry<'a> {
    pub record: &'a LaptopRecord,
    pub new_co2: f64,
    pub refurbished_co2: f64,
}

impl ChartEntry<'_> {
    pub fn value(&self, series: Condition) -> f64 {
        match series {
            Condition::New => self.new_co2,
            Condition::Refurbished => self.refurbished_co2,
        }
    }
}

/// Chart series in selection order. Each record contributes to exactly one series.
pub fn chart_entries<'a>(selection: &SelectionSet<'a>) -> Vec<ChartEntry<'a>> {
    selection
        .iter()
        .map(|record| {
            let (new_co2, refurbished_co2) = match record.condition() {
                Condition::New => (record.co2, 0.0),
                Condition::Refurbished => (0.0, record.co2),
            };
            ChartEntry {
                record,
                new_co2,
                refurbished_co2,
            }
        })
        .collect()
}
