//! User-facing text
//!
//! All strings the user reads live here so the TUI and the headless commands
//! say exactly the same thing.

use crate::aggregate::{two_decimals, Aggregate, Pairing};
use crate::catalog::{Condition, LaptopRecord};
use crate::notice::NoticeKind;
use crate::selection::{SelectOutcome, SelectionSet, VariantOutcome};
use std::fmt::Write;

pub const TITLE: &str = "Laptop CO2 Impact Calculator";
pub const SEARCH_PLACEHOLDER: &str = "Zoek op merk of model...";

pub const ABOUT_TEXT: &str = "De CO2-impact gegevens zijn gebaseerd op schattingen van de \
levenscyclusanalyse van laptops, inclusief productie, transport, en gemiddeld energieverbruik \
over een periode van 4 jaar. Voor refurbished apparaten is de CO2-impact lager omdat een groot \
deel van de productie-impact wordt vermeden. Werkelijke waarden kunnen variëren afhankelijk van \
gebruikspatronen en levensduur van het apparaat. De vergelijking met vliegreizen is gebaseerd op \
een gemiddelde CO2-uitstoot van 90 kg per passagier voor een retourvlucht Amsterdam-Parijs.";

/// Dutch adjective for the variant a record does not have: `nieuwe` or `refurbished`.
pub fn variant_word(wanted: Condition) -> &'static str {
    match wanted {
        Condition::New => "nieuwe",
        Condition::Refurbished => "refurbished",
    }
}

/// Notice text for a `select` outcome.
pub fn select_message(outcome: &SelectOutcome<'_>) -> (String, NoticeKind) {
    match outcome {
        SelectOutcome::Added(record) => (
            format!(
                "{} {} toegevoegd aan vergelijking.",
                record.manufacturer, record.model
            ),
            NoticeKind::Info,
        ),
        SelectOutcome::AlreadySelected(_) => (
            "Deze laptop is al geselecteerd.".to_string(),
            NoticeKind::Warning,
        ),
    }
}

/// Notice text for an `add_variant` outcome.
pub fn variant_message(outcome: &VariantOutcome<'_>) -> (String, NoticeKind) {
    match outcome {
        VariantOutcome::Selected(selected) => select_message(selected),
        VariantOutcome::NotFound { wanted } => (
            format!(
                "Geen {} variant gevonden voor deze laptop.",
                variant_word(*wanted)
            ),
            NoticeKind::Warning,
        ),
    }
}

/// Label for the add-variant action on a record.
pub fn add_variant_label(record: &LaptopRecord) -> String {
    format!(
        "Voeg {} variant toe",
        variant_word(record.condition().opposite())
    )
}

/// `Lenovo ThinkPad T450 (2015)`
pub fn record_line(record: &LaptopRecord) -> String {
    format!("{} {} ({})", record.manufacturer, record.model, record.year)
}

/// Raw figure in shortest form: `91.4 kg CO2 eq`, `457 kg CO2 eq`.
pub fn co2_label(co2: f64) -> String {
    format!("{} kg CO2 eq", co2)
}

/// Figure with two decimals: `91.40 kg CO2 eq`.
pub fn co2_label_fixed(co2: f64) -> String {
    format!("{} kg CO2 eq", two_decimals(co2))
}

pub fn total_line(aggregate: &Aggregate<'_>) -> String {
    format!("Totale CO2 Impact: {}", co2_label_fixed(aggregate.total_co2))
}

pub fn flights_line(flights: f64) -> String {
    format!(
        "Dit is equivalent aan ongeveer {} retourvluchten tussen Amsterdam en Parijs.",
        two_decimals(flights)
    )
}

pub fn savings_total_line(aggregate: &Aggregate<'_>) -> String {
    format!(
        "Totale CO2 Besparing: {}",
        co2_label_fixed(aggregate.total_savings)
    )
}

pub fn savings_flights_line(flights: f64) -> String {
    format!(
        "Deze besparing is equivalent aan ongeveer {} retourvluchten tussen Amsterdam en Parijs.",
        two_decimals(flights)
    )
}

/// The four lines shown for one pairing.
pub fn pairing_lines(pair: &Pairing<'_>) -> [String; 4] {
    [
        format!("{} {}:", pair.new.manufacturer, pair.new.model),
        format!("Nieuw: {}", co2_label_fixed(pair.new.co2)),
        format!("Refurbished: {}", co2_label_fixed(pair.refurbished.co2)),
        format!("Besparing: {}", co2_label_fixed(pair.saving)),
    ]
}

/// Plain-text report used by the `compare` command.
pub fn text_report(selection: &SelectionSet<'_>, aggregate: &Aggregate<'_>) -> String {
    let mut out = String::new();

    if selection.is_empty() {
        out.push_str("Geen laptops geselecteerd.\n");
        return out;
    }

    // Writing to a String cannot fail
    let _ = writeln!(out, "Geselecteerde Laptops");
    for record in selection.iter() {
        let badge = match record.condition() {
            Condition::New => "",
            Condition::Refurbished => " [Refurbished]",
        };
        let _ = writeln!(
            out,
            "  {} {}{} - Jaar: {} - CO2 Impact: {}",
            record.manufacturer,
            record.model,
            badge,
            record.year,
            co2_label(record.co2)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Conclusie");
    let _ = writeln!(out, "  {}", total_line(aggregate));
    let _ = writeln!(out, "  {}", flights_line(aggregate.flights_equivalent));

    if aggregate.has_pairings() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Vergelijking Nieuw vs. Refurbished");
        for pair in &aggregate.pairings {
            for line in pairing_lines(pair) {
                let _ = writeln!(out, "  {}", line);
            }
        }
        let _ = writeln!(out, "  {}", savings_total_line(aggregate));
        let _ = writeln!(out, "  {}", savings_flights_line(aggregate.savings_flights_equivalent));
    }

    out
}
