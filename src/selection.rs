//! Selection set and the operations that mutate it
//!
//! The selection is the ordered list of laptops the user is comparing. It never
//! holds two records with the same id; `select` enforces that on insert.

use crate::catalog::{Catalog, Condition, LaptopRecord};
use serde::Serialize;

/// Result of [`SelectionSet::select`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectOutcome<'a> {
    /// The record was appended.
    Added(&'a LaptopRecord),
    /// A record with the same id was already selected; nothing changed.
    AlreadySelected(&'a LaptopRecord),
}

impl SelectOutcome<'_> {
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }
}

/// Result of [`SelectionSet::add_variant`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VariantOutcome<'a> {
    /// A variant was found and handed to `select`.
    Selected(SelectOutcome<'a>),
    /// The catalog has no record of the wanted condition for this model.
    NotFound { wanted: Condition },
}

impl VariantOutcome<'_> {
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Selected(outcome) if outcome.is_added())
    }
}

/// Ordered, duplicate-free list of selected laptops.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SelectionSet<'a> {
    records: Vec<&'a LaptopRecord>,
}

impl<'a> SelectionSet<'a> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append `record` unless a record with the same id is already present.
    pub fn select(&mut self, record: &'a LaptopRecord) -> SelectOutcome<'a> {
        if self.contains(record.id) {
            return SelectOutcome::AlreadySelected(record);
        }
        self.records.push(record);
        SelectOutcome::Added(record)
    }

    /// Drop the record with this id. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) -> Option<&'a LaptopRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }

    /// Select the opposite-condition variant of `record` from `catalog`.
    pub fn add_variant(
        &mut self,
        record: &LaptopRecord,
        catalog: &Catalog<'a>,
    ) -> VariantOutcome<'a> {
        match catalog.find_variant(record) {
            Some(variant) => VariantOutcome::Selected(self.select(variant)),
            None => VariantOutcome::NotFound {
                wanted: record.condition().opposite(),
            },
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&'a LaptopRecord> {
        self.records.iter().copied().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[&'a LaptopRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a LaptopRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.records.iter().map(|r| r.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_appends_in_order() {
        let catalog = Catalog::builtin();
        let mut selection = SelectionSet::new();
        assert!(selection.select(catalog.get("6").unwrap()).is_added());
        assert!(selection.select(catalog.get("1").unwrap()).is_added());
        assert_eq!(selection.ids(), vec!["6", "1"]);
    }

    #[test]
    fn test_select_duplicate_is_noop() {
        let catalog = Catalog::builtin();
        let mut selection = SelectionSet::new();
        let record = catalog.get("3").unwrap();
        selection.select(record);
        let before = selection.clone();

        let outcome = selection.select(record);
        assert_eq!(outcome, SelectOutcome::AlreadySelected(record));
        assert_eq!(selection, before);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let catalog = Catalog::builtin();
        let mut selection = SelectionSet::new();
        selection.select(catalog.get("2").unwrap());
        assert!(selection.remove("99").is_none());
        assert_eq!(selection.ids(), vec!["2"]);
    }

    #[test]
    fn test_remove_keeps_order_of_rest() {
        let catalog = Catalog::builtin();
        let mut selection = SelectionSet::new();
        for id in ["1", "2", "3"] {
            selection.select(catalog.get(id).unwrap());
        }
        assert_eq!(selection.remove("2").map(|r| r.id), Some("2"));
        assert_eq!(selection.ids(), vec!["1", "3"]);
    }

    #[test]
    fn test_add_variant_already_selected() {
        let catalog = Catalog::builtin();
        let mut selection = SelectionSet::new();
        selection.select(catalog.get("4").unwrap());
        selection.select(catalog.get("9").unwrap());

        let outcome = selection.add_variant(catalog.get("4").unwrap(), &catalog);
        assert!(matches!(
            outcome,
            VariantOutcome::Selected(SelectOutcome::AlreadySelected(r)) if r.id == "9"
        ));
        assert!(!outcome.is_added());
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_add_variant_from_refurbished_wants_new() {
        let catalog = Catalog::builtin();
        let mut selection = SelectionSet::new();
        let outcome = selection.add_variant(catalog.get("10").unwrap(), &catalog);
        assert_eq!(
            outcome,
            VariantOutcome::NotFound {
                wanted: Condition::New
            }
        );
        assert!(selection.is_empty());
    }
}
