//! Laptop catalog
//!
//! The catalog is a fixed, process-wide table of laptop records. It is never
//! mutated; every other module borrows records out of it.
//!
//! # Invariants
//!
//! - `id` is unique across the whole table
//! - a `(model, manufacturer)` pair appears at most once per refurbished flag,
//!   so every record has at most one opposite variant

use serde::Serialize;
use std::collections::HashSet;
use strum::{Display, EnumIter};
use thiserror::Error;

/// A single laptop with its lifecycle CO2 estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaptopRecord {
    pub id: &'static str,
    pub model: &'static str,
    /// Kilograms of CO2-equivalent.
    pub co2: f64,
    pub year: u16,
    pub manufacturer: &'static str,
    pub is_refurbished: bool,
}

/// New or refurbished, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Condition {
    #[strum(serialize = "Nieuw")]
    New,
    #[strum(serialize = "Refurbished")]
    Refurbished,
}

impl Condition {
    /// The condition a variant of this one would have.
    pub fn opposite(self) -> Self {
        match self {
            Self::New => Self::Refurbished,
            Self::Refurbished => Self::New,
        }
    }
}

impl LaptopRecord {
    pub fn condition(&self) -> Condition {
        if self.is_refurbished {
            Condition::Refurbished
        } else {
            Condition::New
        }
    }

    /// Same model from the same manufacturer, regardless of condition.
    pub fn same_model_as(&self, other: &LaptopRecord) -> bool {
        self.model == other.model && self.manufacturer == other.manufacturer
    }

    /// Whether `other` is the opposite-condition variant of this record.
    pub fn is_variant_of(&self, other: &LaptopRecord) -> bool {
        self.same_model_as(other) && self.is_refurbished != other.is_refurbished
    }

    /// `Lenovo ThinkPad T450`
    pub fn display_name(&self) -> String {
        format!("{} {}", self.manufacturer, self.model)
    }
}

const fn laptop(
    id: &'static str,
    model: &'static str,
    co2: f64,
    year: u16,
    manufacturer: &'static str,
    is_refurbished: bool,
) -> LaptopRecord {
    LaptopRecord {
        id,
        model,
        co2,
        year,
        manufacturer,
        is_refurbished,
    }
}

static LAPTOPS: [LaptopRecord; 11] = [
    laptop("1", "ThinkPad E460", 340.00, 2015, "Lenovo", false),
    laptop("2", "ThinkPad L380 Yoga", 298.00, 2018, "Lenovo", false),
    laptop("3", "ThinkPad L440", 278.00, 2013, "Lenovo", false),
    laptop("4", "ThinkPad T450", 457.00, 2015, "Lenovo", false),
    laptop("5", "ThinkPad X1 Carbon 5th Gen", 279.00, 2017, "Lenovo", false),
    laptop("6", "MacBook Air (M1, 2020)", 160.00, 2020, "Apple", false),
    laptop("7", "Dell XPS 13 (9310)", 296.00, 2020, "Dell", false),
    laptop("8", "HP Spectre x360 14", 309.00, 2021, "HP", false),
    laptop("9", "ThinkPad T450", 91.40, 2015, "Lenovo", true),
    laptop("10", "MacBook Air 2019", 56.00, 2019, "Apple", true),
    laptop("11", "Dell Latitude 7400", 88.80, 2019, "Dell", true),
];

/// Catalog integrity violations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("duplicate id '{0}'")]
    DuplicateId(String),

    #[error("more than one {condition} variant of {manufacturer} {model}")]
    DuplicateVariant {
        manufacturer: String,
        model: String,
        condition: Condition,
    },
}

/// Read-only view over a table of laptop records.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    records: &'a [LaptopRecord],
}

impl Catalog<'static> {
    /// The built-in laptop table.
    pub fn builtin() -> Self {
        Self { records: &LAPTOPS }
    }
}

impl<'a> Catalog<'a> {
    /// Wrap an arbitrary table. Used for custom data sets in tests.
    pub fn new(records: &'a [LaptopRecord]) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &'a [LaptopRecord] {
        self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'a, LaptopRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&'a LaptopRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// First record, in catalog order, that is the opposite variant of `record`.
    pub fn find_variant(&self, record: &LaptopRecord) -> Option<&'a LaptopRecord> {
        self.records.iter().find(|r| r.is_variant_of(record))
    }

    /// Check the id and variant invariants.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        let mut variants = HashSet::new();

        for record in self.records {
            if !ids.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id.to_string()));
            }
            if !variants.insert((record.model, record.manufacturer, record.is_refurbished)) {
                return Err(CatalogError::DuplicateVariant {
                    manufacturer: record.manufacturer.to_string(),
                    model: record.model.to_string(),
                    condition: record.condition(),
                });
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &Catalog<'a> {
    type Item = &'a LaptopRecord;
    type IntoIter = std::slice::Iter<'a, LaptopRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 11);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::builtin();
        let t450 = catalog.get("4").expect("id 4 exists");
        assert_eq!(t450.model, "ThinkPad T450");
        assert!(!t450.is_refurbished);
        assert!(catalog.get("12").is_none());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn test_find_variant_both_directions() {
        let catalog = Catalog::builtin();
        let new = catalog.get("4").unwrap();
        let refurb = catalog.get("9").unwrap();
        assert_eq!(catalog.find_variant(new).map(|r| r.id), Some("9"));
        assert_eq!(catalog.find_variant(refurb).map(|r| r.id), Some("4"));
    }

    #[test]
    fn test_find_variant_missing() {
        let catalog = Catalog::builtin();
        // MacBook Air 2019 (refurbished) is a different model from the M1
        let m1 = catalog.get("6").unwrap();
        assert!(catalog.find_variant(m1).is_none());
    }

    #[test]
    fn test_find_variant_uses_catalog_order() {
        static TABLE: [LaptopRecord; 3] = [
            laptop("a", "X", 10.0, 2020, "M", false),
            laptop("b", "X", 2.0, 2020, "M", true),
            laptop("c", "X", 1.0, 2020, "M", true),
        ];
        let catalog = Catalog::new(&TABLE);
        assert_eq!(catalog.find_variant(&TABLE[0]).map(|r| r.id), Some("b"));
    }

    #[test]
    fn test_validate_duplicate_id() {
        static TABLE: [LaptopRecord; 2] = [
            laptop("1", "A", 1.0, 2020, "M", false),
            laptop("1", "B", 1.0, 2020, "M", false),
        ];
        assert_eq!(
            Catalog::new(&TABLE).validate(),
            Err(CatalogError::DuplicateId("1".into()))
        );
    }

    #[test]
    fn test_validate_duplicate_variant() {
        static TABLE: [LaptopRecord; 2] = [
            laptop("1", "A", 1.0, 2020, "M", true),
            laptop("2", "A", 2.0, 2021, "M", true),
        ];
        let err = Catalog::new(&TABLE).validate().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateVariant {
                condition: Condition::Refurbished,
                ..
            }
        ));
    }

    #[test]
    fn test_condition_display() {
        assert_eq!(Condition::New.to_string(), "Nieuw");
        assert_eq!(Condition::Refurbished.to_string(), "Refurbished");
        assert_eq!(Condition::New.opposite(), Condition::Refurbished);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_value(catalog.get("9").unwrap()).unwrap();
        assert_eq!(json["isRefurbished"], true);
        assert_eq!(json["manufacturer"], "Lenovo");
    }
}
