//! Free-text search over the catalog

use crate::catalog::{Catalog, LaptopRecord};

/// Records whose model or manufacturer contains `term`, ignoring case.
///
/// Results keep catalog order. An empty term matches every record.
pub fn search<'a>(term: &str, catalog: &Catalog<'a>) -> Vec<&'a LaptopRecord> {
    let needle = term.to_lowercase();
    catalog
        .iter()
        .filter(|r| {
            r.model.to_lowercase().contains(&needle)
                || r.manufacturer.to_lowercase().contains(&needle)
        })
        .collect()
}
