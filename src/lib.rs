//! Laptop CO2 Impact Calculator
//!
//! Search a fixed catalog of laptops, build a comparison selection and derive
//! total emissions, flight equivalence and new-versus-refurbished savings.
//!
//! The core (`catalog`, `query`, `selection`, `aggregate`, `notice`) is plain
//! synchronous code with no I/O; `app` and `ui` host it in a terminal UI.

pub mod aggregate;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod error;
pub mod input;
pub mod notice;
pub mod query;
pub mod report;
pub mod selection;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use aggregate::{Aggregate, ChartEntry, Pairing, FLIGHT_EQUIVALENT_KG};
pub use app::{App, AppMode, AppState};
pub use catalog::{Catalog, CatalogError, Condition, LaptopRecord};
pub use config_file::CalculatorConfig;
pub use error::CalculatorError;
pub use notice::{Notice, NoticeBoard, NoticeKind, TimerToken};
pub use query::search;
pub use selection::{SelectOutcome, SelectionSet, VariantOutcome};
