//! Catalog compilation engine.
//!
//! - `po`: `.po` source parser
//! - `catalog`: binary `.mo` writer and reader
//! - `scanner`: locale tree discovery
//! - `compile`: batch build driver
//! - `lookup`: runtime lookups over compiled catalogs

pub mod catalog;
pub mod compile;
pub mod lookup;
pub mod po;
pub mod scanner;

pub use catalog::{Catalog, CompiledCatalog};
pub use compile::{CompileOptions, CompileReport, FileOutcome, compile_all};
pub use lookup::{Lookup, Translations};
pub use po::{ParseError, PoSource, parse_po};
pub use scanner::{LanguageFilter, LocaleLayout, SourceFile, discover_sources};
