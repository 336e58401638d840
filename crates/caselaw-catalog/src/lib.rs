//! Caselaw Theme Catalog
//!
//! The static registry of legal themes the engine classifies cases into.
//! Adding a theme is a configuration change, not a code change: downstream
//! components treat the catalog purely as data, and a deployment can load
//! an extended table from TOML instead of the built-in one.
//!
//! # Examples
//!
//! ```
//! use caselaw_catalog::ThemeCatalog;
//!
//! let catalog = ThemeCatalog::builtin();
//! assert!(catalog.get(&"product_liability".into()).is_some());
//! ```

#![warn(missing_docs)]

mod builtin;
mod catalog;
mod error;

pub use catalog::ThemeCatalog;
pub use error::CatalogError;
