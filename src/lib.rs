//! Static roadmap catalog: phases, epics and stories with pure queries.
//!
//! The bundled roadmap is embedded at compile time and validated on load.
//! Everything after loading is a read-only computation over the catalog.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod render;

pub use catalog::Catalog;
pub use error::{CatalogError, Result, ValidationIssue};
