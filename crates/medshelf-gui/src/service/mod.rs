//! Service modules for background tasks.

mod catalog;

pub use catalog::{load_catalog, search_suggestions};
