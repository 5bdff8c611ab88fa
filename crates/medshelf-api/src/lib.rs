//! HTTP client for the MedShelf catalog backend.
//!
//! This crate wraps the two unauthenticated read endpoints the application
//! uses:
//!
//! - the audit catalog listing (one fixed page of medicines)
//! - the SKU name search used for add-form autocomplete
//!
//! # Architecture
//!
//! [`CatalogClient`] holds a configured `reqwest::Client` and the backend
//! base URL. Both operations are plain async functions suitable for Iced's
//! `Task::perform`:
//!
//! ```no_run
//! use medshelf_api::{CatalogClient, DEFAULT_BASE_URL};
//!
//! async fn load() -> medshelf_api::Result<()> {
//!     let client = CatalogClient::new(DEFAULT_BASE_URL)?;
//!     let medicines = client.fetch_catalog().await?;
//!     println!("{} medicines on page one", medicines.len());
//!
//!     let suggestions = client.search_medicines("para").await?;
//!     println!("{} suggestions", suggestions.len());
//!     Ok(())
//! }
//! ```
//!
//! Response bodies are decoded leniently: a missing `results`/`sku` field
//! falls back to an empty list instead of an error. There is no retry,
//! backoff, or request cancellation; callers decide what a failure means.

mod client;
mod error;
mod response;

pub use client::{CatalogClient, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use response::{CatalogResponse, SearchResponse};
