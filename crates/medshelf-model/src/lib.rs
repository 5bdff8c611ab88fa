//! Data model definitions for the MedShelf medicine catalog.
//!
//! This crate defines the records shared by the API client and the GUI:
//!
//! - [`Medicine`] - one row of the catalog
//! - [`Suggestion`] - a partial record returned by the autocomplete endpoint
//! - [`MedicineDraft`] - the in-progress add-form record
//! - [`SkuType`] - the medicine type classification
//!
//! All numeric-looking fields (price, quantity) are deliberately kept as
//! text: the backend serves them as strings and the application stores
//! whatever the user typed without coercion.

mod medicine;
mod sku;

pub use medicine::{Medicine, MedicineDraft, Suggestion};
pub use sku::{ParseSkuTypeError, SkuType};
