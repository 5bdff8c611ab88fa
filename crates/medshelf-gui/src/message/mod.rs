//! Message module for MedShelf.
//!
//! All user interactions and background task results flow through these
//! message types into `App::update`.

mod draft;

pub use draft::DraftMessage;

use medshelf_model::{Medicine, Suggestion};

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Catalog browsing
    // =========================================================================
    /// The search box content changed.
    SearchChanged(String),

    /// "Add Medicine" was clicked; open the add modal.
    OpenAddModal,

    // =========================================================================
    // Add-medicine modal
    // =========================================================================
    /// Messages from the add-medicine form.
    Draft(DraftMessage),

    // =========================================================================
    // Background task results
    // =========================================================================
    /// Initial catalog fetch completed.
    CatalogLoaded(Result<Vec<Medicine>, String>),

    /// An autocomplete search completed.
    ///
    /// Overlapping searches are not sequenced; whichever response arrives
    /// last replaces the suggestion list.
    SuggestionsLoaded(Result<Vec<Suggestion>, String>),
}
