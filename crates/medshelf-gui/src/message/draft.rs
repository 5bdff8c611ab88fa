//! Messages for the add-medicine form.

use medshelf_model::SkuType;

/// Messages emitted while the add-medicine modal is open.
#[derive(Debug, Clone)]
pub enum DraftMessage {
    /// Name field changed. Triggers an autocomplete search when the new
    /// value is longer than one character.
    NameChanged(String),

    /// Manufacturer field changed.
    ManufacturerChanged(String),

    /// Price field changed. Stored as text, never validated.
    PriceChanged(String),

    /// Label field changed.
    LabelChanged(String),

    /// Quantity field changed. Stored as text, never validated.
    QuantityChanged(String),

    /// SKU type picked from the dropdown.
    TypeSelected(SkuType),

    /// An autocomplete suggestion was clicked (index into the current
    /// suggestion list).
    SuggestionSelected(usize),

    /// Append the draft to the catalog and close the modal.
    Submit,

    /// Close the modal without appending; the draft is kept as-is for the
    /// next open.
    Cancel,
}
