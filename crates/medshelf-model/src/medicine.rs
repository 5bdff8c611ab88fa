//! Medicine catalog records.
//!
//! The catalog and autocomplete endpoints return loosely-shaped JSON, so
//! every field is defaulted: a partial row decodes to empty strings rather
//! than failing the whole response. The `type` field is parsed leniently -
//! an unknown or missing classification becomes `None` instead of an error.

use serde::{Deserialize, Deserializer, Serialize};

use crate::SkuType;

/// One medicine row of the catalog.
///
/// Records carry no identifier; list position is the only handle. Price and
/// quantity are numeric-as-text and never validated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Medicine {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub quantity: String,
    /// SKU classification. `None` when the server omits the field or sends
    /// a value outside the known set.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_sku_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub sku_type: Option<SkuType>,
}

/// A partial record returned by the autocomplete endpoint.
///
/// Suggestions never carry a SKU type; selecting one prefills the draft's
/// text fields and leaves the chosen type alone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub quantity: String,
}

/// The in-progress record of the add-medicine form.
///
/// Mutated field-by-field as the user types. No field is validated; the
/// draft is appended to the catalog exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MedicineDraft {
    pub name: String,
    pub manufacturer: String,
    pub price: String,
    pub label: String,
    pub quantity: String,
    pub sku_type: Option<SkuType>,
}

impl MedicineDraft {
    /// Prefill the draft from an autocomplete suggestion.
    ///
    /// Overwrites the five text fields; the SKU type the user already
    /// picked is preserved.
    pub fn apply_suggestion(&mut self, suggestion: &Suggestion) {
        self.name = suggestion.name.clone();
        self.manufacturer = suggestion.manufacturer.clone();
        self.price = suggestion.price.clone();
        self.label = suggestion.label.clone();
        self.quantity = suggestion.quantity.clone();
    }

    /// Copy the current field values into a catalog record.
    pub fn to_medicine(&self) -> Medicine {
        Medicine {
            name: self.name.clone(),
            manufacturer: self.manufacturer.clone(),
            price: self.price.clone(),
            label: self.label.clone(),
            quantity: self.quantity.clone(),
            sku_type: self.sku_type,
        }
    }

    /// Reset every field to empty, including the SKU type.
    pub fn clear(&mut self) {
        *self = MedicineDraft::default();
    }
}

/// Deserialize the `type` field without failing on values outside the
/// known set.
fn lenient_sku_type<'de, D>(deserializer: D) -> Result<Option<SkuType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}
