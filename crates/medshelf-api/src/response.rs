//! Response bodies for the catalog endpoints.
//!
//! Both endpoints wrap their payload in a single-field object. The field is
//! defaulted so a missing or `null` payload decodes to an empty list - the
//! application treats "no data" and "odd shape" identically.

use medshelf_model::{Medicine, Suggestion};
use serde::{Deserialize, Deserializer};

/// Body of the audit catalog listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogResponse {
    /// Medicines on the requested page.
    #[serde(default, deserialize_with = "nullable_list")]
    pub results: Vec<Medicine>,
}

/// Body of the SKU name search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Partial records matching the query.
    #[serde(default, deserialize_with = "nullable_list")]
    pub sku: Vec<Suggestion>,
}

/// Decode a list field that may be absent or explicitly `null`.
fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let list: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(list.unwrap_or_default())
}
