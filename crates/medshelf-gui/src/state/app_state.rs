//! Application-level state.
//!
//! `AppState` is the root of all state: the catalog, the search term, the
//! add-modal flag, the in-progress draft, and the autocomplete suggestion
//! list. Views derive everything else from it on each render.

use medshelf_api::CatalogClient;
use medshelf_model::{Medicine, MedicineDraft, Suggestion};

/// Top-level application state.
pub struct AppState {
    /// The in-memory medicine catalog: server order first, client-appended
    /// records after. Replaced wholesale by the initial load, appended to by
    /// the add form, never edited in place.
    pub catalog: Vec<Medicine>,

    /// Current search box content.
    pub search_term: String,

    /// Whether the add-medicine modal is open.
    pub add_modal_open: bool,

    /// The in-progress add-form record. Survives cancel; cleared on submit.
    pub draft: MedicineDraft,

    /// Latest autocomplete results. Replaced wholesale by each completing
    /// search; kept (just hidden) when the name field drops to one
    /// character or less.
    pub suggestions: Vec<Suggestion>,

    /// Whether the autocomplete dropdown is shown.
    pub suggestions_visible: bool,

    /// True while the initial catalog fetch is outstanding.
    pub is_loading: bool,

    /// HTTP client shared by catalog and autocomplete requests.
    pub client: CatalogClient,
}

impl AppState {
    /// Fresh state around an already-constructed client.
    pub fn new(client: CatalogClient) -> Self {
        Self {
            catalog: Vec::new(),
            search_term: String::new(),
            add_modal_open: false,
            draft: MedicineDraft::default(),
            suggestions: Vec::new(),
            suggestions_visible: false,
            is_loading: true,
            client,
        }
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    /// Replace the catalog with a freshly fetched list.
    pub fn set_catalog(&mut self, medicines: Vec<Medicine>) {
        self.catalog = medicines;
    }

    /// Update the search term.
    pub fn set_search(&mut self, term: String) {
        self.search_term = term;
    }

    /// The catalog filtered by the current search term.
    ///
    /// Case-insensitive substring match on the name field, original order
    /// preserved. An empty term returns the full catalog. Recomputed on
    /// every render; no cache.
    pub fn filtered_catalog(&self) -> Vec<&Medicine> {
        let needle = self.search_term.to_lowercase();
        self.catalog
            .iter()
            .filter(|medicine| medicine.name.to_lowercase().contains(&needle))
            .collect()
    }

    // ========================================================================
    // Add modal
    // ========================================================================

    /// Open the add-medicine modal. The draft keeps whatever a previous
    /// cancel left in it.
    pub fn open_add_modal(&mut self) {
        self.add_modal_open = true;
    }

    /// Close the modal without appending or resetting the draft.
    pub fn close_add_modal(&mut self) {
        self.add_modal_open = false;
    }

    /// Append the draft to the catalog, close the modal, and reset the
    /// draft to all-empty fields.
    pub fn submit_draft(&mut self) {
        self.catalog.push(self.draft.to_medicine());
        self.add_modal_open = false;
        self.draft.clear();
    }

    // ========================================================================
    // Autocomplete
    // ========================================================================

    /// Replace the suggestion list and show the dropdown.
    pub fn set_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
        self.suggestions_visible = true;
    }

    /// Hide the dropdown. The stored suggestions are kept.
    pub fn hide_suggestions(&mut self) {
        self.suggestions_visible = false;
    }

    /// Prefill the draft from the suggestion at `index` and hide the
    /// dropdown. Out-of-range indexes are ignored.
    pub fn select_suggestion(&mut self, index: usize) {
        if let Some(suggestion) = self.suggestions.get(index) {
            let suggestion = suggestion.clone();
            self.draft.apply_suggestion(&suggestion);
        }
        self.suggestions_visible = false;
    }
}

// Tests never send requests; any well-formed base URL will do.
#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        Self::new(CatalogClient::new("https://catalog.test").unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medshelf_model::SkuType;
    use proptest::prelude::*;

    fn named(name: &str) -> Medicine {
        Medicine {
            name: name.to_string(),
            ..Medicine::default()
        }
    }

    fn state_with_catalog(names: &[&str]) -> AppState {
        AppState {
            catalog: names.iter().map(|n| named(n)).collect(),
            ..AppState::default()
        }
    }

    #[test]
    fn empty_search_term_returns_full_catalog() {
        let state = state_with_catalog(&["Paracetamol", "Ibuprofen"]);
        let filtered = state.filtered_catalog();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "Paracetamol");
        assert_eq!(filtered[1].name, "Ibuprofen");
    }

    #[test]
    fn filter_matches_case_insensitive_substring() {
        let mut state = state_with_catalog(&["Paracetamol", "Ibuprofen"]);
        state.set_search("para".to_string());

        let filtered = state.filtered_catalog();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Paracetamol");
    }

    #[test]
    fn filter_preserves_catalog_order() {
        let mut state = state_with_catalog(&["Dolo 650", "Aspirin", "Dolopar", "Crocin"]);
        state.set_search("dolo".to_string());

        let names: Vec<&str> = state
            .filtered_catalog()
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, ["Dolo 650", "Dolopar"]);
    }

    #[test]
    fn submit_appends_draft_and_resets_it() {
        let mut state = state_with_catalog(&["Paracetamol"]);
        state.open_add_modal();
        state.draft.name = "Aspirin".to_string();
        state.draft.price = "10".to_string();
        state.draft.sku_type = Some(SkuType::Otc);

        state.submit_draft();

        assert_eq!(state.catalog.len(), 2);
        assert_eq!(state.catalog[1].name, "Aspirin");
        assert_eq!(state.catalog[1].price, "10");
        assert_eq!(state.catalog[1].sku_type, Some(SkuType::Otc));
        assert!(!state.add_modal_open);
        assert_eq!(state.draft, MedicineDraft::default());
    }

    #[test]
    fn cancel_keeps_catalog_and_draft() {
        let mut state = state_with_catalog(&["Paracetamol"]);
        state.open_add_modal();
        state.draft.name = "Asp".to_string();
        state.draft.sku_type = Some(SkuType::Fmcg);

        state.close_add_modal();

        assert_eq!(state.catalog.len(), 1);
        assert!(!state.add_modal_open);
        assert_eq!(state.draft.name, "Asp");
        assert_eq!(state.draft.sku_type, Some(SkuType::Fmcg));

        // Reopening shows the same partially filled draft.
        state.open_add_modal();
        assert_eq!(state.draft.name, "Asp");
    }

    #[test]
    fn select_suggestion_prefills_draft_and_keeps_type() {
        let mut state = AppState::default();
        state.draft.name = "Asp".to_string();
        state.draft.sku_type = Some(SkuType::Otc);
        state.set_suggestions(vec![Suggestion {
            name: "Aspirin".to_string(),
            manufacturer: "Acme".to_string(),
            price: "10".to_string(),
            label: "L1".to_string(),
            quantity: "5".to_string(),
        }]);

        state.select_suggestion(0);

        assert_eq!(state.draft.name, "Aspirin");
        assert_eq!(state.draft.manufacturer, "Acme");
        assert_eq!(state.draft.price, "10");
        assert_eq!(state.draft.label, "L1");
        assert_eq!(state.draft.quantity, "5");
        assert_eq!(state.draft.sku_type, Some(SkuType::Otc));
        assert!(!state.suggestions_visible);
    }

    #[test]
    fn select_suggestion_out_of_range_only_hides_dropdown() {
        let mut state = AppState::default();
        state.draft.name = "Asp".to_string();
        state.set_suggestions(Vec::new());

        state.select_suggestion(3);

        assert_eq!(state.draft.name, "Asp");
        assert!(!state.suggestions_visible);
    }

    #[test]
    fn hide_suggestions_keeps_stored_results() {
        let mut state = AppState::default();
        state.set_suggestions(vec![Suggestion::default()]);
        assert!(state.suggestions_visible);

        state.hide_suggestions();

        assert!(!state.suggestions_visible);
        assert_eq!(state.suggestions.len(), 1);
    }

    proptest! {
        /// The filter returns exactly the case-insensitive name-substring
        /// matches, in catalog order.
        #[test]
        fn filter_law(
            names in proptest::collection::vec("[a-zA-Z ]{0,12}", 0..16),
            term in "[a-zA-Z]{0,5}",
        ) {
            let mut state = AppState {
                catalog: names.iter().map(|n| named(n)).collect(),
                ..AppState::default()
            };
            state.set_search(term.clone());

            let expected: Vec<&String> = names
                .iter()
                .filter(|n| n.to_lowercase().contains(&term.to_lowercase()))
                .collect();
            let actual: Vec<&String> = state
                .filtered_catalog()
                .iter()
                .map(|m| &m.name)
                .collect();

            prop_assert_eq!(actual, expected);
        }

        /// Submitting any draft grows the catalog by exactly one record
        /// equal to the draft's fields at submit time.
        #[test]
        fn submit_appends_exactly_one(
            name in ".{0,12}",
            price in ".{0,6}",
            quantity in ".{0,6}",
        ) {
            let mut state = AppState::default();
            state.draft.name = name.clone();
            state.draft.price = price.clone();
            state.draft.quantity = quantity.clone();

            state.submit_draft();

            prop_assert_eq!(state.catalog.len(), 1);
            prop_assert_eq!(&state.catalog[0].name, &name);
            prop_assert_eq!(&state.catalog[0].price, &price);
            prop_assert_eq!(&state.catalog[0].quantity, &quantity);
            prop_assert_eq!(&state.draft, &MedicineDraft::default());
        }
    }
}
