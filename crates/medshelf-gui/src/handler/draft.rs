//! Add-medicine form message handler.
//!
//! Handles:
//! - Field-level draft edits
//! - Autocomplete triggering on name keystrokes
//! - Suggestion selection
//! - Submit and cancel

use iced::Task;

use super::MessageHandler;
use crate::message::{DraftMessage, Message};
use crate::service;
use crate::state::AppState;

/// Handler for add-medicine form messages.
pub struct DraftHandler;

impl MessageHandler<DraftMessage> for DraftHandler {
    fn handle(&self, state: &mut AppState, msg: DraftMessage) -> Task<Message> {
        match msg {
            DraftMessage::NameChanged(value) => {
                state.draft.name = value.clone();

                // A one-character value hides the dropdown without clearing
                // the stored results. Anything longer fires a fresh search;
                // overlapping searches are not sequenced and the last
                // completion wins.
                if value.chars().count() > 1 {
                    service::search_suggestions(state.client.clone(), value)
                } else {
                    state.hide_suggestions();
                    Task::none()
                }
            }

            // Editing any field other than the name hides the dropdown;
            // only name keystrokes drive autocomplete.
            DraftMessage::ManufacturerChanged(value) => {
                state.draft.manufacturer = value;
                state.hide_suggestions();
                Task::none()
            }

            DraftMessage::PriceChanged(value) => {
                state.draft.price = value;
                state.hide_suggestions();
                Task::none()
            }

            DraftMessage::LabelChanged(value) => {
                state.draft.label = value;
                state.hide_suggestions();
                Task::none()
            }

            DraftMessage::QuantityChanged(value) => {
                state.draft.quantity = value;
                state.hide_suggestions();
                Task::none()
            }

            DraftMessage::TypeSelected(sku_type) => {
                state.draft.sku_type = Some(sku_type);
                state.hide_suggestions();
                Task::none()
            }

            DraftMessage::SuggestionSelected(index) => {
                state.select_suggestion(index);
                Task::none()
            }

            DraftMessage::Submit => {
                tracing::info!("Adding medicine {:?} to catalog", state.draft.name);
                state.submit_draft();
                Task::none()
            }

            DraftMessage::Cancel => {
                state.close_add_modal();
                Task::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medshelf_model::Suggestion;

    #[test]
    fn short_name_hides_dropdown_without_clearing_results() {
        let mut state = AppState::default();
        state.set_suggestions(vec![Suggestion::default()]);

        let _ = DraftHandler.handle(&mut state, DraftMessage::NameChanged("a".to_string()));

        assert_eq!(state.draft.name, "a");
        assert!(!state.suggestions_visible);
        assert_eq!(state.suggestions.len(), 1);
    }

    #[test]
    fn empty_name_hides_dropdown() {
        let mut state = AppState::default();
        state.set_suggestions(vec![Suggestion::default()]);

        let _ = DraftHandler.handle(&mut state, DraftMessage::NameChanged(String::new()));

        assert!(!state.suggestions_visible);
    }

    #[test]
    fn long_name_keeps_prior_dropdown_state_until_response() {
        let mut state = AppState::default();
        state.set_suggestions(vec![Suggestion::default()]);

        // The search task is returned but not executed here; the visible
        // dropdown and stored results stay as they were.
        let _ = DraftHandler.handle(&mut state, DraftMessage::NameChanged("asp".to_string()));

        assert_eq!(state.draft.name, "asp");
        assert!(state.suggestions_visible);
        assert_eq!(state.suggestions.len(), 1);
    }

    #[test]
    fn non_name_field_edit_hides_dropdown() {
        let mut state = AppState::default();
        state.set_suggestions(vec![Suggestion::default()]);

        let _ = DraftHandler.handle(
            &mut state,
            DraftMessage::ManufacturerChanged("Acme".to_string()),
        );

        assert!(!state.suggestions_visible);
        assert_eq!(state.suggestions.len(), 1);

        state.set_suggestions(vec![Suggestion::default()]);
        let _ = DraftHandler.handle(
            &mut state,
            DraftMessage::TypeSelected(medshelf_model::SkuType::Otc),
        );

        assert!(!state.suggestions_visible);
    }

    #[test]
    fn field_edits_merge_into_draft() {
        let mut state = AppState::default();

        let _ = DraftHandler.handle(
            &mut state,
            DraftMessage::ManufacturerChanged("Acme".to_string()),
        );
        let _ = DraftHandler.handle(&mut state, DraftMessage::PriceChanged("10".to_string()));

        assert_eq!(state.draft.manufacturer, "Acme");
        assert_eq!(state.draft.price, "10");
        assert_eq!(state.draft.name, "");
    }
}
