//! Main application module for MedShelf.
//!
//! Implements the Iced 0.14.0 application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//!
//! All state changes happen in `update()`; views are pure functions of
//! state. Network work runs through `Task::perform` (see `service`).

use iced::{Element, Task, Theme};

use medshelf_api::CatalogClient;

use crate::handler::{DraftHandler, MessageHandler};
use crate::message::Message;
use crate::service;
use crate::state::AppState;
use crate::theme::medshelf_theme;
use crate::view::{view_add_modal, view_home};

/// Main application struct.
///
/// Root of the Iced application; holds all state and implements the Elm
/// architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance around an already-built client.
    ///
    /// Called once at startup. The one-shot catalog fetch is issued here;
    /// it has no retry and no concurrent peer.
    pub fn new(client: CatalogClient) -> (Self, Task<Message>) {
        let app = Self {
            state: AppState::new(client),
        };

        let startup = service::load_catalog(app.state.client.clone());
        (app, startup)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Catalog browsing
            // =================================================================
            Message::SearchChanged(term) => {
                self.state.set_search(term);
                Task::none()
            }

            Message::OpenAddModal => {
                self.state.open_add_modal();
                Task::none()
            }

            // =================================================================
            // Add-medicine modal
            // =================================================================
            Message::Draft(draft_msg) => DraftHandler.handle(&mut self.state, draft_msg),

            // =================================================================
            // Background task results
            // =================================================================
            Message::CatalogLoaded(result) => {
                self.state.is_loading = false;
                match result {
                    Ok(medicines) => {
                        tracing::info!("Catalog loaded: {} medicines", medicines.len());
                        self.state.set_catalog(medicines);
                    }
                    Err(err) => {
                        // No user-visible error state: the catalog stays as
                        // it was (empty, since this runs once at startup).
                        tracing::error!("Error fetching catalog: {}", err);
                    }
                }
                Task::none()
            }

            Message::SuggestionsLoaded(result) => {
                match result {
                    Ok(suggestions) => self.state.set_suggestions(suggestions),
                    Err(err) => {
                        // Prior suggestions and dropdown visibility are left
                        // untouched.
                        tracing::error!("Error fetching autocomplete data: {}", err);
                    }
                }
                Task::none()
            }
        }
    }

    /// Render the view.
    ///
    /// Pure function of state: the home screen, with the add modal stacked
    /// on top while it is open.
    pub fn view(&self) -> Element<'_, Message> {
        let home = view_home(&self.state);

        if self.state.add_modal_open {
            view_add_modal(&self.state, home)
        } else {
            home
        }
    }

    /// Window title.
    pub fn title(&self) -> String {
        if self.state.catalog.is_empty() {
            "MedShelf".to_string()
        } else {
            format!("MedShelf - {} medicines", self.state.catalog.len())
        }
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        medshelf_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medshelf_model::{Medicine, Suggestion};

    fn new_app() -> (App, Task<Message>) {
        App::new(CatalogClient::new("https://catalog.test").unwrap())
    }

    #[test]
    fn failed_catalog_load_leaves_catalog_empty() {
        let (mut app, _startup) = new_app();

        let _ = app.update(Message::CatalogLoaded(Err("network error".to_string())));

        assert!(app.state.catalog.is_empty());
        assert!(!app.state.is_loading);
    }

    #[test]
    fn catalog_load_replaces_list() {
        let (mut app, _startup) = new_app();

        let medicines = vec![Medicine {
            name: "Paracetamol".to_string(),
            ..Medicine::default()
        }];
        let _ = app.update(Message::CatalogLoaded(Ok(medicines)));

        assert_eq!(app.state.catalog.len(), 1);
        assert!(!app.state.is_loading);
    }

    #[test]
    fn failed_suggestion_load_keeps_prior_results() {
        let (mut app, _startup) = new_app();
        app.state.set_suggestions(vec![Suggestion::default()]);

        let _ = app.update(Message::SuggestionsLoaded(Err("timeout".to_string())));

        assert!(app.state.suggestions_visible);
        assert_eq!(app.state.suggestions.len(), 1);
    }

    #[test]
    fn last_completing_suggestion_response_wins() {
        let (mut app, _startup) = new_app();

        let first = vec![Suggestion {
            name: "Aspirin".to_string(),
            ..Suggestion::default()
        }];
        let second = vec![Suggestion {
            name: "Asparaginase".to_string(),
            ..Suggestion::default()
        }];

        let _ = app.update(Message::SuggestionsLoaded(Ok(first)));
        let _ = app.update(Message::SuggestionsLoaded(Ok(second)));

        assert_eq!(app.state.suggestions.len(), 1);
        assert_eq!(app.state.suggestions[0].name, "Asparaginase");
    }
}
