//! Catalog fetch and autocomplete services.
//!
//! Async functions wrapped in Iced's `Task::perform` pattern. Errors are
//! stringified for the message payload; the update loop decides what a
//! failure means (here: log and keep prior state).

use iced::Task;
use medshelf_api::CatalogClient;

use crate::message::Message;

/// Fetch page one of the medicine catalog.
///
/// Returns a Task that will produce a `CatalogLoaded` message.
pub fn load_catalog(client: CatalogClient) -> Task<Message> {
    Task::perform(
        async move { client.fetch_catalog().await.map_err(|e| e.to_string()) },
        Message::CatalogLoaded,
    )
}

/// Search SKUs by name for the add-form autocomplete.
///
/// Returns a Task that will produce a `SuggestionsLoaded` message. No
/// cancellation: a task issued for an earlier keystroke still delivers its
/// result, and the last-completing response wins.
pub fn search_suggestions(client: CatalogClient, query: String) -> Task<Message> {
    Task::perform(
        async move {
            client
                .search_medicines(&query)
                .await
                .map_err(|e| e.to_string())
        },
        Message::SuggestionsLoaded,
    )
}
