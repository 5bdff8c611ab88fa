//! MedShelf - Desktop pharmacy inventory browser.
//!
//! Loads the medicine catalog from the remote audit endpoint, filters it by
//! name, and adds new records (with server-backed name autocomplete) to the
//! in-memory list.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

use iced::Size;
use iced::window;

use medshelf_api::{CatalogClient, DEFAULT_BASE_URL};
use medshelf_gui::app::App;

/// Application entry point.
pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting MedShelf");

    let client = CatalogClient::new(DEFAULT_BASE_URL)?;

    // Run the Iced application using the builder pattern
    iced::application(move || App::new(client.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(960.0, 640.0),
            min_size: Some(Size::new(720.0, 480.0)),
            ..Default::default()
        })
        .run()?;

    Ok(())
}
