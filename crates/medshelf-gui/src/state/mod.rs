//! State module for MedShelf.
//!
//! All application state lives in [`AppState`]; every mutation goes through
//! a named transition method so the behavior is testable without Iced.

mod app_state;

pub use app_state::AppState;
