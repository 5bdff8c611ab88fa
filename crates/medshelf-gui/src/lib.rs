//! MedShelf - GUI Library
//!
//! Desktop pharmacy inventory browser built with Iced 0.14.0 using the Elm
//! architecture: all state lives in [`state::AppState`], every interaction
//! is a [`message::Message`], and views are pure functions of state.

pub mod app;
pub mod component;
pub mod handler;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;
