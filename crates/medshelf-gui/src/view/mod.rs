//! View functions.
//!
//! Views are pure functions of [`AppState`](crate::state::AppState); the
//! filtered catalog is re-derived on every render with no cache.

mod add_modal;
mod home;

pub use add_modal::view_add_modal;
pub use home::view_home;
