//! Reusable UI components.

mod form_field;
mod modal;

pub use form_field::FormField;
pub use modal::modal;
