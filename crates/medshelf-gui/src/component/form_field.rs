//! Labeled form text field.
//!
//! The add-medicine form performs no validation: whatever the user types is
//! stored verbatim, numeric-looking fields included.

use iced::Element;
use iced::widget::{column, text, text_input};

use crate::theme::{GRAY_600, SPACING_XS};

/// A text input with a small label above it.
///
/// # Example
/// ```ignore
/// FormField::new("Manufacturer", &draft.manufacturer, "Enter manufacturer", |s| {
///     Message::Draft(DraftMessage::ManufacturerChanged(s))
/// })
/// .view()
/// ```
pub struct FormField<M> {
    label: String,
    value: String,
    placeholder: String,
    on_change: Box<dyn Fn(String) -> M>,
}

impl<M: Clone + 'static> FormField<M> {
    /// Create a new form field.
    pub fn new(
        label: impl Into<String>,
        value: &str,
        placeholder: impl Into<String>,
        on_change: impl Fn(String) -> M + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            placeholder: placeholder.into(),
            on_change: Box::new(on_change),
        }
    }

    /// Build the form field element.
    pub fn view(self) -> Element<'static, M> {
        let input = text_input(&self.placeholder, &self.value)
            .on_input(self.on_change)
            .padding([8.0, 12.0])
            .size(13);

        column![text(self.label).size(12).color(GRAY_600), input]
            .spacing(SPACING_XS)
            .into()
    }
}
