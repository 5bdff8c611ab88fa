//! Add-medicine modal form.
//!
//! Name field with server-backed autocomplete, the remaining text fields,
//! and the SKU type pick list. Submit appends to the in-memory catalog
//! only; nothing is written back to the server.

use iced::widget::{button, column, container, pick_list, text};
use iced::{Border, Element, Length};

use medshelf_model::{SkuType, Suggestion};

use crate::component::{FormField, modal};
use crate::message::{DraftMessage, Message};
use crate::state::AppState;
use crate::theme::{
    BORDER_RADIUS_SM, GRAY_200, GRAY_500, GRAY_600, GRAY_900, SPACING_XS, WHITE, button_ghost,
    button_primary, button_secondary,
};

/// Render the add-medicine modal on top of `base`.
pub fn view_add_modal<'a>(state: &'a AppState, base: Element<'a, Message>) -> Element<'a, Message> {
    let name_field = FormField::new("Name", &state.draft.name, "Enter medicine name", |s| {
        Message::Draft(DraftMessage::NameChanged(s))
    })
    .view();

    // Autocomplete dropdown directly beneath the name field. Shown only
    // while visible and non-empty, exactly mirroring the stored flags.
    let mut name_group = column![name_field].spacing(SPACING_XS);
    if state.suggestions_visible && !state.suggestions.is_empty() {
        name_group = name_group.push(suggestion_dropdown(&state.suggestions));
    }

    let manufacturer_field = FormField::new(
        "Manufacturer",
        &state.draft.manufacturer,
        "Enter manufacturer",
        |s| Message::Draft(DraftMessage::ManufacturerChanged(s)),
    )
    .view();

    let price_field = FormField::new("Price", &state.draft.price, "Enter price", |s| {
        Message::Draft(DraftMessage::PriceChanged(s))
    })
    .view();

    let label_field = FormField::new("Label", &state.draft.label, "Enter label", |s| {
        Message::Draft(DraftMessage::LabelChanged(s))
    })
    .view();

    let quantity_field = FormField::new("Quantity", &state.draft.quantity, "Enter quantity", |s| {
        Message::Draft(DraftMessage::QuantityChanged(s))
    })
    .view();

    let type_field = column![
        text("SKU Type").size(12).color(GRAY_600),
        pick_list(SkuType::ALL.to_vec(), state.draft.sku_type, |t| {
            Message::Draft(DraftMessage::TypeSelected(t))
        })
        .placeholder("Select type")
        .text_size(13)
        .width(Length::Fill),
    ]
    .spacing(SPACING_XS);

    let form = column![
        name_group,
        manufacturer_field,
        price_field,
        label_field,
        quantity_field,
        type_field,
    ]
    .spacing(12.0);

    let close_button: Element<'_, Message> = button(text("Close").size(13))
        .on_press(Message::Draft(DraftMessage::Cancel))
        .padding([8.0, 16.0])
        .style(button_secondary)
        .into();

    let submit_button: Element<'_, Message> = button(text("Add Medicine").size(13))
        .on_press(Message::Draft(DraftMessage::Submit))
        .padding([8.0, 16.0])
        .style(button_primary)
        .into();

    modal(
        base,
        "Add New Medicine",
        form.into(),
        Message::Draft(DraftMessage::Cancel),
        vec![close_button, submit_button],
    )
}

/// Clickable list of autocomplete results.
fn suggestion_dropdown(suggestions: &[Suggestion]) -> Element<'_, Message> {
    let mut items = column![].spacing(0);
    for (index, suggestion) in suggestions.iter().enumerate() {
        let detail = format!(
            "{} | {} | {}",
            suggestion.manufacturer, suggestion.label, suggestion.price
        );
        items = items.push(
            button(
                column![
                    text(suggestion.name.as_str()).size(13).color(GRAY_900),
                    text(detail).size(11).color(GRAY_500),
                ]
                .spacing(2.0),
            )
            .on_press(Message::Draft(DraftMessage::SuggestionSelected(index)))
            .padding([6.0, 10.0])
            .width(Length::Fill)
            .style(button_ghost),
        );
    }

    container(items)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(WHITE.into()),
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 1.0,
                color: GRAY_200,
            },
            ..Default::default()
        })
        .into()
}
