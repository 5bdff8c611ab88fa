//! Main catalog screen.
//!
//! Search box and "Add Medicine" button on top, the filtered medicine table
//! below. No pagination: the backend serves one fixed page and client
//! additions are appended to it.

use iced::widget::{button, column, container, row, rule, scrollable, text, text_input};
use iced::{Alignment, Element, Length};

use medshelf_model::Medicine;

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{
    GRAY_100, GRAY_200, GRAY_500, GRAY_600, GRAY_900, SPACING_LG, SPACING_MD,
    TABLE_CELL_PADDING_X, TABLE_CELL_PADDING_Y, WHITE, button_primary,
};

/// Column headers with proportional widths.
const COLUMNS: [(&str, u16); 6] = [
    ("Name", 3),
    ("Manufacturer", 3),
    ("Price", 1),
    ("Label", 2),
    ("Quantity", 1),
    ("Type", 2),
];

/// Render the main catalog screen.
pub fn view_home(state: &AppState) -> Element<'_, Message> {
    let search = text_input("Search medicines...", &state.search_term)
        .on_input(Message::SearchChanged)
        .padding([8.0, 12.0])
        .size(14)
        .width(Length::Fill);

    let add_button = button(text("Add Medicine").size(14))
        .on_press(Message::OpenAddModal)
        .padding([8.0, 16.0])
        .style(button_primary);

    let toolbar = row![search, add_button]
        .spacing(SPACING_MD)
        .align_y(Alignment::Center);

    let body: Element<'_, Message> = if state.is_loading {
        container(text("Loading catalog...").size(13).color(GRAY_500))
            .padding(SPACING_LG)
            .into()
    } else {
        medicine_table(state.filtered_catalog())
    };

    column![toolbar, body]
        .spacing(SPACING_MD)
        .padding(SPACING_LG)
        .into()
}

/// The medicine table over the filtered catalog.
fn medicine_table(medicines: Vec<&Medicine>) -> Element<'_, Message> {
    // Header row
    let mut header = row![].spacing(0);
    for (label, portion) in COLUMNS {
        header = header.push(
            container(text(label).size(12).color(GRAY_600))
                .width(Length::FillPortion(portion))
                .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
                .style(|_theme| container::Style {
                    background: Some(GRAY_100.into()),
                    ..Default::default()
                }),
        );
    }

    // Data rows
    let mut data_rows = column![].spacing(0);
    if medicines.is_empty() {
        data_rows = data_rows.push(
            container(text("No medicines to show").size(13).color(GRAY_500))
                .width(Length::Fill)
                .padding(SPACING_LG)
                .center_x(Length::Fill),
        );
    }
    for (row_idx, medicine) in medicines.into_iter().enumerate() {
        let cells: [&str; 6] = [
            &medicine.name,
            &medicine.manufacturer,
            &medicine.price,
            &medicine.label,
            &medicine.quantity,
            medicine.sku_type.map(|t| t.as_str()).unwrap_or(""),
        ];

        let is_even = row_idx % 2 == 0;
        let mut data_row = row![].spacing(0);
        for (cell, (_, portion)) in cells.into_iter().zip(COLUMNS) {
            data_row = data_row.push(
                container(text(cell).size(13).color(GRAY_900))
                    .width(Length::FillPortion(portion))
                    .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
                    .style(move |_theme| container::Style {
                        background: Some(if is_even { WHITE } else { GRAY_100 }.into()),
                        ..Default::default()
                    }),
            );
        }
        data_rows = data_rows.push(data_row);
    }

    column![
        header,
        rule::horizontal(1).style(|_theme| rule::Style {
            color: GRAY_200,
            radius: 0.0.into(),
            fill_mode: rule::FillMode::Full,
            snap: true,
        }),
        scrollable(data_rows).height(Length::Fill),
    ]
    .spacing(0)
    .into()
}
