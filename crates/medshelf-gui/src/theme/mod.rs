//! Theme module for MedShelf.
//!
//! A single light theme in the clinical style: teal primary, neutral grays,
//! generous whitespace. Provides the spacing constants and widget style
//! functions the views share.

use iced::theme::Palette;
use iced::widget::button;
use iced::{Border, Color, Shadow, Theme, Vector};

// =============================================================================
// SPACING
// =============================================================================

pub const SPACING_XS: f32 = 4.0;
pub const SPACING_SM: f32 = 8.0;
pub const SPACING_MD: f32 = 16.0;
pub const SPACING_LG: f32 = 24.0;

pub const BORDER_RADIUS_SM: f32 = 4.0;
pub const BORDER_RADIUS_LG: f32 = 8.0;

/// Width of the add-medicine modal dialog.
pub const MODAL_WIDTH_MD: f32 = 480.0;

/// Cell padding for the catalog table.
pub const TABLE_CELL_PADDING_X: f32 = 12.0;
pub const TABLE_CELL_PADDING_Y: f32 = 8.0;

// =============================================================================
// COLORS
// =============================================================================

pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

pub const GRAY_50: Color = Color {
    r: 0.98,
    g: 0.98,
    b: 0.99,
    a: 1.0,
};

pub const GRAY_100: Color = Color {
    r: 0.95,
    g: 0.95,
    b: 0.96,
    a: 1.0,
};

pub const GRAY_200: Color = Color {
    r: 0.89,
    g: 0.89,
    b: 0.91,
    a: 1.0,
};

pub const GRAY_500: Color = Color {
    r: 0.55,
    g: 0.55,
    b: 0.58,
    a: 1.0,
};

pub const GRAY_600: Color = Color {
    r: 0.42,
    g: 0.42,
    b: 0.45,
    a: 1.0,
};

pub const GRAY_900: Color = Color {
    r: 0.10,
    g: 0.10,
    b: 0.12,
    a: 1.0,
};

/// Clinical teal, the primary accent.
pub const PRIMARY_500: Color = Color {
    r: 0.00,
    g: 0.61,
    b: 0.65,
    a: 1.0,
};

pub const PRIMARY_600: Color = Color {
    r: 0.00,
    g: 0.52,
    b: 0.56,
    a: 1.0,
};

pub const PRIMARY_700: Color = Color {
    r: 0.00,
    g: 0.43,
    b: 0.47,
    a: 1.0,
};

/// Semi-transparent modal backdrop.
pub const BACKDROP: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.4,
};

pub const SHADOW_STRONG: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.25,
};

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the MedShelf light theme.
pub fn medshelf_theme() -> Theme {
    Theme::custom(
        "MedShelf Light".to_string(),
        Palette {
            background: GRAY_50,
            text: GRAY_900,
            primary: PRIMARY_500,
            ..Theme::Light.palette()
        },
    )
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active => PRIMARY_500,
        button::Status::Hovered => PRIMARY_600,
        button::Status::Pressed => PRIMARY_700,
        button::Status::Disabled => GRAY_200,
    };

    button::Style {
        background: Some(background.into()),
        text_color: WHITE,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: SHADOW_STRONG,
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    }
}

/// Secondary button style - alternative actions.
pub fn button_secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => GRAY_100,
        button::Status::Pressed => GRAY_200,
        _ => WHITE,
    };

    button::Style {
        background: Some(background.into()),
        text_color: GRAY_600,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: GRAY_200,
        },
        ..Default::default()
    }
}

/// Ghost button style - low-emphasis actions (modal close, suggestion rows).
pub fn button_ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => GRAY_100,
        button::Status::Pressed => GRAY_200,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: Some(background.into()),
        text_color: GRAY_900,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}
