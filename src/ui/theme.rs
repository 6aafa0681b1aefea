//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Brand orange.
const PRIMARY: Color = Color::Rgb(0xF7, 0x93, 0x1A);
/// Lighter brand orange.
const PRIMARY_LIGHT: Color = Color::Rgb(0xFF, 0xA5, 0x33);
/// Darker brand orange.
const PRIMARY_DARK: Color = Color::Rgb(0xD9, 0x7B, 0x06);
/// Mint accent.
const SECONDARY: Color = Color::Rgb(0x00, 0xFF, 0x94);
/// Lighter mint accent.
const SECONDARY_LIGHT: Color = Color::Rgb(0x33, 0xFF, 0xA8);
/// Darker mint accent.
const SECONDARY_DARK: Color = Color::Rgb(0x00, 0xCC, 0x77);
/// Page background.
const DARK: Color = Color::Rgb(0x11, 0x11, 0x11);
/// Raised background.
const DARK_LIGHTER: Color = Color::Rgb(0x1A, 0x1A, 0x1A);
/// Card background.
const DARK_CARD: Color = Color::Rgb(0x22, 0x22, 0x22);

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Value text color.
    pub value: Color,
    /// Border color.
    pub border: Color,
    /// Local-mode notice color.
    pub notice: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Keymap bar background color.
    pub keymap_bg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::Orange => Self {
                bg: DARK,
                text: Color::Rgb(0xE5, 0xE5, 0xE5),
                heading: PRIMARY,
                label: PRIMARY_LIGHT,
                value: SECONDARY,
                border: PRIMARY_DARK,
                notice: SECONDARY_LIGHT,
                status_fg: DARK,
                status_bg: PRIMARY,
                keymap_bg: DARK_LIGHTER,
            },
            Theme::Mint => Self {
                bg: DARK,
                text: Color::Rgb(0xE5, 0xE5, 0xE5),
                heading: SECONDARY,
                label: SECONDARY_LIGHT,
                value: PRIMARY,
                border: SECONDARY_DARK,
                notice: PRIMARY_LIGHT,
                status_fg: DARK,
                status_bg: SECONDARY,
                keymap_bg: DARK_CARD,
            },
        }
    }
}
