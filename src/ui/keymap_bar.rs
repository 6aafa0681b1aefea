//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

const KEYMAP_TEXT: &str =
    "q:quit | jk:scroll | gG:top/bottom | 1/2:home/paper | Tab:section | b/f:back/fwd | y:copy | T:theme";

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph =
        Paragraph::new(KEYMAP_TEXT).style(Style::default().fg(colors.text).bg(colors.keymap_bg));

    f.render_widget(paragraph, area);
}
