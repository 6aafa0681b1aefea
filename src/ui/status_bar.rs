//! Status bar UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draw the status bar: status text on the left, location and mode on the right.
pub(super) fn draw_status(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let style = Style::default().fg(colors.status_fg).bg(colors.status_bg);

    let mut right = app.router.current_location().to_string();
    if app.config.is_local() {
        right.push_str(" [LOCAL]");
    }
    let right = format!("{} ", right);
    let right_width = u16::try_from(right.width()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(right_width)])
        .split(area);

    f.render_widget(Paragraph::new(format!(" {}", app.status)).style(style), chunks[0]);
    f.render_widget(
        Paragraph::new(right).style(style.add_modifier(Modifier::BOLD)),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::pages::SupplySnapshot;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn location_with_wide_anchor_fits_its_width() {
        let app = App::new(
            Config::default(),
            SupplySnapshot::default(),
            "/natpaper#供給",
            40,
            10,
        )
        .unwrap();
        let colors = ThemeColors::from_theme(&app.theme);
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal
            .draw(|f| draw_status(f, &app, f.area(), &colors))
            .unwrap();

        let buffer = terminal.backend().buffer();
        // "/natpaper#供給 " is 15 columns wide, so it starts at column 25.
        assert_eq!(buffer[(1, 0)].symbol(), "/");
        assert_eq!(buffer[(24, 0)].symbol(), " ");
        assert_eq!(buffer[(25, 0)].symbol(), "/");
        assert_eq!(buffer[(35, 0)].symbol(), "供");
    }
}
