//! Page rendering.

use super::ThemeColors;
use crate::app::App;
use crate::pages::{LineKind, PageLine};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Draw the current page with its scrollbar.
pub(super) fn draw_page(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let height = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line<'_>> = app
        .layout
        .lines()
        .iter()
        .skip(app.scroll)
        .take(height)
        .map(|line| styled_line(line, colors))
        .collect();

    let title = format!(" {} ", app.layout.title);
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );
    f.render_widget(paragraph, area);

    let max_scroll = app.layout.max_scroll(height);
    if max_scroll > 0 {
        let mut state = ScrollbarState::new(max_scroll).position(app.scroll);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .style(Style::default().fg(colors.border));
        f.render_stateful_widget(scrollbar, area, &mut state);
    }
}

fn styled_line<'a>(line: &'a PageLine, colors: &ThemeColors) -> Line<'a> {
    match line.kind {
        LineKind::Heading => Line::from(Span::styled(
            line.text.as_str(),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        LineKind::Stat => Line::from(vec![
            Span::styled(line.text.as_str(), Style::default().fg(colors.label)),
            Span::styled(": ", Style::default().fg(colors.text)),
            Span::styled(
                line.value.as_deref().unwrap_or(""),
                Style::default()
                    .fg(colors.value)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        LineKind::Notice => Line::from(Span::styled(
            line.text.as_str(),
            Style::default()
                .fg(colors.notice)
                .add_modifier(Modifier::ITALIC),
        )),
        LineKind::Rule => Line::from(Span::styled(
            line.text.as_str(),
            Style::default().fg(colors.border),
        )),
        LineKind::Body | LineKind::Blank => Line::from(Span::styled(
            line.text.as_str(),
            Style::default().fg(colors.text),
        )),
    }
}
