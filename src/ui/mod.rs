//! User interface rendering.

mod keymap_bar;
mod page;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);
    let [page_area, status_area, keymap_area] = split_screen(f.area());

    let (width, height) = page_inner_size(page_area);
    app.resize(width, height);

    page::draw_page(f, app, page_area, &colors);
    status_bar::draw_status(f, app, status_area, &colors);
    keymap_bar::draw_keymap(f, keymap_area, &colors);
}

/// Text area (columns, rows) available to the page on a screen of `size`.
pub fn page_viewport(size: Rect) -> (usize, usize) {
    let [page_area, _, _] = split_screen(size);
    page_inner_size(page_area)
}

fn split_screen(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Page area minus its border.
fn page_inner_size(area: Rect) -> (usize, usize) {
    (
        area.width.saturating_sub(2) as usize,
        area.height.saturating_sub(2) as usize,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_excludes_bars_and_border() {
        assert_eq!(page_viewport(Rect::new(0, 0, 80, 24)), (78, 20));
        assert_eq!(page_viewport(Rect::new(0, 0, 1, 2)), (0, 0));
    }
}
