//! User interface rendering.

mod editor;
pub mod formatters;
mod help;
mod keymap_bar;
mod plot;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

pub use theme::ThemeColors;

/// Width of the input panel in terminal columns.
const INPUT_PANEL_WIDTH: u16 = 40;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(app.theme);

    // Fill the whole frame with the theme background first.
    f.render_widget(
        Block::default().style(Style::default().bg(colors.bg0).fg(colors.fg0)),
        f.area(),
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Keymap bar
        ])
        .split(f.area());

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(INPUT_PANEL_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    editor::draw_inputs(f, main[0], app, &colors);
    plot::draw_plot(f, main[1], app, &colors);
    status_bar::draw_status(f, rows[1], app, &colors);
    keymap_bar::draw_keymap(f, rows[2], app, &colors);

    if app.show_help {
        help::draw_help(f, &colors);
    }
}
