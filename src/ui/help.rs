//! Help overlay.

use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const KEYS: &[(&str, &str)] = &[
    ("i", "edit the focused field (Esc leaves insert mode)"),
    ("Tab / Shift-Tab", "focus next / previous field"),
    ("Enter", "render the scene from the input fields"),
    ("m", "toggle 2D/3D mode (resets the plot)"),
    ("h j k l / arrows", "pan the view"),
    ("+ / -", "zoom in / out"),
    ("[ / ]", "rotate camera left / right (3D)"),
    ("{ / }", "tilt camera down / up (3D)"),
    ("r", "reset pan, zoom and camera"),
    ("g", "toggle grid lines (2D)"),
    ("n", "toggle point/vector labels"),
    ("c", "cycle surface color palette"),
    ("T", "cycle theme"),
    ("x", "clear the plot"),
    ("y", "copy scene summary to clipboard"),
    ("w", "save PNG snapshot"),
    ("q", "quit"),
];

/// Draw the help overlay.
pub(super) fn draw_help(f: &mut Frame<'_>, colors: &ThemeColors) {
    let area = centered_rect(60, 80, f.area());

    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(colors.yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .style(Style::default().bg(colors.bg0));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Keys",
            Style::default()
                .fg(colors.yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (key, description) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!("{key:>18}  "), Style::default().fg(colors.green)),
            Span::styled(*description, Style::default().fg(colors.fg0)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Notation: (1,2) points, <3,4> vectors, <1,1>@(2,2) anchored, y=f(x)",
        Style::default().fg(colors.gray),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    f.render_widget(paragraph, inner);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
