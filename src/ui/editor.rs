//! Input panel - mode, range, points, vectors and equation fields.

use crate::app::App;
use crate::editor::Field;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Draw the input panel.
pub(super) fn draw_inputs(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let block = Block::default()
        .title(" Inputs ")
        .title_style(Style::default().fg(colors.yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Mode
            Constraint::Length(3), // Points
            Constraint::Length(1), // Points hint
            Constraint::Length(3), // Vectors
            Constraint::Length(1), // Vectors hint
            Constraint::Length(3), // Equation
            Constraint::Length(1), // Equation hint
            Constraint::Length(3), // Range
            Constraint::Min(0),    // Message area
        ])
        .split(inner);

    // Mode line
    let mode_line = Line::from(vec![
        Span::styled("Mode: ", Style::default().fg(colors.green)),
        Span::styled(
            app.mode.name(),
            Style::default()
                .fg(colors.fg0)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (m toggles)", Style::default().fg(colors.gray)),
    ]);
    f.render_widget(Paragraph::new(mode_line), chunks[0]);

    draw_field(f, chunks[1], app, Field::Points, colors);
    draw_hint(f, chunks[2], "(a,b); (c,d)  separate with ;", colors);
    draw_field(f, chunks[3], app, Field::Vectors, colors);
    draw_hint(f, chunks[4], "<vx,vy> or <vx,vy>@(tx,ty)", colors);
    draw_field(f, chunks[5], app, Field::Equation, colors);
    draw_hint(f, chunks[6], "2D: y=f(x)   3D: z=f(x,y)", colors);

    // Range min/max side by side
    let range_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[7]);
    draw_field(f, range_row[0], app, Field::RangeMin, colors);
    draw_field(f, range_row[1], app, Field::RangeMax, colors);

    draw_message(f, chunks[8], app, colors);
}

/// Draw one input field with focus/insert highlighting.
fn draw_field(f: &mut Frame<'_>, area: Rect, app: &App, field: Field, colors: &ThemeColors) {
    let focused = app.editor.focus() == field;
    let editing = focused && app.editor.is_editing();

    let border_style = if editing {
        Style::default().fg(colors.orange)
    } else if focused {
        Style::default().fg(colors.yellow)
    } else {
        Style::default().fg(colors.bg2)
    };

    let block = Block::default()
        .title(field.title())
        .title_style(if focused {
            Style::default().fg(colors.yellow)
        } else {
            Style::default().fg(colors.green)
        })
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let text = app.editor.text(field);
    let cursor = if focused { app.editor.cursor() } else { 0 };
    let (visible, cursor_col) = visible_window(text, cursor, inner.width as usize);

    f.render_widget(
        Paragraph::new(visible).style(Style::default().fg(colors.fg0)),
        inner,
    );

    if editing {
        f.set_cursor_position(Position::new(inner.x + cursor_col, inner.y));
    }
}

fn draw_hint(f: &mut Frame<'_>, area: Rect, hint: &str, colors: &ThemeColors) {
    f.render_widget(
        Paragraph::new(format!("  {hint}")).style(Style::default().fg(colors.gray)),
        area,
    );
}

/// Error message or idle hint below the fields.
fn draw_message(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    if area.height == 0 {
        return;
    }
    let paragraph = match app.error_message {
        Some(ref error) => Paragraph::new(error.as_str())
            .style(Style::default().fg(colors.red))
            .wrap(Wrap { trim: true }),
        None => Paragraph::new("Enter renders, ? shows all keys.")
            .style(Style::default().fg(colors.gray))
            .wrap(Wrap { trim: true }),
    };
    f.render_widget(paragraph, area);
}

/// Horizontally scroll `text` so the cursor stays visible in `width`
/// columns. Returns the visible slice and the cursor's column offset.
fn visible_window(text: &str, cursor_chars: usize, width: usize) -> (String, u16) {
    if width == 0 {
        return (String::new(), 0);
    }

    // Display-column positions of every character boundary.
    let mut columns = vec![0usize];
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        columns.push(columns.last().copied().unwrap_or(0) + w);
    }
    let cursor_chars = cursor_chars.min(columns.len() - 1);
    let cursor_col = columns[cursor_chars];

    // Keep one spare column for the cursor itself.
    let avail = width.saturating_sub(1).max(1);
    let start_col = cursor_col.saturating_sub(avail);

    let mut visible = String::new();
    for (i, c) in text.chars().enumerate() {
        let col = columns[i];
        if col < start_col {
            continue;
        }
        if col + UnicodeWidthChar::width(c).unwrap_or(0) > start_col + width {
            break;
        }
        visible.push(c);
    }

    (visible, (cursor_col - start_col) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unscrolled() {
        let (visible, col) = visible_window("x^2", 3, 20);
        assert_eq!(visible, "x^2");
        assert_eq!(col, 3);
    }

    #[test]
    fn long_text_scrolls_to_cursor() {
        let text = "0123456789";
        let (visible, col) = visible_window(text, 10, 6);
        assert_eq!(col, 5);
        assert_eq!(visible, "56789");
    }

    #[test]
    fn cursor_at_start_shows_prefix() {
        let (visible, col) = visible_window("0123456789", 0, 6);
        assert_eq!(col, 0);
        assert_eq!(visible, "012345");
    }
}
