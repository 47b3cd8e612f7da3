//! Status bar UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub(super) fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let (text, fg) = if app.editor.is_editing() {
        (
            format!("-- INSERT -- {} | {}", app.editor.focus().title(), app.status),
            colors.orange,
        )
    } else if app.error_message.is_some() {
        (app.status.clone(), colors.red)
    } else {
        (app.status.clone(), colors.fg0)
    };

    let paragraph = Paragraph::new(text).style(Style::default().fg(fg).bg(colors.bg1));

    f.render_widget(paragraph, area);
}
