//! Keymap help bar UI component.

use crate::app::App;
use crate::scene::PlotMode;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let keymap_text = if app.show_help {
        "Esc/q/?:close help"
    } else if app.editor.is_editing() {
        "Esc:done | Enter:render | Tab:next field | ←→:cursor | Backspace/Del:delete"
    } else if app.mode == PlotMode::ThreeD {
        "q:quit | i:edit | Enter:render | m:2D | hjkl:pan | +-:zoom | []:yaw | {}:pitch | c:palette | w:save | ?:help"
    } else {
        "q:quit | i:edit | Tab:field | Enter:render | m:3D | hjkl:pan | +-:zoom | g:grid | w:save | y:copy | ?:help"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.fg0).bg(colors.bg0));

    f.render_widget(paragraph, area);
}
