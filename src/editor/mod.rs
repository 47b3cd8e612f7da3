//! Input field editing state.
//!
//! Five text fields hold the raw scene notation. One field has focus;
//! insert mode (vim-style `i`) routes keystrokes into it through a cursor
//! that tracks character positions.

/// An input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Point list, `;`-separated.
    Points,
    /// Vector list, `;`-separated.
    Vectors,
    /// Optional equation.
    Equation,
    /// Lower plot-range bound.
    RangeMin,
    /// Upper plot-range bound.
    RangeMax,
}

impl Field {
    /// All fields in focus order.
    pub const ALL: [Field; 5] = [
        Field::Points,
        Field::Vectors,
        Field::Equation,
        Field::RangeMin,
        Field::RangeMax,
    ];

    /// Field title for the input panel.
    pub fn title(self) -> &'static str {
        match self {
            Field::Points => "Points",
            Field::Vectors => "Vectors",
            Field::Equation => "Equation",
            Field::RangeMin => "Range min",
            Field::RangeMax => "Range max",
        }
    }

    fn index(self) -> usize {
        match self {
            Field::Points => 0,
            Field::Vectors => 1,
            Field::Equation => 2,
            Field::RangeMin => 3,
            Field::RangeMax => 4,
        }
    }

    /// Next field in focus order.
    pub fn next(self) -> Field {
        Field::ALL[(self.index() + 1) % Field::ALL.len()]
    }

    /// Previous field in focus order.
    pub fn prev(self) -> Field {
        Field::ALL[(self.index() + Field::ALL.len() - 1) % Field::ALL.len()]
    }
}

/// Editing state for the input panel.
#[derive(Debug)]
pub struct EditorState {
    focus: Field,
    editing: bool,
    texts: [String; 5],
    cursors: [usize; 5],
}

impl EditorState {
    /// Create the editor with the startup defaults.
    pub fn new() -> Self {
        let mut editor = Self {
            focus: Field::Points,
            editing: false,
            texts: Default::default(),
            cursors: [0; 5],
        };
        editor.set_text(Field::Points, "(1,2); (0,0); (-3,4)");
        editor.set_text(Field::Vectors, "<2,1>; <-1,2>@(1,1)");
        editor.set_text(Field::Equation, "x^2");
        editor.set_text(Field::RangeMin, "-5");
        editor.set_text(Field::RangeMax, "5");
        editor
    }

    /// Currently focused field.
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Whether insert mode is active.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Text of a field.
    pub fn text(&self, field: Field) -> &str {
        &self.texts[field.index()]
    }

    /// Replace a field's text, moving its cursor to the end.
    pub fn set_text(&mut self, field: Field, text: impl Into<String>) {
        let text = text.into();
        self.cursors[field.index()] = text.chars().count();
        self.texts[field.index()] = text;
    }

    /// Cursor position of the focused field, in characters.
    pub fn cursor(&self) -> usize {
        self.cursors[self.focus.index()]
    }

    /// Enter insert mode on the focused field.
    pub fn start_edit(&mut self) {
        self.editing = true;
    }

    /// Leave insert mode.
    pub fn stop_edit(&mut self) {
        self.editing = false;
    }

    /// Focus the next field.
    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    /// Focus the previous field.
    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let i = self.focus.index();
        let at = byte_offset(&self.texts[i], self.cursors[i]);
        self.texts[i].insert(at, c);
        self.cursors[i] += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        let i = self.focus.index();
        if self.cursors[i] == 0 {
            return;
        }
        self.cursors[i] -= 1;
        let at = byte_offset(&self.texts[i], self.cursors[i]);
        self.texts[i].remove(at);
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        let i = self.focus.index();
        let at = byte_offset(&self.texts[i], self.cursors[i]);
        if at < self.texts[i].len() {
            self.texts[i].remove(at);
        }
    }

    /// Move the cursor one character left.
    pub fn move_left(&mut self) {
        let i = self.focus.index();
        self.cursors[i] = self.cursors[i].saturating_sub(1);
    }

    /// Move the cursor one character right.
    pub fn move_right(&mut self) {
        let i = self.focus.index();
        let len = self.texts[i].chars().count();
        self.cursors[i] = (self.cursors[i] + 1).min(len);
    }

    /// Move the cursor to the start of the field.
    pub fn move_home(&mut self) {
        self.cursors[self.focus.index()] = 0;
    }

    /// Move the cursor to the end of the field.
    pub fn move_end(&mut self) {
        let i = self.focus.index();
        self.cursors[i] = self.texts[i].chars().count();
    }

    /// Empty every field.
    pub fn clear_all(&mut self) {
        for field in Field::ALL {
            self.set_text(field, "");
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset of a character position.
fn byte_offset(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_original_defaults() {
        let editor = EditorState::new();
        assert_eq!(editor.text(Field::Points), "(1,2); (0,0); (-3,4)");
        assert_eq!(editor.text(Field::Vectors), "<2,1>; <-1,2>@(1,1)");
        assert_eq!(editor.text(Field::Equation), "x^2");
        assert_eq!(editor.text(Field::RangeMin), "-5");
        assert_eq!(editor.text(Field::RangeMax), "5");
    }

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut editor = EditorState::new();
        for expected in Field::ALL {
            assert_eq!(editor.focus(), expected);
            editor.next_field();
        }
        assert_eq!(editor.focus(), Field::Points);
        editor.prev_field();
        assert_eq!(editor.focus(), Field::RangeMax);
    }

    #[test]
    fn insert_and_backspace_track_cursor() {
        let mut editor = EditorState::new();
        editor.set_text(Field::Points, "");
        editor.start_edit();
        for c in "(1,2)".chars() {
            editor.insert(c);
        }
        assert_eq!(editor.text(Field::Points), "(1,2)");
        editor.backspace();
        editor.backspace();
        assert_eq!(editor.text(Field::Points), "(1,");
        editor.insert('3');
        editor.insert(')');
        assert_eq!(editor.text(Field::Points), "(1,3)");
    }

    #[test]
    fn editing_in_the_middle() {
        let mut editor = EditorState::new();
        editor.set_text(Field::Equation, "x^2");
        editor.move_home();
        editor.move_right();
        editor.delete();
        assert_eq!(editor.text(Field::Equation), "x2");
        editor.insert('*');
        editor.insert('*');
        assert_eq!(editor.text(Field::Equation), "x**2");
        assert_eq!(editor.cursor(), 3);
    }

    #[test]
    fn cursor_is_char_based() {
        let mut editor = EditorState::new();
        editor.set_text(Field::Equation, "π");
        assert_eq!(editor.cursor(), 1);
        editor.insert('x');
        assert_eq!(editor.text(Field::Equation), "πx");
        editor.move_home();
        editor.delete();
        assert_eq!(editor.text(Field::Equation), "x");
    }

    #[test]
    fn clear_all_empties_fields() {
        let mut editor = EditorState::new();
        editor.clear_all();
        for field in Field::ALL {
            assert_eq!(editor.text(field), "");
        }
    }
}
