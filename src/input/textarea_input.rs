use crate::core::form::Field;
use crate::input::input::{DrawOutput, Input, InputBase, KeyResult};
use crate::terminal::{CursorPos, KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthChar;

const INDENT: &str = "    ";

/// Multi-line free text. Enter inserts a newline, so submission happens
/// from another field (Tab away, then Enter).
pub struct TextAreaInput {
    base: InputBase,
    /// Invariant: always at least one line.
    lines: Vec<String>,
    row: usize,
    /// Char index within `lines[row]`.
    col: usize,
}

impl TextAreaInput {
    pub fn new(field: Field, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(field, label),
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.base = self.base.with_placeholder(placeholder);
        self
    }

    fn char_count(line: &str) -> usize {
        line.chars().count()
    }

    fn byte_index(line: &str, char_pos: usize) -> usize {
        line.char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }

    fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    fn insert_char(&mut self, ch: char) {
        let byte = Self::byte_index(&self.lines[self.row], self.col);
        self.lines[self.row].insert(byte, ch);
        self.col += 1;
    }

    /// Split the current line at the cursor; the right half becomes a new
    /// line below.
    fn split_line(&mut self) {
        let byte = Self::byte_index(&self.lines[self.row], self.col);
        let rest = self.lines[self.row][byte..].to_string();
        self.lines[self.row].truncate(byte);
        self.row += 1;
        self.col = 0;
        self.lines.insert(self.row, rest);
    }

    fn backspace(&mut self) {
        if self.col > 0 {
            let byte = Self::byte_index(&self.lines[self.row], self.col - 1);
            self.lines[self.row].remove(byte);
            self.col -= 1;
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = Self::char_count(&self.lines[self.row]);
            self.lines[self.row].push_str(&current);
        }
    }

    fn delete(&mut self) {
        if self.col < Self::char_count(&self.lines[self.row]) {
            let byte = Self::byte_index(&self.lines[self.row], self.col);
            self.lines[self.row].remove(byte);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    fn move_up(&mut self) -> KeyResult {
        if self.row == 0 {
            return KeyResult::NotHandled;
        }
        self.row -= 1;
        self.col = self.col.min(Self::char_count(&self.lines[self.row]));
        KeyResult::Handled
    }

    fn move_down(&mut self) -> KeyResult {
        if self.row + 1 >= self.lines.len() {
            return KeyResult::NotHandled;
        }
        self.row += 1;
        self.col = self.col.min(Self::char_count(&self.lines[self.row]));
        KeyResult::Handled
    }

    fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = Self::char_count(&self.lines[self.row]);
        }
    }

    fn move_right(&mut self) {
        if self.col < Self::char_count(&self.lines[self.row]) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    fn cursor_col(&self) -> usize {
        self.lines[self.row]
            .chars()
            .take(self.col)
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }
}

impl Input for TextAreaInput {
    fn field(&self) -> Field {
        self.base.field
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            self.lines.join("\n")
        }
    }

    fn set_value(&mut self, value: String) {
        self.lines = value.split('\n').map(str::to_string).collect();
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.row = self.lines.len() - 1;
        self.col = Self::char_count(&self.lines[self.row]);
    }

    fn is_focused(&self) -> bool {
        self.base.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.focused = focused;
    }

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Char(ch) => {
                self.insert_char(ch);
                KeyResult::Handled
            }
            KeyCode::Enter => {
                self.split_line();
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                self.backspace();
                KeyResult::Handled
            }
            KeyCode::Delete => {
                self.delete();
                KeyResult::Handled
            }
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Left => {
                self.move_left();
                KeyResult::Handled
            }
            KeyCode::Right => {
                self.move_right();
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.col = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.col = Self::char_count(&self.lines[self.row]);
                KeyResult::Handled
            }
            _ => KeyResult::NotHandled,
        }
    }

    fn draw(&self, theme: &Theme) -> DrawOutput {
        let (prefix, _) = self.base.prefix(theme);
        let mut lines = vec![prefix];

        if self.is_empty() && !self.base.focused {
            if let Some(placeholder) = &self.base.placeholder {
                lines.push(vec![
                    Span::new(INDENT),
                    Span::styled(placeholder, theme.placeholder),
                ]);
            }
        } else {
            for line in &self.lines {
                lines.push(vec![Span::new(INDENT), Span::new(line)]);
            }
        }

        let cursor = if self.base.focused {
            Some(CursorPos {
                col: (INDENT.len() + self.cursor_col()) as u16,
                row: (1 + self.row) as u16,
            })
        } else {
            None
        };

        DrawOutput { lines, cursor }
    }
}
