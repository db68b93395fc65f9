use crate::core::form::Field;
use crate::terminal::{CursorPos, KeyCode, KeyModifiers};
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    NotHandled,
    Submit,
}

/// What an input contributes to the frame: its lines plus the cursor
/// position relative to its own first line (when it wants one shown).
#[derive(Debug, Default, Clone)]
pub struct DrawOutput {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

pub trait Input: Send {
    fn field(&self) -> Field;
    fn label(&self) -> &str;

    fn value(&self) -> String;
    fn set_value(&mut self, value: String);

    fn is_focused(&self) -> bool;
    fn set_focused(&mut self, focused: bool);

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult;

    fn draw(&self, theme: &Theme) -> DrawOutput;

    fn delete_word(&mut self) {}
    fn delete_word_forward(&mut self) {}
}

pub struct InputBase {
    pub field: Field,
    pub label: String,
    pub focused: bool,
    pub placeholder: Option<String>,
}

impl InputBase {
    pub fn new(field: Field, label: impl Into<String>) -> Self {
        Self {
            field,
            label: label.into(),
            focused: false,
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// "› Label: " prefix shared by the single-line inputs. Returns the
    /// prefix spans and the column where content starts.
    pub fn prefix(&self, theme: &Theme) -> (SpanLine, u16) {
        let marker = if self.focused { "› " } else { "  " };
        let label_style = if self.focused {
            theme.focused_label
        } else {
            theme.label
        };
        let spans = vec![
            Span::styled(marker, theme.selection),
            Span::styled(&self.label, label_style),
            Span::new(": "),
        ];
        let col = (marker.width() + self.label.width() + 2) as u16;
        (spans, col)
    }

    /// Single content line after the shared prefix. `cursor_offset` is a
    /// display-width offset into the content; the cursor is only reported
    /// while focused.
    pub fn draw_line(
        &self,
        content: Vec<Span>,
        cursor_offset: Option<usize>,
        theme: &Theme,
    ) -> DrawOutput {
        let (mut line, content_col) = self.prefix(theme);
        line.extend(content);

        let cursor = match cursor_offset {
            Some(offset) if self.focused => Some(CursorPos {
                col: content_col.saturating_add(offset as u16),
                row: 0,
            }),
            _ => None,
        };

        DrawOutput {
            lines: vec![line],
            cursor,
        }
    }
}
