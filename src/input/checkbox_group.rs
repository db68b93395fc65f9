use crate::core::form::Field;
use crate::input::input::{DrawOutput, Input, InputBase, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::ui::theme::Theme;
use indexmap::IndexSet;

/// Multi-select over a fixed catalog. Space toggles the highlighted entry,
/// Up/Down moves within the group.
pub struct CheckboxGroupInput {
    base: InputBase,
    options: Vec<String>,
    checked: IndexSet<String>,
    highlighted: usize,
}

impl CheckboxGroupInput {
    pub fn new(field: Field, label: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            base: InputBase::new(field, label),
            options,
            checked: IndexSet::new(),
            highlighted: 0,
        }
    }

    fn toggle_highlighted(&mut self) {
        let Some(option) = self.options.get(self.highlighted) else {
            return;
        };
        if !self.checked.insert(option.clone()) {
            self.checked.shift_remove(option);
        }
    }

    fn move_up(&mut self) -> KeyResult {
        if self.highlighted == 0 {
            return KeyResult::NotHandled;
        }
        self.highlighted -= 1;
        KeyResult::Handled
    }

    fn move_down(&mut self) -> KeyResult {
        if self.highlighted + 1 >= self.options.len() {
            return KeyResult::NotHandled;
        }
        self.highlighted += 1;
        KeyResult::Handled
    }
}

impl Input for CheckboxGroupInput {
    fn field(&self) -> Field {
        self.base.field
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    /// Checked options joined with commas, in insertion order.
    fn value(&self) -> String {
        self.checked
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    fn set_value(&mut self, value: String) {
        self.checked = value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .filter(|part| self.options.iter().any(|opt| opt == part))
            .map(str::to_string)
            .collect();
    }

    fn is_focused(&self) -> bool {
        self.base.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.focused = focused;
    }

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Char(' ') => {
                self.toggle_highlighted();
                KeyResult::Handled
            }
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn draw(&self, theme: &Theme) -> DrawOutput {
        let (prefix, _) = self.base.prefix(theme);
        let mut lines = vec![prefix];

        for (i, option) in self.options.iter().enumerate() {
            let highlighted = self.base.focused && i == self.highlighted;
            let marker = if highlighted { "  › " } else { "    " };
            let (symbol, symbol_style) = if self.checked.contains(option) {
                ("[x] ", Style::new().with_color(Color::Green))
            } else {
                ("[ ] ", Style::new())
            };
            let option_style = if highlighted {
                theme.selection
            } else {
                Style::new()
            };

            lines.push(vec![
                Span::styled(marker, theme.selection),
                Span::styled(symbol, symbol_style),
                Span::styled(option, option_style),
            ]);
        }

        DrawOutput {
            lines,
            cursor: None,
        }
    }
}
