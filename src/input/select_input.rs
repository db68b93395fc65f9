use crate::core::form::Field;
use crate::input::input::{DrawOutput, Input, InputBase, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;

/// Fixed-option select; Left/Right cycles, nothing is preselected.
pub struct SelectInput {
    base: InputBase,
    options: Vec<String>,
    selected: Option<usize>,
}

impl SelectInput {
    pub fn new(field: Field, label: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            base: InputBase::new(field, label).with_placeholder("Select"),
            options,
            selected: None,
        }
    }

    fn current_option(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    fn move_prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len();
        self.selected = Some(match self.selected {
            None => len - 1,
            Some(i) => (i + len - 1) % len,
        });
    }

    fn move_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len();
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1) % len,
        });
    }
}

impl Input for SelectInput {
    fn field(&self) -> Field {
        self.base.field
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> String {
        self.current_option().unwrap_or("").to_string()
    }

    fn set_value(&mut self, value: String) {
        self.selected = self.options.iter().position(|opt| *opt == value);
    }

    fn is_focused(&self) -> bool {
        self.base.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.focused = focused;
    }

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Left => {
                self.move_prev();
                KeyResult::Handled
            }
            KeyCode::Right => {
                self.move_next();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn draw(&self, theme: &Theme) -> DrawOutput {
        let content = match self.current_option() {
            Some(option) if self.base.focused => {
                vec![Span::styled(format!("‹ {} ›", option), theme.selection)]
            }
            Some(option) => vec![Span::new(option)],
            None => {
                let placeholder = self.base.placeholder.as_deref().unwrap_or("");
                let text = if self.base.focused {
                    format!("‹ {} ›", placeholder)
                } else {
                    placeholder.to_string()
                };
                vec![Span::styled(text, theme.placeholder)]
            }
        };

        self.base.draw_line(content, None, theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position_select() -> SelectInput {
        SelectInput::new(
            Field::Position,
            "Applying for Position",
            vec![
                "Developer".to_string(),
                "Designer".to_string(),
                "Manager".to_string(),
            ],
        )
    }

    #[test]
    fn starts_unselected() {
        assert_eq!(position_select().value(), "");
    }

    #[test]
    fn right_cycles_forward_and_wraps() {
        let mut select = position_select();
        select.handle_key(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(select.value(), "Developer");
        select.handle_key(KeyCode::Right, KeyModifiers::NONE);
        select.handle_key(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(select.value(), "Manager");
        select.handle_key(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(select.value(), "Developer");
    }

    #[test]
    fn left_from_unselected_picks_last() {
        let mut select = position_select();
        select.handle_key(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(select.value(), "Manager");
    }

    #[test]
    fn set_value_selects_matching_option() {
        let mut select = position_select();
        select.set_value("Designer".to_string());
        assert_eq!(select.value(), "Designer");

        select.set_value("Astronaut".to_string());
        assert_eq!(select.value(), "");
    }
}
