use crate::core::form::{Field, Position, visible_fields};
use crate::core::form_event::FormEvent;
use crate::core::step::Step;
use crate::input::KeyResult;
use crate::terminal::KeyEvent;

/// Focus cursor over the inputs that are visible for the current position
/// selection. Hidden inputs stay in the step and keep their values.
pub struct FormEngine {
    visible: Vec<Field>,
    focus: Option<usize>,
}

impl FormEngine {
    pub fn new(position: Position, step: &mut Step) -> Self {
        let mut engine = Self {
            visible: visible_fields(position),
            focus: None,
        };
        engine.set_focus(step, Some(0));
        engine
    }

    pub fn visible(&self) -> &[Field] {
        &self.visible
    }

    pub fn focused_field(&self) -> Option<Field> {
        self.focus.and_then(|i| self.visible.get(i)).copied()
    }

    /// Recomputes the visible field list after a position change, keeping
    /// focus on the same field when it is still shown.
    pub fn sync_visibility(&mut self, position: Position, step: &mut Step) {
        let focused = self.focused_field();
        self.visible = visible_fields(position);

        let index = match focused {
            Some(field) => self
                .visible
                .iter()
                .position(|f| *f == field)
                .or_else(|| self.focus.map(|i| i.min(self.visible.len() - 1))),
            None => None,
        };
        self.set_focus(step, index);
    }

    pub fn move_focus(&mut self, step: &mut Step, direction: isize) {
        if self.visible.is_empty() {
            return;
        }
        let current = self.focus.unwrap_or(0) as isize;
        let len = self.visible.len() as isize;
        let next = ((current + direction % len) + len) % len;
        self.set_focus(step, Some(next as usize));
    }

    /// Moves focus one field forward without wrapping. Returns false when
    /// already on the last visible field.
    pub fn advance_focus(&mut self, step: &mut Step) -> bool {
        let Some(current) = self.focus else {
            return false;
        };
        if current + 1 >= self.visible.len() {
            return false;
        }
        self.set_focus(step, Some(current + 1));
        true
    }

    pub fn focus_field(&mut self, step: &mut Step, field: Field) {
        if let Some(index) = self.visible.iter().position(|f| *f == field) {
            self.set_focus(step, Some(index));
        }
    }

    /// Routes a key to the focused input and reports what changed.
    pub fn handle_key(&mut self, step: &mut Step, key: KeyEvent) -> Vec<FormEvent> {
        let Some(field) = self.focused_field() else {
            return vec![];
        };
        let Some(input) = step.input_mut(field) else {
            return vec![];
        };

        let before = input.value();
        let result = input.handle_key(key.code, key.modifiers);
        let after = input.value();

        let mut events = Vec::new();
        if before != after {
            events.push(FormEvent::ValueChanged {
                field,
                value: after,
            });
        }
        if result == KeyResult::Submit {
            events.push(FormEvent::SubmitRequested);
        }
        events
    }

    pub fn handle_delete_word(&mut self, step: &mut Step, forward: bool) -> Vec<FormEvent> {
        let Some(field) = self.focused_field() else {
            return vec![];
        };
        let Some(input) = step.input_mut(field) else {
            return vec![];
        };

        let before = input.value();
        if forward {
            input.delete_word_forward();
        } else {
            input.delete_word();
        }
        let after = input.value();

        if before != after {
            vec![FormEvent::ValueChanged {
                field,
                value: after,
            }]
        } else {
            vec![]
        }
    }

    fn set_focus(&mut self, step: &mut Step, index: Option<usize>) {
        if let Some(field) = self.focused_field() {
            if let Some(input) = step.input_mut(field) {
                input.set_focused(false);
            }
        }

        self.focus = index;

        if let Some(field) = self.focused_field() {
            if let Some(input) = step.input_mut(field) {
                input.set_focused(true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::app::build_step;
    use crate::terminal::{KeyCode, KeyModifiers};

    fn engine_and_step(position: Position) -> (FormEngine, Step) {
        let mut step = build_step();
        let engine = FormEngine::new(position, &mut step);
        (engine, step)
    }

    #[test]
    fn base_form_hides_conditional_fields() {
        let (engine, _) = engine_and_step(Position::Unset);
        assert_eq!(
            engine.visible(),
            &[
                Field::FullName,
                Field::Email,
                Field::PhoneNumber,
                Field::Position,
                Field::Skills,
                Field::InterviewTime,
            ]
        );
    }

    #[test]
    fn first_visible_field_gets_initial_focus() {
        let (engine, step) = engine_and_step(Position::Unset);
        assert_eq!(engine.focused_field(), Some(Field::FullName));
        assert!(step.input(Field::FullName).unwrap().is_focused());
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        let (mut engine, mut step) = engine_and_step(Position::Unset);
        engine.move_focus(&mut step, -1);
        assert_eq!(engine.focused_field(), Some(Field::InterviewTime));
        engine.move_focus(&mut step, 1);
        assert_eq!(engine.focused_field(), Some(Field::FullName));
    }

    #[test]
    fn sync_visibility_keeps_focus_on_position_select() {
        let (mut engine, mut step) = engine_and_step(Position::Unset);
        engine.focus_field(&mut step, Field::Position);

        engine.sync_visibility(Position::Designer, &mut step);
        assert_eq!(engine.focused_field(), Some(Field::Position));
        assert!(engine.visible().contains(&Field::Experience));
        assert!(engine.visible().contains(&Field::PortfolioUrl));

        engine.sync_visibility(Position::Manager, &mut step);
        assert!(!engine.visible().contains(&Field::PortfolioUrl));
        assert!(engine.visible().contains(&Field::ManagementExperience));
    }

    #[test]
    fn hidden_input_keeps_its_value() {
        let (mut engine, mut step) = engine_and_step(Position::Designer);
        step.input_mut(Field::PortfolioUrl)
            .unwrap()
            .set_value("http://a.com".to_string());

        engine.sync_visibility(Position::Manager, &mut step);
        engine.sync_visibility(Position::Designer, &mut step);

        assert_eq!(
            step.input(Field::PortfolioUrl).unwrap().value(),
            "http://a.com"
        );
    }

    #[test]
    fn typing_reports_value_change() {
        let (mut engine, mut step) = engine_and_step(Position::Unset);
        let events = engine.handle_key(
            &mut step,
            KeyEvent::new(KeyCode::Char('J'), KeyModifiers::NONE),
        );
        assert_eq!(
            events,
            vec![FormEvent::ValueChanged {
                field: Field::FullName,
                value: "J".to_string(),
            }]
        );
    }

    #[test]
    fn enter_requests_submit_without_value_change() {
        let (mut engine, mut step) = engine_and_step(Position::Unset);
        let events = engine.handle_key(
            &mut step,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
        );
        assert_eq!(events, vec![FormEvent::SubmitRequested]);
    }

    #[test]
    fn advance_focus_stops_at_last_field() {
        let (mut engine, mut step) = engine_and_step(Position::Unset);
        for _ in 0..engine.visible().len() - 1 {
            assert!(engine.advance_focus(&mut step));
        }
        assert_eq!(engine.focused_field(), Some(Field::InterviewTime));
        assert!(!engine.advance_focus(&mut step));
    }
}
