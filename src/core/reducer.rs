use crate::core::event::Action;
use crate::core::event_queue::AppEvent;
use crate::core::form::{Field, SKILL_CATALOG};
use crate::core::form_event::FormEvent;
use crate::core::state::AppState;

#[derive(Debug, Clone)]
pub enum Effect {
    Emit(AppEvent),
}

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, action: Action) -> Vec<Effect> {
        match action {
            Action::Exit | Action::Cancel => {
                state.should_exit = true;
                vec![]
            }
            Action::NextInput => {
                state.engine.move_focus(&mut state.step, 1);
                vec![]
            }
            Action::PrevInput => {
                state.engine.move_focus(&mut state.step, -1);
                vec![]
            }
            Action::DeleteWord => {
                let events = state.engine.handle_delete_word(&mut state.step, false);
                Self::apply_form_events(state, events)
            }
            Action::DeleteWordForward => {
                let events = state.engine.handle_delete_word(&mut state.step, true);
                Self::apply_form_events(state, events)
            }
            Action::InputKey(key_event) => {
                let events = state.engine.handle_key(&mut state.step, key_event);
                Self::apply_form_events(state, events)
            }
            Action::Submit => Self::handle_submit(state),
        }
    }

    fn apply_form_events(state: &mut AppState, events: Vec<FormEvent>) -> Vec<Effect> {
        let mut effects = Vec::new();

        for event in events {
            match event {
                FormEvent::ValueChanged { field, value } => {
                    Self::apply_value_change(state, field, value);
                }
                FormEvent::SubmitRequested => {
                    effects.push(Effect::Emit(AppEvent::Action(Action::Submit)));
                }
            }
        }

        effects
    }

    fn apply_value_change(state: &mut AppState, field: Field, value: String) {
        match field {
            Field::Skills => {
                // A single key press flips at most one catalog entry; diff
                // the reported membership against the stored set.
                for skill in SKILL_CATALOG {
                    let now = value.split(',').any(|part| part == skill);
                    let before = state.form.values().skills.contains(skill);
                    if now != before {
                        state.form.toggle_skill(skill, now);
                    }
                }
            }
            Field::Position => {
                state.form.set_field(field, value);
                let position = state.form.values().position;
                state.engine.sync_visibility(position, &mut state.step);
            }
            _ => state.form.set_field(field, value),
        }
    }

    /// Enter walks the focus forward through the visible fields; from the
    /// last one it runs the real submit: validate everything, either accept
    /// the application or focus the first offending field.
    fn handle_submit(state: &mut AppState) -> Vec<Effect> {
        if state.engine.advance_focus(&mut state.step) {
            return vec![];
        }

        if state.form.submit() {
            state.should_exit = true;
        } else if let Some(field) = state.form.errors().keys().next().copied() {
            state.engine.focus_field(&mut state.step, field);
        }

        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::app::build_step;
    use crate::core::form::Position;
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

    fn new_state() -> AppState {
        AppState::new(build_step())
    }

    fn key(state: &mut AppState, code: KeyCode) -> Vec<Effect> {
        Reducer::reduce(state, Action::InputKey(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_str(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            key(state, KeyCode::Char(ch));
        }
    }

    /// Drives Enter presses until the submit from the last field has run.
    fn submit_from_anywhere(state: &mut AppState) {
        for _ in 0..state.engine.visible().len() {
            let effects = key(state, KeyCode::Enter);
            for effect in effects {
                let Effect::Emit(AppEvent::Action(action)) = effect else {
                    panic!("reducer emitted a non-action event");
                };
                Reducer::reduce(state, action);
            }
            if state.should_exit || !state.form.errors().is_empty() {
                break;
            }
        }
    }

    fn fill_valid_application(state: &mut AppState) {
        type_str(state, "Jo");
        Reducer::reduce(state, Action::NextInput);
        type_str(state, "jo@x.com");
        Reducer::reduce(state, Action::NextInput);
        type_str(state, "5551234");
        Reducer::reduce(state, Action::NextInput);
        // Position select: first option is Developer.
        key(state, KeyCode::Right);
        Reducer::reduce(state, Action::NextInput);
        type_str(state, "3");
        Reducer::reduce(state, Action::NextInput);
        // Skills group: check the highlighted entry.
        key(state, KeyCode::Char(' '));
        Reducer::reduce(state, Action::NextInput);
        type_str(state, "202401011000");
    }

    #[test]
    fn typing_flows_into_form_values() {
        let mut state = new_state();
        type_str(&mut state, "Jo");
        assert_eq!(state.form.values().full_name, "Jo");
    }

    #[test]
    fn selecting_position_reveals_conditional_fields() {
        let mut state = new_state();
        state.engine.focus_field(&mut state.step, Field::Position);
        key(&mut state, KeyCode::Right);

        assert_eq!(state.form.values().position, Position::Developer);
        assert!(state.engine.visible().contains(&Field::Experience));
    }

    #[test]
    fn space_in_skills_group_toggles_membership() {
        let mut state = new_state();
        state.engine.focus_field(&mut state.step, Field::Skills);
        key(&mut state, KeyCode::Char(' '));
        assert!(state.form.values().skills.contains("JavaScript"));

        key(&mut state, KeyCode::Char(' '));
        assert!(state.form.values().skills.is_empty());
    }

    #[test]
    fn full_application_submits_and_exits() {
        let mut state = new_state();
        fill_valid_application(&mut state);
        submit_from_anywhere(&mut state);

        assert!(state.form.is_submitted());
        assert!(state.should_exit);
        assert!(state.form.errors().is_empty());
    }

    #[test]
    fn invalid_email_blocks_submit_and_focuses_it() {
        let mut state = new_state();
        fill_valid_application(&mut state);
        state.form.set_field(Field::Email, "bad".to_string());
        state.step
            .input_mut(Field::Email)
            .unwrap()
            .set_value("bad".to_string());
        submit_from_anywhere(&mut state);

        assert!(!state.form.is_submitted());
        assert!(!state.should_exit);
        assert_eq!(state.form.errors().len(), 1);
        assert_eq!(state.engine.focused_field(), Some(Field::Email));
    }

    #[test]
    fn enter_before_last_field_only_advances() {
        let mut state = new_state();
        let effects = key(&mut state, KeyCode::Enter);
        for effect in effects {
            let Effect::Emit(AppEvent::Action(action)) = effect else {
                panic!("reducer emitted a non-action event");
            };
            Reducer::reduce(&mut state, action);
        }
        assert_eq!(state.engine.focused_field(), Some(Field::Email));
        assert!(state.form.errors().is_empty());
    }

    #[test]
    fn cancel_leaves_form_unsubmitted() {
        let mut state = new_state();
        Reducer::reduce(&mut state, Action::Cancel);
        assert!(state.should_exit);
        assert!(!state.form.is_submitted());
    }

    #[test]
    fn switching_position_back_restores_retained_portfolio() {
        let mut state = new_state();
        state.engine.focus_field(&mut state.step, Field::Position);
        key(&mut state, KeyCode::Right);
        key(&mut state, KeyCode::Right); // Designer
        assert_eq!(state.form.values().position, Position::Designer);

        state.engine.focus_field(&mut state.step, Field::PortfolioUrl);
        type_str(&mut state, "http://a.com");

        state.engine.focus_field(&mut state.step, Field::Position);
        key(&mut state, KeyCode::Right); // Manager, portfolio hidden
        assert!(!state.engine.visible().contains(&Field::PortfolioUrl));
        assert_eq!(state.form.values().portfolio_url, "http://a.com");

        key(&mut state, KeyCode::Left); // back to Designer
        assert!(state.engine.visible().contains(&Field::PortfolioUrl));
        assert_eq!(
            state.step.input(Field::PortfolioUrl).unwrap().value(),
            "http://a.com"
        );
    }
}
