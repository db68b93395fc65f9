use crate::core::action_bindings::ActionBindings;
use crate::core::event::Action;
use crate::core::event_queue::{AppEvent, EventQueue};
use crate::core::form::{Field, FormValues, Position, SKILL_CATALOG};
use crate::core::reducer::{Effect, Reducer};
use crate::core::state::AppState;
use crate::core::step::Step;
use crate::input::{CheckboxGroupInput, DateTimeInput, SelectInput, TextAreaInput, TextInput};
use crate::terminal::{KeyEvent, Terminal};
use crate::ui::renderer::{self, Renderer};
use crate::ui::theme::Theme;
use std::io;

pub struct App {
    pub state: AppState,
    pub renderer: Renderer,
    bindings: ActionBindings,
    queue: EventQueue,
    theme: Theme,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::new(build_step()),
            renderer: Renderer::new(),
            bindings: ActionBindings::new(),
            queue: EventQueue::new(),
            theme: Theme::default_theme(),
        }
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) {
        self.queue.emit(AppEvent::Key(key_event));
    }

    /// Drains the queue, including any events the reducer emitted while
    /// processing. Returns true when anything was handled.
    pub fn tick(&mut self) -> bool {
        let mut processed_any = false;
        while let Some(event) = self.queue.next() {
            self.dispatch(event);
            processed_any = true;
        }
        processed_any
    }

    pub fn render(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        let frame = renderer::build_frame(&self.state, &self.theme, terminal.size().width);
        self.renderer.draw(&frame, terminal)
    }

    pub fn should_exit(&self) -> bool {
        self.state.should_exit
    }

    pub fn is_submitted(&self) -> bool {
        self.state.form.is_submitted()
    }

    pub fn values(&self) -> &FormValues {
        self.state.form.values()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key_event) => {
                let action = self
                    .bindings
                    .handle_key(&key_event)
                    .unwrap_or(Action::InputKey(key_event));
                let effects = Reducer::reduce(&mut self.state, action);
                self.apply_effects(effects);
            }
            AppEvent::Action(action) => {
                let effects = Reducer::reduce(&mut self.state, action);
                self.apply_effects(effects);
            }
        }
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Emit(event) => self.queue.emit(event),
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_step() -> Step {
    Step::new(
        "Job Application Form",
        vec![
            Box::new(TextInput::new(Field::FullName, "Full Name")),
            Box::new(
                TextInput::new(Field::Email, "Email").with_placeholder("name@example.com"),
            ),
            Box::new(
                TextInput::new(Field::PhoneNumber, "Phone Number").with_placeholder("digits only"),
            ),
            Box::new(SelectInput::new(
                Field::Position,
                "Applying for Position",
                Position::OPTIONS
                    .iter()
                    .map(|p| p.as_str().to_string())
                    .collect(),
            )),
            Box::new(
                TextInput::new(Field::Experience, "Relevant Experience (years)")
                    .with_placeholder("e.g. 3"),
            ),
            Box::new(
                TextInput::new(Field::PortfolioUrl, "Portfolio URL")
                    .with_placeholder("https://..."),
            ),
            Box::new(
                TextAreaInput::new(Field::ManagementExperience, "Management Experience")
                    .with_placeholder("teams led, for how long, ..."),
            ),
            Box::new(CheckboxGroupInput::new(
                Field::Skills,
                "Additional Skills",
                SKILL_CATALOG.iter().map(|s| s.to_string()).collect(),
            )),
            Box::new(DateTimeInput::new(
                Field::InterviewTime,
                "Preferred Interview Time",
            )),
        ],
    )
    .with_hint("Tab/Shift+Tab move · ←/→ pick · Space checks · Enter continues · Esc cancels")
}
