pub mod action_bindings;
pub mod app;
pub mod event;
pub mod event_queue;
pub mod form;
pub mod form_engine;
pub mod form_event;
pub mod reducer;
pub mod state;
pub mod step;
pub mod summary;
pub mod validation;

pub use action_bindings::{ActionBindings, KeyBinding};
pub use app::App;
pub use event::Action;
pub use event_queue::{AppEvent, EventQueue};
pub use form::{
    ErrorKind, ErrorMap, Field, FieldError, FormState, FormValues, Position, SKILL_CATALOG,
    visible_fields,
};
pub use form_engine::FormEngine;
pub use form_event::FormEvent;
pub use reducer::{Effect, Reducer};
pub use state::AppState;
pub use step::Step;
