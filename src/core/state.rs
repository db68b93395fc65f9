use crate::core::form::FormState;
use crate::core::form_engine::FormEngine;
use crate::core::step::Step;

pub struct AppState {
    pub step: Step,
    pub engine: FormEngine,
    pub form: FormState,
    pub should_exit: bool,
}

impl AppState {
    pub fn new(mut step: Step) -> Self {
        let form = FormState::new();
        let engine = FormEngine::new(form.values().position, &mut step);

        Self {
            step,
            engine,
            form,
            should_exit: false,
        }
    }
}
