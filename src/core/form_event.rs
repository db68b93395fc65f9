use crate::core::form::Field;

/// What the engine observed while routing a key to the focused input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    ValueChanged { field: Field, value: String },
    SubmitRequested,
}
