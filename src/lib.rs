pub mod core;
pub mod input;
pub mod terminal;
pub mod ui;

pub use self::core::{App, Field, FormState, FormValues, Position};
pub use self::core::{summary, validation};
