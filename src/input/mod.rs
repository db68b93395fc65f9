pub mod checkbox_group;
pub mod datetime_input;
pub mod input;
pub mod select_input;
pub mod text_input;
pub mod textarea_input;

pub use checkbox_group::CheckboxGroupInput;
pub use datetime_input::DateTimeInput;
pub use input::{DrawOutput, Input, InputBase, KeyResult};
pub use select_input::SelectInput;
pub use text_input::TextInput;
pub use textarea_input::TextAreaInput;
