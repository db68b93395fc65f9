use crate::core::form::Field;
use crate::input::Input;

/// One screen of the form: prompt, optional hint and the full input set.
/// Which inputs are actually shown is decided by the engine, not the step.
pub struct Step {
    pub prompt: String,
    pub hint: Option<String>,
    pub inputs: Vec<Box<dyn Input>>,
}

impl Step {
    pub fn new(prompt: impl Into<String>, inputs: Vec<Box<dyn Input>>) -> Self {
        Self {
            prompt: prompt.into(),
            hint: None,
            inputs,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn input(&self, field: Field) -> Option<&dyn Input> {
        self.inputs
            .iter()
            .find(|input| input.field() == field)
            .map(|input| &**input)
    }

    pub fn input_mut(&mut self, field: Field) -> Option<&mut dyn Input> {
        for input in &mut self.inputs {
            if input.field() == field {
                return Some(input.as_mut());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::app::build_step;

    #[test]
    fn lookup_by_field_reaches_the_matching_input() {
        let mut step = build_step();

        step.input_mut(Field::Email)
            .unwrap()
            .set_value("jo@x.com".to_string());
        assert_eq!(step.input(Field::Email).unwrap().value(), "jo@x.com");
    }

    #[test]
    fn lookup_of_every_field_succeeds() {
        let mut step = build_step();
        for field in Field::ALL {
            assert!(step.input(field).is_some(), "{field}");
            assert!(step.input_mut(field).is_some(), "{field}");
        }
    }
}
