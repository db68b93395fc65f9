use crate::core::validation;
use indexmap::{IndexMap, IndexSet};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Skills offered by the checkbox group. Membership in `FormValues::skills`
/// is restricted to this catalog.
pub const SKILL_CATALOG: [&str; 3] = ["JavaScript", "CSS", "Python"];

/// The fixed field set of the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    PhoneNumber,
    Position,
    Experience,
    PortfolioUrl,
    ManagementExperience,
    Skills,
    InterviewTime,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::FullName,
        Field::Email,
        Field::PhoneNumber,
        Field::Position,
        Field::Experience,
        Field::PortfolioUrl,
        Field::ManagementExperience,
        Field::Skills,
        Field::InterviewTime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::Position => "position",
            Field::Experience => "experience",
            Field::PortfolioUrl => "portfolioUrl",
            Field::ManagementExperience => "managementExperience",
            Field::Skills => "skills",
            Field::InterviewTime => "interviewTime",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Unset,
    Developer,
    Designer,
    Manager,
}

impl Position {
    /// Options shown by the select input, in display order.
    pub const OPTIONS: [Position; 3] = [Position::Developer, Position::Designer, Position::Manager];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Unset => "",
            Position::Developer => "Developer",
            Position::Designer => "Designer",
            Position::Manager => "Manager",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "Developer" => Position::Developer,
            "Designer" => Position::Designer,
            "Manager" => Position::Manager,
            _ => Position::Unset,
        }
    }

    pub fn needs_experience(self) -> bool {
        matches!(self, Position::Developer | Position::Designer)
    }

    pub fn needs_portfolio(self) -> bool {
        self == Position::Designer
    }

    pub fn is_manager(self) -> bool {
        self == Position::Manager
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Fields shown for the given position selection. Hidden fields keep their
/// values; only visibility changes.
pub fn visible_fields(position: Position) -> Vec<Field> {
    let mut fields = vec![
        Field::FullName,
        Field::Email,
        Field::PhoneNumber,
        Field::Position,
    ];
    if position.needs_experience() {
        fields.push(Field::Experience);
    }
    if position.needs_portfolio() {
        fields.push(Field::PortfolioUrl);
    }
    if position.is_manager() {
        fields.push(Field::ManagementExperience);
    }
    fields.push(Field::Skills);
    fields.push(Field::InterviewTime);
    fields
}

/// Everything the applicant has entered, plus the `submitted` flag.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub position: Position,
    pub experience: String,
    pub portfolio_url: String,
    pub management_experience: String,
    pub skills: IndexSet<String>,
    pub interview_time: String,
    pub submitted: bool,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites a scalar field. Validation is deferred to submit.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Email => self.email = value,
            Field::PhoneNumber => self.phone_number = value,
            Field::Position => self.position = Position::from_str(&value),
            Field::Experience => self.experience = value,
            Field::PortfolioUrl => self.portfolio_url = value,
            Field::ManagementExperience => self.management_experience = value,
            Field::InterviewTime => self.interview_time = value,
            // Skill membership is edited through FormState::toggle_skill.
            Field::Skills => {}
        }
    }

    pub fn skills_joined(&self) -> String {
        self.skills
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Serialize for FormValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("FormValues", 10)?;
        s.serialize_field("fullName", &self.full_name)?;
        s.serialize_field("email", &self.email)?;
        s.serialize_field("phoneNumber", &self.phone_number)?;
        s.serialize_field("position", &self.position)?;
        s.serialize_field("experience", &self.experience)?;
        s.serialize_field("portfolioUrl", &self.portfolio_url)?;
        s.serialize_field("managementExperience", &self.management_experience)?;
        s.serialize_field("skills", &self.skills)?;
        s.serialize_field("interviewTime", &self.interview_time)?;
        s.serialize_field("submitted", &self.submitted)?;
        s.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Field is empty but required in the current position context.
    Required,
    /// Field is non-empty but fails a format or range check.
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn required(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Required,
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Invalid,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Field-keyed error messages from the most recent submit attempt,
/// replaced wholesale each time.
pub type ErrorMap = IndexMap<Field, FieldError>;

/// Current field values plus the errors of the last submit attempt.
#[derive(Debug, Default)]
pub struct FormState {
    values: FormValues,
    errors: ErrorMap,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn is_submitted(&self) -> bool {
        self.values.submitted
    }

    /// Overwrites a scalar field without any validation side effect.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.values.set_field(field, value);
    }

    /// Adds or removes a skill. Insertion order is preserved, but only
    /// membership is meaningful.
    pub fn toggle_skill(&mut self, skill: &str, checked: bool) {
        if checked {
            self.values.skills.insert(skill.to_string());
        } else {
            self.values.skills.shift_remove(skill);
        }
    }

    /// Runs the validator and replaces the error map with its result.
    /// Returns true when the form was accepted; only then is `submitted`
    /// set.
    pub fn submit(&mut self) -> bool {
        self.errors = validation::validate(&self.values);
        if self.errors.is_empty() {
            self.values.submitted = true;
        }
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_values(state: &mut FormState) {
        state.set_field(Field::FullName, "Jo".to_string());
        state.set_field(Field::Email, "jo@x.com".to_string());
        state.set_field(Field::PhoneNumber, "5551234".to_string());
        state.set_field(Field::Position, "Developer".to_string());
        state.set_field(Field::Experience, "3".to_string());
        state.toggle_skill("JavaScript", true);
        state.set_field(Field::InterviewTime, "2024-01-01T10:00".to_string());
    }

    #[test]
    fn submit_with_valid_values_sets_submitted() {
        let mut state = FormState::new();
        complete_values(&mut state);

        assert!(state.submit());
        assert!(state.is_submitted());
        assert!(state.errors().is_empty());
    }

    #[test]
    fn submit_with_bad_email_reports_only_email() {
        let mut state = FormState::new();
        complete_values(&mut state);
        state.set_field(Field::Email, "bad".to_string());

        assert!(!state.submit());
        assert!(!state.is_submitted());
        assert_eq!(state.errors().len(), 1);
        let error = state.error(Field::Email).expect("email error");
        assert_eq!(error.kind, ErrorKind::Invalid);
        assert_eq!(error.message, "Email address is invalid.");
    }

    #[test]
    fn submitted_tracks_latest_validation_pass() {
        let mut state = FormState::new();
        assert!(!state.submit());
        assert!(!state.is_submitted());

        complete_values(&mut state);
        assert!(state.submit());
        assert!(state.is_submitted());
    }

    #[test]
    fn error_map_is_replaced_wholesale() {
        let mut state = FormState::new();
        assert!(!state.submit());
        assert!(state.error(Field::FullName).is_some());

        complete_values(&mut state);
        state.set_field(Field::Email, "bad".to_string());
        assert!(!state.submit());

        // Full name was fixed; its stale error must be gone.
        assert!(state.error(Field::FullName).is_none());
        assert!(state.error(Field::Email).is_some());
    }

    #[test]
    fn toggle_skill_round_trip_restores_set() {
        let mut state = FormState::new();
        state.toggle_skill("JavaScript", true);
        let before = state.values().skills.clone();

        state.toggle_skill("Python", true);
        state.toggle_skill("Python", false);

        assert_eq!(state.values().skills, before);
    }

    #[test]
    fn toggle_skill_is_idempotent() {
        let mut state = FormState::new();
        state.toggle_skill("CSS", true);
        state.toggle_skill("CSS", true);
        assert_eq!(state.values().skills.len(), 1);

        state.toggle_skill("CSS", false);
        state.toggle_skill("CSS", false);
        assert!(state.values().skills.is_empty());
    }

    #[test]
    fn hidden_fields_retain_their_values() {
        let mut state = FormState::new();
        state.set_field(Field::Position, "Designer".to_string());
        state.set_field(Field::PortfolioUrl, "http://a.com".to_string());

        // Switching away does not clear the portfolio URL.
        state.set_field(Field::Position, "Manager".to_string());
        assert_eq!(state.values().portfolio_url, "http://a.com");

        state.set_field(Field::Position, "Designer".to_string());
        assert_eq!(state.values().portfolio_url, "http://a.com");
    }

    #[test]
    fn visible_fields_follow_position() {
        let base = visible_fields(Position::Unset);
        assert!(!base.contains(&Field::Experience));
        assert!(!base.contains(&Field::PortfolioUrl));
        assert!(!base.contains(&Field::ManagementExperience));

        let developer = visible_fields(Position::Developer);
        assert!(developer.contains(&Field::Experience));
        assert!(!developer.contains(&Field::PortfolioUrl));

        let designer = visible_fields(Position::Designer);
        assert!(designer.contains(&Field::Experience));
        assert!(designer.contains(&Field::PortfolioUrl));

        let manager = visible_fields(Position::Manager);
        assert!(!manager.contains(&Field::Experience));
        assert!(manager.contains(&Field::ManagementExperience));
    }

    #[test]
    fn values_serialize_with_camel_case_names() {
        let mut state = FormState::new();
        complete_values(&mut state);
        state.submit();

        let json = serde_json::to_value(state.values()).expect("serialize");
        assert_eq!(json["fullName"], "Jo");
        assert_eq!(json["position"], "Developer");
        assert_eq!(json["skills"], serde_json::json!(["JavaScript"]));
        assert_eq!(json["submitted"], true);
    }
}
