use crate::core::form::{ErrorMap, Field, FieldError, FormValues};
use regex::Regex;
use std::sync::LazyLock;

// Unanchored on purpose: any local@domain.tld shape inside the value
// passes.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern"));

// `[0-9]` rather than `\d`: the latter matches any Unicode decimal digit.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("phone pattern"));

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(ftp|http|https)://[^ "]+$"#).expect("url pattern"));

/// Maps the current values to field-keyed error messages. Pure: every rule
/// is evaluated against the same snapshot and no rule short-circuits
/// another field.
pub fn validate(values: &FormValues) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if values.full_name.is_empty() {
        errors.insert(
            Field::FullName,
            FieldError::required("Full name is required."),
        );
    }

    if values.email.is_empty() {
        errors.insert(Field::Email, FieldError::required("Email is required."));
    } else if !EMAIL_RE.is_match(&values.email) {
        errors.insert(
            Field::Email,
            FieldError::invalid("Email address is invalid."),
        );
    }

    if values.phone_number.is_empty() {
        errors.insert(
            Field::PhoneNumber,
            FieldError::required("Phone number is required."),
        );
    } else if !PHONE_RE.is_match(&values.phone_number) {
        errors.insert(
            Field::PhoneNumber,
            FieldError::invalid("Phone number is invalid."),
        );
    }

    if values.position.needs_experience() {
        if values.experience.is_empty() {
            errors.insert(
                Field::Experience,
                FieldError::required("Relevant experience is required."),
            );
        } else if values
            .experience
            .trim()
            .parse::<f64>()
            .is_ok_and(|years| years <= 0.0)
        {
            errors.insert(
                Field::Experience,
                FieldError::invalid("Experience must be greater than 0."),
            );
        }
    }

    if values.position.needs_portfolio() {
        if values.portfolio_url.is_empty() {
            errors.insert(
                Field::PortfolioUrl,
                FieldError::required("Portfolio URL is required."),
            );
        } else if !URL_RE.is_match(&values.portfolio_url) {
            errors.insert(Field::PortfolioUrl, FieldError::invalid("URL is invalid."));
        }
    }

    if values.skills.is_empty() {
        errors.insert(
            Field::Skills,
            FieldError::required("At least one skill must be selected."),
        );
    }

    if values.interview_time.is_empty() {
        errors.insert(
            Field::InterviewTime,
            FieldError::required("Preferred interview time is required."),
        );
    } else if !is_valid_datetime(&values.interview_time) {
        errors.insert(
            Field::InterviewTime,
            FieldError::invalid("Interview time is invalid."),
        );
    }

    errors
}

/// Accepts `YYYY-MM-DD`, optionally followed by `THH:MM` or `THH:MM:SS`
/// (a space also separates date and time). The date must exist on the
/// calendar.
pub fn is_valid_datetime(value: &str) -> bool {
    let (date, time) = match value.find(['T', ' ']) {
        Some(idx) => (&value[..idx], Some(&value[idx + 1..])),
        None => (value, None),
    };

    let Some((year, month, day)) = parse_date(date) else {
        return false;
    };
    if month == 0 || month > 12 {
        return false;
    }
    if day == 0 || day > days_in_month(year, month) {
        return false;
    }

    match time {
        None => true,
        Some(time) => parse_time(time),
    }
}

fn parse_date(date: &str) -> Option<(u32, u32, u32)> {
    let mut parts = date.split('-');
    let year = parse_fixed(parts.next()?, 4)?;
    let month = parse_fixed(parts.next()?, 2)?;
    let day = parse_fixed(parts.next()?, 2)?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, month, day))
}

fn parse_time(time: &str) -> bool {
    let mut parts = time.split(':');
    let Some(hour) = parts.next().and_then(|p| parse_fixed(p, 2)) else {
        return false;
    };
    let Some(minute) = parts.next().and_then(|p| parse_fixed(p, 2)) else {
        return false;
    };
    let second = match parts.next() {
        None => 0,
        Some(part) => match parse_fixed(part, 2) {
            Some(second) => second,
            None => return false,
        },
    };
    parts.next().is_none() && hour < 24 && minute < 60 && second < 60
}

fn parse_fixed(part: &str, len: usize) -> Option<u32> {
    if part.len() != len || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::ErrorKind;

    fn valid_values() -> FormValues {
        let mut values = FormValues::new();
        values.full_name = "Jo".to_string();
        values.email = "jo@x.com".to_string();
        values.phone_number = "5551234".to_string();
        values.position = crate::core::form::Position::Developer;
        values.experience = "3".to_string();
        values.skills.insert("JavaScript".to_string());
        values.interview_time = "2024-01-01T10:00".to_string();
        values
    }

    #[test]
    fn valid_values_produce_no_errors() {
        assert!(validate(&valid_values()).is_empty());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate(&FormValues::new());
        assert_eq!(errors.len(), 5);
        for field in [
            Field::FullName,
            Field::Email,
            Field::PhoneNumber,
            Field::Skills,
            Field::InterviewTime,
        ] {
            assert_eq!(errors[&field].kind, ErrorKind::Required, "{field}");
        }
    }

    #[test]
    fn phone_accepts_ascii_digits_only() {
        let mut values = valid_values();
        values.phone_number = "555-1234".to_string();
        assert_eq!(
            validate(&values)[&Field::PhoneNumber].message,
            "Phone number is invalid."
        );

        // Arabic-Indic numerals are Unicode digits but not `[0-9]`.
        values.phone_number = "٥٥٥".to_string();
        assert!(validate(&values).contains_key(&Field::PhoneNumber));
    }

    #[test]
    fn experience_not_required_without_position() {
        let mut values = valid_values();
        values.position = crate::core::form::Position::Manager;
        values.experience.clear();
        assert!(validate(&values).is_empty());

        values.position = crate::core::form::Position::Unset;
        assert!(validate(&values).is_empty());
    }

    #[test]
    fn experience_must_be_positive_for_developer() {
        let mut values = valid_values();
        values.experience = "0".to_string();
        let errors = validate(&values);
        assert_eq!(
            errors[&Field::Experience].message,
            "Experience must be greater than 0."
        );

        values.experience = "-2".to_string();
        assert!(validate(&values).contains_key(&Field::Experience));
    }

    #[test]
    fn non_numeric_experience_passes() {
        // A non-numeric value never compares below zero, so it slips
        // through the range rule.
        let mut values = valid_values();
        values.experience = "lots".to_string();
        assert!(validate(&values).is_empty());
    }

    #[test]
    fn designer_requires_valid_portfolio_url() {
        let mut values = valid_values();
        values.position = crate::core::form::Position::Designer;

        values.portfolio_url = "notaurl".to_string();
        let errors = validate(&values);
        let error = &errors[&Field::PortfolioUrl];
        assert_eq!(error.kind, ErrorKind::Invalid);
        assert_eq!(error.message, "URL is invalid.");

        values.portfolio_url = "http://a.com".to_string();
        assert!(!validate(&values).contains_key(&Field::PortfolioUrl));

        values.portfolio_url.clear();
        assert_eq!(
            validate(&values)[&Field::PortfolioUrl].kind,
            ErrorKind::Required
        );
    }

    #[test]
    fn portfolio_url_ignored_for_other_positions() {
        let mut values = valid_values();
        values.portfolio_url = "notaurl".to_string();
        assert!(validate(&values).is_empty());
    }

    #[test]
    fn empty_skills_always_reported() {
        let mut values = valid_values();
        values.skills.clear();
        assert!(validate(&values).contains_key(&Field::Skills));

        let mut empty = FormValues::new();
        empty.skills.clear();
        assert!(validate(&empty).contains_key(&Field::Skills));
    }

    #[test]
    fn malformed_interview_time_is_invalid() {
        let mut values = valid_values();
        values.interview_time = "soon".to_string();
        let errors = validate(&values);
        assert_eq!(errors[&Field::InterviewTime].kind, ErrorKind::Invalid);
        assert_eq!(errors[&Field::InterviewTime].message, "Interview time is invalid.");
    }

    #[test]
    fn datetime_grammar() {
        assert!(is_valid_datetime("2024-01-01"));
        assert!(is_valid_datetime("2024-01-01T10:00"));
        assert!(is_valid_datetime("2024-01-01 10:00"));
        assert!(is_valid_datetime("2024-01-01T10:00:30"));

        assert!(!is_valid_datetime("2024-13-01T10:00"));
        assert!(!is_valid_datetime("2024-00-10"));
        assert!(!is_valid_datetime("2024-04-31"));
        assert!(!is_valid_datetime("2024-01-01T24:00"));
        assert!(!is_valid_datetime("2024-01-01T10:61"));
        assert!(!is_valid_datetime("2024-1-01"));
        assert!(!is_valid_datetime("24-01-01"));
        assert!(!is_valid_datetime("2024-01"));
    }

    #[test]
    fn leap_day_only_in_leap_years() {
        assert!(is_valid_datetime("2024-02-29"));
        assert!(is_valid_datetime("2000-02-29"));
        assert!(!is_valid_datetime("2023-02-29"));
        assert!(!is_valid_datetime("1900-02-29"));
    }
}
