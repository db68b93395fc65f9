use crate::core::form::FormValues;
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;

/// Post-submit summary of the accepted application. Conditional rows
/// follow the same visibility rules as the form itself.
pub fn summary_lines(values: &FormValues, theme: &Theme) -> Vec<SpanLine> {
    let mut lines: Vec<SpanLine> = Vec::new();

    lines.push(vec![Span::styled(
        "Application Summary",
        theme.summary_heading,
    )]);
    lines.push(Vec::new());

    push_row(&mut lines, theme, "Full Name", &values.full_name);
    push_row(&mut lines, theme, "Email", &values.email);
    push_row(&mut lines, theme, "Phone Number", &values.phone_number);
    push_row(&mut lines, theme, "Position", values.position.as_str());

    if values.position.needs_experience() {
        push_row(
            &mut lines,
            theme,
            "Relevant Experience",
            &format!("{} years", values.experience),
        );
    }
    if values.position.needs_portfolio() {
        push_row(&mut lines, theme, "Portfolio URL", &values.portfolio_url);
    }
    if values.position.is_manager() {
        push_block(
            &mut lines,
            theme,
            "Management Experience",
            &values.management_experience,
        );
    }

    push_row(&mut lines, theme, "Skills", &values.skills_joined());
    push_row(
        &mut lines,
        theme,
        "Preferred Interview Time",
        &values.interview_time,
    );

    lines
}

fn push_row(lines: &mut Vec<SpanLine>, theme: &Theme, label: &str, value: &str) {
    lines.push(vec![
        Span::styled(format!("{label}: "), theme.summary_label),
        Span::new(value),
    ]);
}

/// Multiline value rendered as an indented block under its label.
fn push_block(lines: &mut Vec<SpanLine>, theme: &Theme, label: &str, value: &str) {
    lines.push(vec![Span::styled(format!("{label}:"), theme.summary_label)]);
    for line in value.split('\n') {
        lines.push(vec![Span::new(format!("  {line}"))]);
    }
}
