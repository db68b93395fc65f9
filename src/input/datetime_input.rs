use crate::core::form::Field;
use crate::input::input::{DrawOutput, Input, InputBase, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentKind {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

impl SegmentKind {
    fn min_value(self) -> u32 {
        match self {
            SegmentKind::Year => 1900,
            SegmentKind::Month | SegmentKind::Day => 1,
            SegmentKind::Hour | SegmentKind::Minute => 0,
        }
    }

    fn max_value(self) -> u32 {
        match self {
            SegmentKind::Year => 2100,
            SegmentKind::Month => 12,
            SegmentKind::Day => 31,
            SegmentKind::Hour => 23,
            SegmentKind::Minute => 59,
        }
    }

    fn length(self) -> usize {
        match self {
            SegmentKind::Year => 4,
            _ => 2,
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            SegmentKind::Year => "yyyy",
            SegmentKind::Month => "mm",
            SegmentKind::Day => "dd",
            SegmentKind::Hour => "hh",
            SegmentKind::Minute => "mm",
        }
    }
}

#[derive(Debug, Clone)]
struct Segment {
    kind: SegmentKind,
    text: String,
}

impl Segment {
    fn new(kind: SegmentKind) -> Self {
        Self {
            kind,
            text: String::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.text.len() == self.kind.length()
    }

    fn numeric(&self) -> u32 {
        self.text.parse().unwrap_or(0)
    }

    fn set_numeric(&mut self, value: u32) {
        self.text = format!("{:0width$}", value, width = self.kind.length());
    }

    fn increment(&mut self) {
        let current = self.numeric();
        let (min, max) = (self.kind.min_value(), self.kind.max_value());
        let next = if current < min || current >= max {
            min
        } else {
            current + 1
        };
        self.set_numeric(next);
    }

    fn decrement(&mut self) {
        let current = self.numeric();
        let (min, max) = (self.kind.min_value(), self.kind.max_value());
        let prev = if current <= min { max } else { current - 1 };
        self.set_numeric(prev);
    }

    fn push_digit(&mut self, digit: char) -> bool {
        if self.is_full() {
            self.text.clear();
        }
        self.text.push(digit);
        self.is_full()
    }
}

/// Segmented date-time entry: `yyyy-mm-dd hh:mm`. Digits fill the active
/// segment, Up/Down steps it, Left/Right switches segments.
pub struct DateTimeInput {
    base: InputBase,
    segments: [Segment; 5],
    active: usize,
}

impl DateTimeInput {
    pub fn new(field: Field, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(field, label),
            segments: [
                Segment::new(SegmentKind::Year),
                Segment::new(SegmentKind::Month),
                Segment::new(SegmentKind::Day),
                Segment::new(SegmentKind::Hour),
                Segment::new(SegmentKind::Minute),
            ],
            active: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.text.is_empty())
    }

    fn handle_digit(&mut self, digit: char) {
        let filled = self.segments[self.active].push_digit(digit);
        if filled && self.active + 1 < self.segments.len() {
            self.active += 1;
        }
    }

    fn handle_backspace(&mut self) {
        if self.segments[self.active].text.is_empty() {
            if self.active > 0 {
                self.active -= 1;
            }
            return;
        }
        self.segments[self.active].text.pop();
    }

    fn separator(index: usize) -> &'static str {
        // yyyy-mm-dd hh:mm
        match index {
            0 | 1 => "-",
            2 => " ",
            _ => ":",
        }
    }
}

impl Input for DateTimeInput {
    fn field(&self) -> Field {
        self.base.field
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    /// Joined as `YYYY-MM-DDTHH:MM`; empty until anything is typed.
    /// Partially filled segments yield a value the validator rejects.
    fn value(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!(
            "{}-{}-{}T{}:{}",
            self.segments[0].text,
            self.segments[1].text,
            self.segments[2].text,
            self.segments[3].text,
            self.segments[4].text,
        )
    }

    fn set_value(&mut self, value: String) {
        for segment in &mut self.segments {
            segment.text.clear();
        }
        if value.is_empty() {
            self.active = 0;
            return;
        }

        let mut parts = value
            .split(['-', 'T', ' ', ':'])
            .filter(|part| !part.is_empty());
        for segment in &mut self.segments {
            match parts.next() {
                Some(part) => segment.text = part.to_string(),
                None => break,
            }
        }
        self.active = self.segments.len() - 1;
    }

    fn is_focused(&self) -> bool {
        self.base.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.focused = focused;
    }

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                self.handle_digit(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                self.handle_backspace();
                KeyResult::Handled
            }
            KeyCode::Left => {
                if self.active > 0 {
                    self.active -= 1;
                }
                KeyResult::Handled
            }
            KeyCode::Right => {
                if self.active + 1 < self.segments.len() {
                    self.active += 1;
                }
                KeyResult::Handled
            }
            KeyCode::Up => {
                self.segments[self.active].increment();
                KeyResult::Handled
            }
            KeyCode::Down => {
                self.segments[self.active].decrement();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn draw(&self, theme: &Theme) -> DrawOutput {
        let mut content = Vec::new();

        for (i, segment) in self.segments.iter().enumerate() {
            let active = self.base.focused && i == self.active;

            if segment.text.is_empty() {
                let style = if active {
                    theme.placeholder.with_underline()
                } else {
                    theme.placeholder
                };
                content.push(Span::styled(segment.kind.placeholder(), style));
            } else {
                let pad = segment.kind.length().saturating_sub(segment.text.len());
                let style = if active {
                    theme.selection.with_underline()
                } else {
                    crate::ui::style::Style::new()
                };
                content.push(Span::styled(
                    format!("{}{}", segment.text, &segment.kind.placeholder()[..pad]),
                    style,
                ));
            }

            if i + 1 < self.segments.len() {
                content.push(Span::styled(Self::separator(i), theme.placeholder));
            }
        }

        self.base.draw_line(content, None, theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut DateTimeInput, code: KeyCode) {
        input.handle_key(code, KeyModifiers::NONE);
    }

    fn type_digits(input: &mut DateTimeInput, digits: &str) {
        for ch in digits.chars() {
            press(input, KeyCode::Char(ch));
        }
    }

    #[test]
    fn untouched_input_has_empty_value() {
        let input = DateTimeInput::new(Field::InterviewTime, "Preferred Interview Time");
        assert_eq!(input.value(), "");
    }

    #[test]
    fn typing_all_digits_fills_segments_in_order() {
        let mut input = DateTimeInput::new(Field::InterviewTime, "Preferred Interview Time");
        type_digits(&mut input, "202401011000");
        assert_eq!(input.value(), "2024-01-01T10:00");
    }

    #[test]
    fn partial_entry_produces_unparseable_value() {
        let mut input = DateTimeInput::new(Field::InterviewTime, "Preferred Interview Time");
        type_digits(&mut input, "2024");
        assert_eq!(input.value(), "2024--T:");
        assert!(!crate::core::validation::is_valid_datetime(&input.value()));
    }

    #[test]
    fn up_steps_active_segment_from_minimum() {
        let mut input = DateTimeInput::new(Field::InterviewTime, "Preferred Interview Time");
        press(&mut input, KeyCode::Up);
        assert!(input.value().starts_with("1900-"));
        press(&mut input, KeyCode::Up);
        assert!(input.value().starts_with("1901-"));
    }

    #[test]
    fn backspace_walks_back_across_segments() {
        let mut input = DateTimeInput::new(Field::InterviewTime, "Preferred Interview Time");
        type_digits(&mut input, "202401");
        // Active segment is the empty day: the first press moves back to
        // the month, the next two erase it.
        press(&mut input, KeyCode::Backspace);
        press(&mut input, KeyCode::Backspace);
        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.value(), "2024--T:");
        // One more to step back to the year, then one to chip it.
        press(&mut input, KeyCode::Backspace);
        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.value(), "202--T:");
    }

    #[test]
    fn set_value_restores_segments() {
        let mut input = DateTimeInput::new(Field::InterviewTime, "Preferred Interview Time");
        input.set_value("2024-06-15T09:30".to_string());
        assert_eq!(input.value(), "2024-06-15T09:30");
    }
}
