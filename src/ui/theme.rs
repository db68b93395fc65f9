use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub prompt: Style,
    pub hint: Style,
    pub label: Style,
    pub focused_label: Style,
    pub placeholder: Style,
    pub error: Style,
    pub selection: Style,
    pub summary_heading: Style,
    pub summary_label: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            prompt: Style::new().with_bold(),
            hint: Style::new().with_color(Color::DarkGrey),
            label: Style::new(),
            focused_label: Style::new().with_bold().with_color(Color::Cyan),
            placeholder: Style::new().with_color(Color::DarkGrey),
            error: Style::new().with_color(Color::Red),
            selection: Style::new().with_color(Color::Cyan),
            summary_heading: Style::new().with_bold().with_color(Color::Green),
            summary_label: Style::new().with_bold(),
        }
    }
}
