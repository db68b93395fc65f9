use crate::ui::style::Style;
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    Yes,
    No,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
    pub wrap: Wrap,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
            wrap: Wrap::Yes,
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            wrap: Wrap::Yes,
        }
    }

    pub fn no_wrap(mut self) -> Self {
        self.wrap = Wrap::No;
        self
    }

    pub fn width(&self) -> usize {
        self.text.chars().map(|c| c.width().unwrap_or(0)).sum()
    }

    /// Splits at a display-width boundary. The head never exceeds `width`
    /// columns; the tail is `None` when nothing remains.
    pub fn split_at_width(&self, width: usize) -> (Span, Option<Span>) {
        let mut head_width = 0usize;
        let mut byte_split = self.text.len();

        for (idx, ch) in self.text.char_indices() {
            let w = ch.width().unwrap_or(0);
            if head_width + w > width {
                byte_split = idx;
                break;
            }
            head_width += w;
        }

        let head = Span {
            text: self.text[..byte_split].to_string(),
            style: self.style,
            wrap: self.wrap,
        };
        let tail = if byte_split < self.text.len() {
            Some(Span {
                text: self.text[byte_split..].to_string(),
                style: self.style,
                wrap: self.wrap,
            })
        } else {
            None
        };

        (head, tail)
    }
}

pub type SpanLine = Vec<Span>;

pub fn line_width(line: &SpanLine) -> usize {
    line.iter().map(Span::width).sum()
}
