use crate::ui::span::{Span, SpanLine, Wrap};

/// Reflows logical lines into physical lines no wider than the terminal.
///
/// Spans with `Wrap::Yes` break at display-width boundaries and continue on
/// the next line; `Wrap::No` spans are truncated at the right edge.
pub fn compose(lines: &[SpanLine], width: u16) -> Vec<SpanLine> {
    let width = width as usize;
    if width == 0 {
        return lines.to_vec();
    }

    let mut out: Vec<SpanLine> = Vec::with_capacity(lines.len());

    for line in lines {
        let mut current: SpanLine = Vec::new();
        let mut current_width = 0usize;

        for span in line {
            if span.width() == 0 {
                continue;
            }

            match span.wrap {
                Wrap::No => {
                    place_no_wrap(span, width, &mut current, &mut current_width, &mut out);
                }
                Wrap::Yes => {
                    place_wrap(span, width, &mut current, &mut current_width, &mut out);
                }
            }
        }

        out.push(current);
    }

    out
}

fn place_no_wrap(
    span: &Span,
    width: usize,
    current: &mut SpanLine,
    current_width: &mut usize,
    out: &mut Vec<SpanLine>,
) {
    if *current_width > 0 && span.width() > width - *current_width {
        out.push(std::mem::take(current));
        *current_width = 0;
    }

    let (head, _) = span.split_at_width(width);
    *current_width += head.width();
    current.push(head);
}

fn place_wrap(
    span: &Span,
    width: usize,
    current: &mut SpanLine,
    current_width: &mut usize,
    out: &mut Vec<SpanLine>,
) {
    let mut rest = span.clone();

    loop {
        if *current_width >= width {
            out.push(std::mem::take(current));
            *current_width = 0;
        }

        let available = width - *current_width;
        if rest.width() <= available {
            *current_width += rest.width();
            current.push(rest);
            return;
        }

        let (head, tail) = rest.split_at_width(available);
        if head.width() > 0 {
            *current_width += head.width();
            current.push(head);
        }
        out.push(std::mem::take(current));
        *current_width = 0;

        match tail {
            Some(t) => rest = t,
            None => return,
        }
    }
}
