use crate::core::state::AppState;
use crate::input::DrawOutput;
use crate::terminal::{CursorPos, Terminal};
use crate::ui::layout;
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;
use std::io;

#[derive(Debug, Default, Clone)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

/// Builds the visible form: prompt, hint, one block per visible input and
/// the inline error line under any field that failed the last submit.
pub fn build_frame(state: &AppState, theme: &Theme, width: u16) -> RenderFrame {
    let mut frame = RenderFrame::default();
    let mut row_offset: u16 = 0;

    frame
        .lines
        .push(vec![Span::styled(&state.step.prompt, theme.prompt)]);
    row_offset += 1;

    // The key legend is truncated rather than wrapped so it never pushes
    // the inputs down on a narrow terminal.
    if let Some(hint) = &state.step.hint {
        frame
            .lines
            .push(vec![Span::styled(hint, theme.hint).no_wrap()]);
        row_offset += 1;
    }

    frame.lines.push(Vec::new());
    row_offset += 1;

    for field in state.engine.visible() {
        let Some(input) = state.step.input(*field) else {
            continue;
        };

        let DrawOutput { lines, cursor } = input.draw(theme);

        if frame.cursor.is_none() {
            if let Some(local) = cursor {
                frame.cursor = Some(CursorPos {
                    col: local.col,
                    row: row_offset.saturating_add(local.row),
                });
            }
        }

        row_offset = row_offset.saturating_add(lines.len() as u16);
        frame.lines.extend(lines);

        if let Some(error) = state.form.error(*field) {
            frame
                .lines
                .push(vec![Span::styled(format!("  ✗ {}", error), theme.error)]);
            row_offset = row_offset.saturating_add(1);
        }
    }

    frame.lines = layout::compose(&frame.lines, width);
    frame
}

/// Repaints the frame in place, anchored at the row the form started on.
pub struct Renderer {
    origin_row: Option<u16>,
    last_height: u16,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            origin_row: None,
            last_height: 0,
        }
    }

    pub fn draw(&mut self, frame: &RenderFrame, terminal: &mut Terminal) -> io::Result<()> {
        let size = terminal.size();
        let height = frame.lines.len() as u16;
        let mut origin = self
            .origin_row
            .unwrap_or_else(|| terminal.cursor_position().y);

        // Scroll so the whole frame fits below the anchor row.
        if origin.saturating_add(height) > size.height {
            let overflow = origin + height - size.height;
            terminal.scroll_up(overflow)?;
            origin = origin.saturating_sub(overflow);
        }
        self.origin_row = Some(origin);
        self.last_height = height;

        terminal.hide_cursor()?;
        terminal.move_cursor(0, origin)?;
        terminal.clear_from_cursor_down()?;

        for (i, line) in frame.lines.iter().enumerate() {
            terminal.move_cursor(0, origin.saturating_add(i as u16))?;
            terminal.render_line(line)?;
        }

        if let Some(cursor) = frame.cursor {
            terminal.move_cursor(cursor.col, origin.saturating_add(cursor.row))?;
            terminal.show_cursor()?;
        }

        terminal.flush()
    }

    pub fn move_to_end(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        let row = self
            .origin_row
            .unwrap_or(0)
            .saturating_add(self.last_height);
        terminal.move_cursor(0, row)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
