use jobform::core::{App, summary};
use jobform::terminal::{Terminal, TerminalEvent};
use std::io;
use std::time::Duration;

fn main() {
    let json_output = std::env::args().any(|arg| arg == "--json");

    if let Err(err) = run(json_output) {
        eprintln!("jobform: {err}");
        std::process::exit(1);
    }
}

fn run(json_output: bool) -> io::Result<()> {
    let mut terminal = Terminal::new()?;
    let mut app = App::new();

    terminal.enter_raw_mode()?;
    terminal.set_line_wrap(false)?;

    let result = event_loop(&mut app, &mut terminal);

    // Restore the terminal even when the loop failed.
    app.renderer.move_to_end(&mut terminal)?;
    terminal.clear_from_cursor_down()?;
    terminal.show_cursor()?;
    terminal.set_line_wrap(true)?;
    terminal.exit_raw_mode()?;
    result?;

    if app.is_submitted() {
        let lines = summary::summary_lines(app.values(), app.theme());
        terminal.print_lines(&lines)?;

        if json_output {
            let json = serde_json::to_string_pretty(app.values()).map_err(io::Error::other)?;
            println!("{json}");
        }
    }

    Ok(())
}

fn event_loop(app: &mut App, terminal: &mut Terminal) -> io::Result<()> {
    app.render(terminal)?;

    while !app.should_exit() {
        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                TerminalEvent::Key(key_event) => app.handle_key(key_event),
                TerminalEvent::Resize { .. } => app.render(terminal)?,
            }
        }

        if app.tick() {
            app.render(terminal)?;
        }
    }

    Ok(())
}
