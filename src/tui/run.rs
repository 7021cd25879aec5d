use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::TuiApp;
use super::render::draw_ui;
use crate::shutdown;
use crate::store::KeyValueStore;

/// Run the TUI until the user quits or a termination signal arrives.
///
/// Returns the app so the caller can inspect the final state.
pub fn run_tui<S: KeyValueStore>(mut app: TuiApp<S>) -> io::Result<TuiApp<S>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    terminal.clear()?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.map(|()| app)
}

fn event_loop<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp<S>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw_ui(f, app))?;

        // Poll with a timeout so a signal is noticed without a key press
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    app.handle_key(key.code, key.modifiers);
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => app.handle_mouse_scroll(true),
                    MouseEventKind::ScrollDown => app.handle_mouse_scroll(false),
                    _ => {}
                },
                _ => {}
            }
        }

        if app.should_quit() || shutdown::requested() {
            return Ok(());
        }
    }
}
