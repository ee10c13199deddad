use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::core::app::{App, Effect};
use crate::core::constants::POLL_INTERVAL;
use crate::ui::renderer::ui;

mod keybindings;

use keybindings::{handle_key_event, handle_mouse_event};

/// Run the full-screen interface until the user quits. Terminal modes are
/// restored before returning, also on error paths that reach the cleanup.
pub fn run_chat() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();

    loop {
        // Effects run against the size the upcoming draw will use, so the
        // handlers never see stale geometry.
        app.apply_effects(terminal.size()?);
        terminal.draw(|f| ui(f, &app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        // Drain everything pending before redrawing once.
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(&mut app, key);
                }
                Event::Paste(text) => app.handle_paste(&text),
                Event::Mouse(mouse) => handle_mouse_event(&mut app, mouse),
                Event::Resize(_, _) => app.queue_effect(Effect::ResizeComposer),
                _ => {}
            }
            if app.ui.exit_requested {
                return Ok(());
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
    }
}
