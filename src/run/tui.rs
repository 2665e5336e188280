use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::ui::app::{App, Screen};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

pub(crate) fn as_tui(args: &[String]) -> Result<()> {
    let (path_arg, params) = super::cli::parse_run_args(args)?;
    let path = super::cli::resolve_ledger_path(path_arg)?;

    let mut app = App::new(path, params);
    // first load happens before raw mode so errors print to a normal terminal
    app.reload()?;

    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }
    result
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // 1 tab + 1 status + 1 message + 2 borders + 1 header
            app.visible_rows = (f.area().height.saturating_sub(6) as usize).max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
            } else {
                handle_key(key, app);
            }
        }
    }
    Ok(())
}

fn handle_key(key: KeyEvent, app: &mut App) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => app.running = false,
            KeyCode::Char('d') => app.half_page_down(),
            KeyCode::Char('u') => app.half_page_up(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('1') => app.switch_screen(Screen::Trends),
        KeyCode::Char('2') => app.switch_screen(Screen::Surplus),
        KeyCode::Char('3') => app.switch_screen(Screen::Comparison),
        KeyCode::Tab => app.cycle_screen(1),
        KeyCode::BackTab => app.cycle_screen(-1),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') => app.goto_top(),
        KeyCode::Char('G') => app.goto_bottom(),
        KeyCode::Char('r') => {
            if let Err(e) = app.reload() {
                app.set_status(format!("Reload failed: {e:#}"));
            }
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
}
