use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Map a key press to an app action. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if matches!(code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc | KeyCode::Char('?')) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }

    let action = match app.scene {
        Scene::Menu => match code {
            KeyCode::Up => Some(InputAction::MenuPrev),
            KeyCode::Down => Some(InputAction::MenuNext),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => Some(InputAction::MenuInc),
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => Some(InputAction::MenuDec),
            KeyCode::Enter => Some(InputAction::MenuApply),
            KeyCode::Esc => Some(InputAction::MenuCancel),
            KeyCode::Char('m') | KeyCode::Char('M') => Some(InputAction::ToggleMenu),
            _ => None,
        },
        Scene::Hand => match code {
            KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Char('N') => {
                Some(InputAction::Deal)
            }
            KeyCode::Char('m') | KeyCode::Char('M') => Some(InputAction::ToggleMenu),
            KeyCode::Char('?') => Some(InputAction::ToggleHelp),
            _ => None,
        },
    };
    if let Some(action) = action {
        let _ = app.handle_input(action);
    }
    false
}
