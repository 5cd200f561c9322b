use std::io;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::{App, modal, render};

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        match event::read().context("read event")? {
            Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
            _ => {}
        }
    }
}

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    if app.view.dialog().is_open() {
        modal::handle_modal_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Right | KeyCode::Tab => app.next_repo(),
        KeyCode::Left | KeyCode::BackTab => app.prev_repo(),
        KeyCode::Enter => app.open_detail(),
        _ => {}
    }
}
