//! Event handling functions for user input and application state updates.

use color_eyre::eyre::Result;
use log::debug;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::App;

/// Handles input events and updates the application state accordingly.
///
/// This function waits for an event for at most one frame and dispatches key presses to
/// [`handle_key`]. Resizes need no handling beyond a redraw, which the next frame performs.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(app.frame_delay)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key)?,
            Event::Resize(columns, rows) => debug!("terminal resized to {columns}x{rows}"),
            _ => {}
        }
    }

    Ok(())
}

/// Applies a single key press to the application.
///
/// Arrow keys pan the maze, `s` starts solving, `r` carves a new maze, and `q`, Escape or
/// Control-C quit.
pub(crate) fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.exit = true,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => app.exit = true,
        KeyCode::Char('s' | 'S') => app.maze.start_solving(),
        KeyCode::Char('r' | 'R') => app.regenerate()?,
        KeyCode::Up => app.offset_y += 1,
        KeyCode::Down => app.offset_y -= 1,
        KeyCode::Left => app.offset_x += 1,
        KeyCode::Right => app.offset_x -= 1,
        _ => {}
    }

    Ok(())
}
