//! Keyboard input dispatch — overlay first, then global keys, then editing.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{AppState, Field, Overlay};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. The help overlay consumes input first.
    if app.overlay == Overlay::Help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')
        ) {
            app.overlay = Overlay::None;
        }
        return;
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
            app.focus = app.focus.next();
            return;
        }
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
            app.focus = app.focus.prev();
            return;
        }
        _ => {}
    }

    // 3. Editing keys. Every accepted edit refreshes the cached result.
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            if app.focus == Field::Instrument {
                app.cycle_instrument(-1);
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if app.focus == Field::Instrument {
                app.cycle_instrument(1);
            }
        }
        KeyCode::Char('x') => app.halve_risk(),
        KeyCode::Char('r') => app.restore_full_risk(),
        KeyCode::Char('c') => app.clear_field(),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            if app.focus == Field::Instrument {
                app.set_warning("Use h/l to change the instrument");
            } else {
                app.push_char(c);
            }
        }
        _ => return,
    }
    app.recompute();
}
