use crossterm::event::{KeyCode, KeyEvent};

use crate::model::bucket::Bucket;
use crate::ops::MoveRequest;

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match app.mode {
        Mode::Navigate => navigate(app, key),
        Mode::AddTask => add_task(app, key),
    }
}

fn navigate(app: &mut App, key: KeyEvent) {
    app.status.clear();
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        KeyCode::Up | KeyCode::Char('k') => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.cursor += 1;
        }
        KeyCode::Tab => {
            app.focus = neighbor_bucket(app.focus, 1);
            app.cursor = 0;
        }
        KeyCode::BackTab => {
            app.focus = neighbor_bucket(app.focus, -1);
            app.cursor = 0;
        }

        KeyCode::Char(' ') => {
            if let Some(id) = app.selected_id() {
                app.board.toggle_done(id);
            }
        }

        // Reorder within the focused quadrant
        KeyCode::Char('K') => shift_selected(app, -1),
        KeyCode::Char('J') => shift_selected(app, 1),

        // Send the selected task to another quadrant (appended at its end)
        KeyCode::Char(c @ '1'..='4') => {
            let target = Bucket::ALL[(c as usize) - ('1' as usize)];
            move_selected_to(app, target);
        }

        // Toggle board visibility of the selected task's label
        KeyCode::Char('h') => {
            if let Some(name) = app.selected().and_then(|t| t.label.clone()) {
                let hidden = app.board.toggle_hidden(&name);
                app.status = if hidden {
                    format!("hiding @{name}")
                } else {
                    format!("showing @{name}")
                };
            }
        }

        KeyCode::Char('n') => {
            app.mode = Mode::AddTask;
            app.input.clear();
        }

        _ => {}
    }
    app.clamp_cursor();
}

fn add_task(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Navigate;
            app.input.clear();
            app.status.clear();
        }
        KeyCode::Enter => match app.board.create_task(&app.input, None) {
            Ok(_) => {
                app.mode = Mode::Navigate;
                app.input.clear();
                app.status.clear();
            }
            // Keep the buffer so the title can be corrected
            Err(e) => app.status = e.to_string(),
        },
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => app.input.push(c),
        _ => {}
    }
}

/// Next quadrant in display order, wrapping
fn neighbor_bucket(bucket: Bucket, step: isize) -> Bucket {
    let pos = Bucket::ALL
        .iter()
        .position(|&b| b == bucket)
        .unwrap_or_default() as isize;
    let len = Bucket::ALL.len() as isize;
    Bucket::ALL[((pos + step).rem_euclid(len)) as usize]
}

/// Swap the selected task with its visible neighbor. With hidden rows in
/// between, the placement targets the neighbor's real bucket position so the
/// visible order is what actually changes.
fn shift_selected(app: &mut App, delta: isize) {
    let Some(id) = app.selected_id() else { return };
    let bucket = app.focus;
    let neighbor_row = if delta < 0 {
        let Some(row) = app.cursor.checked_sub(1) else {
            return;
        };
        row
    } else {
        app.cursor + 1
    };
    let Some(neighbor_idx) = app.bucket_index(bucket, neighbor_row) else {
        return;
    };
    // Down: insert just after the neighbor; up: just before it
    let index = if delta < 0 {
        neighbor_idx
    } else {
        neighbor_idx + 1
    };
    match app.board.apply(MoveRequest::ToPosition {
        id,
        bucket,
        index: Some(index),
    }) {
        Ok(true) => {
            app.cursor = neighbor_row;
        }
        Ok(false) => {}
        Err(e) => app.status = e.to_string(),
    }
}

fn move_selected_to(app: &mut App, target: Bucket) {
    let Some(id) = app.selected_id() else { return };
    match app.board.apply(MoveRequest::ToBucket { id, bucket: target }) {
        Ok(true) => {
            app.focus = target;
            app.cursor = app.visible(target).len().saturating_sub(1);
        }
        Ok(false) => {}
        Err(e) => app.status = e.to_string(),
    }
}
