//! Keyboard input handling for the TUI.
//!
//! This module translates key presses into login form edits, focus moves
//! and submissions.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{can_add_char, App, AppState, LoginFocus};

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    match app.state {
        AppState::LoggingIn => handle_login_input(app, key),
        AppState::Quitting => true,
    }
}

fn handle_login_input(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::Quitting;
            return true;
        }
        KeyCode::Down | KeyCode::Tab => {
            app.login_focus = app.login_focus.next();
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.login_focus = app.login_focus.prev();
        }
        KeyCode::Enter => match app.login_focus {
            LoginFocus::Username => {
                app.login_focus = LoginFocus::Password;
            }
            LoginFocus::Password => {
                app.login_focus = LoginFocus::Button;
            }
            LoginFocus::Button => {
                // Ignored by the form while disabled or already submitting
                app.submit();
            }
        },
        KeyCode::Backspace => match app.login_focus {
            LoginFocus::Username => app.form_mut().pop_username_char(),
            LoginFocus::Password => app.form_mut().pop_password_char(),
            LoginFocus::Button => {}
        },
        KeyCode::Char(c) if can_add_char(c) => match app.login_focus {
            LoginFocus::Username => app.form_mut().push_username_char(c),
            LoginFocus::Password => app.form_mut().push_password_char(c),
            LoginFocus::Button => {
                // Ignore character input on button
            }
        },
        _ => {}
    }
    false
}
