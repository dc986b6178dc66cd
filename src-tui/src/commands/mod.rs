//! Terminal commands
//!
//! Key presses are mapped to a [`Command`], which is dispatched against the
//! core. Failures end up in the status line, never in a crash.

pub mod links;
pub mod music;
mod result;
pub mod tabs;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::Tab;

use crate::state::AppState;

pub use result::CommandResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectTab(Tab),
    NextTab,
    PrevTab,
    MusicNext,
    MusicPrev,
    OpenLink,
    DownloadResume,
    Quit,
}

impl Command {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Command::Quit),
                _ => None,
            };
        }

        let command = match key.code {
            KeyCode::Char('1') => Command::SelectTab(Tab::About),
            KeyCode::Char('2') => Command::SelectTab(Tab::Music),
            KeyCode::Char('3') => Command::SelectTab(Tab::Experience),
            KeyCode::Tab => Command::NextTab,
            KeyCode::BackTab => Command::PrevTab,
            KeyCode::Right | KeyCode::Char('l') => Command::MusicNext,
            KeyCode::Left | KeyCode::Char('h') => Command::MusicPrev,
            KeyCode::Char('o') => Command::OpenLink,
            KeyCode::Char('d') => Command::DownloadResume,
            KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
            _ => return None,
        };

        Some(command)
    }
}

pub fn dispatch(state: &mut AppState, command: Command, now: Instant) {
    match command {
        Command::SelectTab(tab) => {
            let result = tabs::select_tab(state, tab, now);
            report(state, result);
        }
        Command::NextTab => {
            let result = tabs::next_tab(state, now);
            report(state, result);
        }
        Command::PrevTab => {
            let result = tabs::prev_tab(state, now);
            report(state, result);
        }
        Command::MusicNext => {
            let result = music::next(state, now);
            report(state, result);
        }
        Command::MusicPrev => {
            let result = music::prev(state, now);
            report(state, result);
        }
        Command::OpenLink => {
            let result = links::open_league_link(state);
            report(state, result);
        }
        Command::DownloadResume => {
            let result = links::download_resume(state);
            report(state, result);
        }
        Command::Quit => state.quit(),
    }
}

fn report<T>(state: &mut AppState, result: CommandResult<T>) {
    match (result.success, result.message, result.error) {
        (true, Some(message), _) => state.set_status(message),
        (true, None, _) => state.clear_status(),
        (false, _, Some(error)) => {
            tracing::warn!(error = %error, "Command failed");
            state.set_error(error)
        }
        (false, _, None) => state.set_error("Command failed"),
    }
}
