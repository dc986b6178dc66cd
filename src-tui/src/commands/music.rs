//! Music carousel commands
use std::time::Instant;

use folio_core::{Portfolio, Section, Tab};

use super::CommandResult;
use crate::state::AppState;

const NOT_OPEN: &str = "Open Top 5 Music (2) to browse songs";

/// Step forward; returns the new index, or `None` while Music is still
/// fading in behind the previous section
pub fn next(state: &mut AppState, now: Instant) -> CommandResult<Option<usize>> {
    step(state, now, Portfolio::music_next)
}

/// Step back; returns the new index, or `None` while Music is still
/// fading in behind the previous section
pub fn prev(state: &mut AppState, now: Instant) -> CommandResult<Option<usize>> {
    step(state, now, Portfolio::music_prev)
}

fn step(
    state: &mut AppState,
    now: Instant,
    apply: fn(&mut Portfolio, Instant) -> bool,
) -> CommandResult<Option<usize>> {
    let portfolio = state.portfolio_mut();
    if apply(portfolio, now) {
        return current_index(portfolio);
    }

    if portfolio.active_tab() == Tab::Music {
        // Selected but the previous section has not finished exiting
        tracing::debug!(rendered = %portfolio.rendered_tab(), "Music key ignored during transition");
        return CommandResult::ok(None);
    }

    CommandResult::err(NOT_OPEN)
}

fn current_index(portfolio: &Portfolio) -> CommandResult<Option<usize>> {
    match portfolio.section() {
        Section::Music(music) => CommandResult::ok(Some(music.carousel().index())),
        _ => CommandResult::err(NOT_OPEN),
    }
}
