//! Tab switching commands
use std::time::Instant;

use folio_core::{Selection, Tab};

use super::CommandResult;
use crate::state::AppState;

pub fn select_tab(state: &mut AppState, tab: Tab, now: Instant) -> CommandResult<Tab> {
    let selection = state.portfolio_mut().select(tab, now);
    into_result(selection)
}

pub fn next_tab(state: &mut AppState, now: Instant) -> CommandResult<Tab> {
    let selection = state.portfolio_mut().select_next(now);
    into_result(selection)
}

pub fn prev_tab(state: &mut AppState, now: Instant) -> CommandResult<Tab> {
    let selection = state.portfolio_mut().select_prev(now);
    into_result(selection)
}

fn into_result(selection: Selection) -> CommandResult<Tab> {
    match selection {
        Selection::Unchanged(tab) => CommandResult::ok(tab),
        Selection::Switched { to, .. } => CommandResult::ok(to),
    }
}
