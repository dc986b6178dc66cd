//! Outbound link and résumé download commands
use std::path::PathBuf;

use super::CommandResult;
use crate::opener;
use crate::state::AppState;

pub fn open_league_link(state: &mut AppState) -> CommandResult<String> {
    let url = match state.portfolio().league_link().url() {
        Ok(url) => url,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    match opener::open_in_browser(&url) {
        Ok(()) => {
            tracing::info!(url = %url, "Opened external link");
            CommandResult::ok_with(url.to_string(), format!("Opened {url}"))
        }
        Err(e) => CommandResult::err(format!("Could not open {url}: {e}")),
    }
}

pub fn download_resume(state: &mut AppState) -> CommandResult<PathBuf> {
    match state.portfolio_mut().download_resume() {
        Ok(path) => {
            let message = format!("Saved résumé to {}", path.display());
            CommandResult::ok_with(path, message)
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}
