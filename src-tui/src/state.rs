//! Application state management
use folio_core::Portfolio;

/// Outcome of the last command, shown in the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub is_error: bool,
}

pub struct AppState {
    portfolio: Portfolio,
    status: Option<Status>,
    should_quit: bool,
}

impl AppState {
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            portfolio,
            status: None,
            should_quit: false,
        }
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn portfolio_mut(&mut self) -> &mut Portfolio {
        &mut self.portfolio
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(Status {
            message: message.into(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(Status {
            message: message.into(),
            is_error: true,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
