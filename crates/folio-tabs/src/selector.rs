//! Active tab selection

use crate::tab::Tab;

/// Outcome of a selection request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The requested tab was already active
    Unchanged(Tab),
    /// The active tab changed
    Switched { from: Tab, to: Tab },
}

/// Holds the single active tab
#[derive(Debug, Clone, Default)]
pub struct TabSelector {
    active: Tab,
}

impl TabSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    /// Make `tab` the active tab. Selecting the active tab is a no-op.
    pub fn select(&mut self, tab: Tab) -> Selection {
        if self.active == tab {
            return Selection::Unchanged(tab);
        }

        let from = self.active;
        self.active = tab;

        tracing::debug!(from = %from, to = %tab, "Tab selected");

        Selection::Switched { from, to: tab }
    }
}
