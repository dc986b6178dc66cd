//! folio Tabs
//!
//! The three portfolio sections and the state that decides which one is
//! shown. Exactly one tab is active at any time; sections fade out before
//! the next one fades in.

mod error;
mod presence;
mod selector;
mod tab;

pub use error::TabError;
pub use presence::{Fade, Phase};
pub use selector::{Selection, TabSelector};
pub use tab::Tab;

pub type Result<T> = std::result::Result<T, TabError>;
