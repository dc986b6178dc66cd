//! folio Core
//!
//! Central coordination layer for the portfolio.
//! The core owns all view state; front ends only draw it and forward input.

mod config;
mod error;
mod portfolio;
mod resume;
mod section;

use std::path::Path;

pub use config::{Config, ASSETS_DIR_ENV};
pub use error::CoreError;
pub use portfolio::Portfolio;
pub use section::{AboutSection, ExperienceSection, MusicSection, Section};

// Re-export core components
pub use folio_carousel::{
    CarouselError, ImageSequence, ManualCarousel, TimedCarousel, TimerRuntime, TimerTick,
};
pub use folio_content::{ContentError, ExternalLink, Profile, ResumeAsset};
pub use folio_tabs::{Phase, Selection, Tab, TabError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging into `log_path`
pub fn init_logging(log_path: &Path) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .try_init()
        .map_err(|e| CoreError::Config(format!("logging already initialized: {e}")))
}
