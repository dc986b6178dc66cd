//! Core error types

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] folio_tabs::TabError),

    #[error("Carousel error: {0}")]
    Carousel(#[from] folio_carousel::CarouselError),

    #[error("Content error: {0}")]
    Content(#[from] folio_content::ContentError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Asset not found: {}", .0.display())]
    AssetMissing(PathBuf),
}
