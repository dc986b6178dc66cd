//! Content error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Refusing to open non-web URL: {0}")]
    UnsupportedScheme(String),

    #[error("Carousel error: {0}")]
    Carousel(#[from] folio_carousel::CarouselError),
}
