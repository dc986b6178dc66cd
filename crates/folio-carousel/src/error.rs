//! Carousel error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CarouselError {
    #[error("Image sequence cannot be empty")]
    EmptySequence,

    #[error("Timer period must be greater than zero")]
    ZeroPeriod,

    #[error("No async runtime available to schedule timers")]
    NoRuntime,
}
