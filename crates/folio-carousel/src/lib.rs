//! folio Carousels
//!
//! Two kinds of carousel cycle through a fixed, non-empty list of images:
//! - [`TimedCarousel`] advances on a repeating timer that lives exactly as
//!   long as the carousel is mounted
//! - [`ManualCarousel`] only moves on explicit Prev/Next

mod error;
mod index;
mod manual;
mod sequence;
mod timed;
mod timer;

pub use error::CarouselError;
pub use index::CarouselIndex;
pub use manual::ManualCarousel;
pub use sequence::ImageSequence;
pub use timed::TimedCarousel;
pub use timer::{TimerGuard, TimerId, TimerPeriod, TimerRuntime, TimerTick};

pub type Result<T> = std::result::Result<T, CarouselError>;
