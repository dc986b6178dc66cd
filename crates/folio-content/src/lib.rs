//! folio Content
//!
//! Everything the portfolio displays: section copy, the two image lists,
//! the résumé asset and the outbound link.

mod error;
mod link;
mod profile;

pub use error::ContentError;
pub use link::{ExternalLink, ResumeAsset};
pub use profile::{Profile, ABOUT_IMAGES, MUSIC_IMAGES};

pub type Result<T> = std::result::Result<T, ContentError>;
