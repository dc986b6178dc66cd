//! Immutable image sequences

use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::error::CarouselError;
use crate::index::CarouselIndex;
use crate::Result;

/// Ordered, fixed, non-empty list of image references.
///
/// Cloning shares the underlying list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSequence {
    images: Arc<[String]>,
    /// Prefix for generated alt text, e.g. "Slide" gives "Slide 1"
    alt_prefix: Arc<str>,
}

impl ImageSequence {
    pub fn new<I, S>(images: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let images: Vec<String> = images.into_iter().map(Into::into).collect();
        if images.is_empty() {
            return Err(CarouselError::EmptySequence);
        }

        Ok(Self {
            images: images.into(),
            alt_prefix: Arc::from("Image"),
        })
    }

    pub fn with_alt_prefix(mut self, prefix: &str) -> Self {
        self.alt_prefix = Arc::from(prefix);
        self
    }

    pub fn len(&self) -> NonZeroUsize {
        // Checked non-empty in `new`
        NonZeroUsize::new(self.images.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// The image an index points at
    pub fn at(&self, index: &CarouselIndex) -> &str {
        &self.images[index.get() % self.images.len()]
    }

    /// Index at the first image
    pub fn start(&self) -> CarouselIndex {
        CarouselIndex::new(self.len())
    }

    pub fn alt_text(&self, index: &CarouselIndex) -> String {
        format!("{} {}", self.alt_prefix, index.get() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_rejected() {
        let result = ImageSequence::new(Vec::<String>::new());
        assert_eq!(result, Err(CarouselError::EmptySequence));
    }

    #[test]
    fn test_lookup_and_alt_text() {
        let images = ImageSequence::new(["/a.jpeg", "/b.jpeg", "/c.jpeg"])
            .unwrap()
            .with_alt_prefix("Slide");
        assert_eq!(images.len().get(), 3);

        let mut index = images.start();
        assert_eq!(images.at(&index), "/a.jpeg");
        assert_eq!(images.alt_text(&index), "Slide 1");

        index.advance();
        assert_eq!(images.at(&index), "/b.jpeg");

        index.advance();
        assert_eq!(images.at(&index), "/c.jpeg");
        assert_eq!(images.alt_text(&index), "Slide 3");
    }

    #[test]
    fn test_clone_shares_images() {
        let images = ImageSequence::new(["/a.jpeg"]).unwrap();
        let copy = images.clone();
        assert_eq!(images, copy);
        assert_eq!(copy.at(&copy.start()), "/a.jpeg");
    }
}
