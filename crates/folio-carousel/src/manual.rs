//! Carousel driven only by Prev/Next

use crate::index::CarouselIndex;
use crate::sequence::ImageSequence;

#[derive(Debug, Clone)]
pub struct ManualCarousel {
    images: ImageSequence,
    index: CarouselIndex,
}

impl ManualCarousel {
    pub fn new(images: ImageSequence) -> Self {
        let index = images.start();
        Self { images, index }
    }

    pub fn index(&self) -> usize {
        self.index.get()
    }

    pub fn len(&self) -> usize {
        self.images.len().get()
    }

    pub fn current(&self) -> &str {
        self.images.at(&self.index)
    }

    pub fn alt_text(&self) -> String {
        self.images.alt_text(&self.index)
    }

    pub fn next(&mut self) {
        self.index.advance();
        tracing::trace!(index = self.index.get(), "Manual carousel next");
    }

    pub fn prev(&mut self) {
        self.index.retreat();
        tracing::trace!(index = self.index.get(), "Manual carousel prev");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn songs() -> ManualCarousel {
        let images = ImageSequence::new((1..=5).map(|n| format!("/song{n}.jpeg")))
            .unwrap()
            .with_alt_prefix("Music");
        ManualCarousel::new(images)
    }

    #[test]
    fn test_prev_from_start_wraps_to_end() {
        let mut carousel = songs();
        carousel.prev();
        assert_eq!(carousel.index(), 4);
        assert_eq!(carousel.current(), "/song5.jpeg");
        assert_eq!(carousel.alt_text(), "Music 5");
    }

    #[test]
    fn test_next_from_end_wraps_to_start() {
        let mut carousel = songs();
        carousel.prev();
        carousel.next();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.current(), "/song1.jpeg");
    }

    #[test]
    fn test_next_and_prev_are_inverse() {
        let mut carousel = songs();
        for start in 0..carousel.len() {
            assert_eq!(carousel.index(), start);

            carousel.next();
            carousel.prev();
            assert_eq!(carousel.index(), start);

            carousel.prev();
            carousel.next();
            assert_eq!(carousel.index(), start);

            carousel.next();
        }
    }
}
