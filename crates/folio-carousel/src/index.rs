//! Wrapping carousel index

use std::num::NonZeroUsize;

/// Position in an image sequence. Always in `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselIndex {
    value: usize,
    len: NonZeroUsize,
}

impl CarouselIndex {
    pub fn new(len: NonZeroUsize) -> Self {
        Self { value: 0, len }
    }

    pub fn get(&self) -> usize {
        self.value
    }

    /// Move forward one, wrapping to 0 past the end
    pub fn advance(&mut self) {
        self.value = (self.value + 1) % self.len.get();
    }

    /// Move back one, wrapping to the last image before 0
    pub fn retreat(&mut self) {
        self.value = if self.value == 0 {
            self.len.get() - 1
        } else {
            self.value - 1
        };
    }
}
