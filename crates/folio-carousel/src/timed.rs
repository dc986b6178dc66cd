//! Carousel that advances on its own timer
//!
//! The timer is started in [`TimedCarousel::mount`] and cancelled when the
//! carousel is dropped. Ticks from any other timer, including a cancelled
//! predecessor whose tick was already queued, are ignored.

use crate::index::CarouselIndex;
use crate::sequence::ImageSequence;
use crate::timer::{TimerGuard, TimerId, TimerPeriod, TimerRuntime, TimerTick};

#[derive(Debug)]
pub struct TimedCarousel {
    images: ImageSequence,
    index: CarouselIndex,
    timer: TimerGuard,
}

impl TimedCarousel {
    pub const DEFAULT_PERIOD_MS: u64 = 6000;

    /// Mount the carousel at the first image and start its timer
    pub fn mount(images: ImageSequence, timers: &TimerRuntime, period: TimerPeriod) -> Self {
        let timer = timers.start(period);
        let index = images.start();

        tracing::debug!(
            timer_id = timer.id(),
            images = images.len().get(),
            "Timed carousel mounted"
        );

        Self {
            images,
            index,
            timer,
        }
    }

    pub fn timer_id(&self) -> TimerId {
        self.timer.id()
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

    /// Apply a timer firing. Returns whether the index moved.
    pub fn on_tick(&mut self, tick: TimerTick) -> bool {
        if tick.timer_id != self.timer.id() {
            tracing::trace!(
                tick_timer = tick.timer_id,
                own_timer = self.timer.id(),
                "Ignoring tick from foreign timer"
            );
            return false;
        }

        self.index.advance();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photos() -> ImageSequence {
        ImageSequence::new(["/IMG_4876.jpeg", "/IMG_5102.jpeg", "/IMG_5104.jpeg"])
            .unwrap()
            .with_alt_prefix("Slide")
    }

    fn six_seconds() -> TimerPeriod {
        TimerPeriod::from_millis(TimedCarousel::DEFAULT_PERIOD_MS).unwrap()
    }

    fn tick_n(carousel: &mut TimedCarousel, n: usize) {
        let tick = TimerTick {
            timer_id: carousel.timer_id(),
        };
        for _ in 0..n {
            assert!(carousel.on_tick(tick));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_wrap_modulo_length() {
        let (timers, _rx) = TimerRuntime::new().unwrap();

        let mut carousel = TimedCarousel::mount(photos(), &timers, six_seconds());
        assert_eq!(carousel.index(), 0);
        tick_n(&mut carousel, 1);
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.alt_text(), "Slide 2");
        tick_n(&mut carousel, 2);
        assert_eq!(carousel.index(), 0);

        let mut long_run = TimedCarousel::mount(photos(), &timers, six_seconds());
        tick_n(&mut long_run, 301);
        assert_eq!(long_run.index(), 301 % 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_foreign_tick_ignored() {
        let (timers, _rx) = TimerRuntime::new().unwrap();
        let mut carousel = TimedCarousel::mount(photos(), &timers, six_seconds());

        let stale = TimerTick {
            timer_id: carousel.timer_id() + 100,
        };
        assert!(!carousel.on_tick(stale));
        assert_eq!(carousel.index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_driven_by_real_timer() {
        let (timers, mut rx) = TimerRuntime::new().unwrap();
        let mut carousel = TimedCarousel::mount(photos(), &timers, six_seconds());

        for expected in [1, 2, 0, 1] {
            let tick = rx.recv().await.unwrap();
            assert!(carousel.on_tick(tick));
            assert_eq!(carousel.index(), expected);
        }
        assert_eq!(carousel.current(), "/IMG_5102.jpeg");
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_unmount_cycles_leave_no_timers() {
        let (timers, _rx) = TimerRuntime::new().unwrap();

        for _ in 0..10 {
            let carousel = TimedCarousel::mount(photos(), &timers, six_seconds());
            assert_eq!(timers.active_timers(), 1);
            drop(carousel);
            assert_eq!(timers.active_timers(), 0);
        }
    }
}
