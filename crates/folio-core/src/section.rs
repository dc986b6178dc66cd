//! Mounted section state
//!
//! One variant per tab. Each variant owns its state outright; dropping a
//! section is its unmount, which for About also cancels the slide timer.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use folio_carousel::{ManualCarousel, TimedCarousel, TimerTick};
use folio_tabs::{Fade, Tab};

#[derive(Debug)]
pub enum Section {
    About(AboutSection),
    Music(MusicSection),
    Experience(ExperienceSection),
}

impl Section {
    pub fn tab(&self) -> Tab {
        match self {
            Section::About(_) => Tab::About,
            Section::Music(_) => Tab::Music,
            Section::Experience(_) => Tab::Experience,
        }
    }
}

#[derive(Debug)]
pub struct AboutSection {
    carousel: TimedCarousel,
    slide_fade: Fade,
    fade_duration: Duration,
}

impl AboutSection {
    pub(crate) fn new(carousel: TimedCarousel, fade_duration: Duration, now: Instant) -> Self {
        Self {
            carousel,
            slide_fade: Fade::fade_in(now, fade_duration),
            fade_duration,
        }
    }

    pub fn carousel(&self) -> &TimedCarousel {
        &self.carousel
    }

    /// Opacity of the current slide
    pub fn slide_opacity(&self, now: Instant) -> f32 {
        self.slide_fade.opacity(now)
    }

    pub(crate) fn on_tick(&mut self, tick: TimerTick, now: Instant) -> bool {
        let moved = self.carousel.on_tick(tick);
        if moved {
            self.slide_fade = Fade::fade_in(now, self.fade_duration);
        }
        moved
    }
}

#[derive(Debug)]
pub struct MusicSection {
    carousel: ManualCarousel,
    slide_fade: Fade,
    fade_duration: Duration,
}

impl MusicSection {
    pub(crate) fn new(carousel: ManualCarousel, fade_duration: Duration, now: Instant) -> Self {
        Self {
            carousel,
            slide_fade: Fade::fade_in(now, fade_duration),
            fade_duration,
        }
    }

    pub fn carousel(&self) -> &ManualCarousel {
        &self.carousel
    }

    pub fn slide_opacity(&self, now: Instant) -> f32 {
        self.slide_fade.opacity(now)
    }

    pub(crate) fn next(&mut self, now: Instant) {
        self.carousel.next();
        self.slide_fade = Fade::fade_in(now, self.fade_duration);
    }

    pub(crate) fn prev(&mut self, now: Instant) {
        self.carousel.prev();
        self.slide_fade = Fade::fade_in(now, self.fade_duration);
    }
}

#[derive(Debug, Default)]
pub struct ExperienceSection {
    saved_resume: Option<PathBuf>,
}

impl ExperienceSection {
    /// Where the résumé was saved since this section was mounted
    pub fn saved_resume(&self) -> Option<&PathBuf> {
        self.saved_resume.as_ref()
    }

    pub(crate) fn set_saved_resume(&mut self, path: PathBuf) {
        self.saved_resume = Some(path);
    }
}
