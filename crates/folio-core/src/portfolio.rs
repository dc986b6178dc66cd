//! Portfolio view state
//!
//! Owns the tab selector and the single mounted section. All mutation goes
//! through `&mut self` on the event loop, in the order events arrive.

use std::path::PathBuf;
use std::time::Instant;

use folio_carousel::{
    ImageSequence, ManualCarousel, TimedCarousel, TimerPeriod, TimerRuntime, TimerTick,
};
use folio_content::{ExternalLink, Profile};
use folio_tabs::{Fade, Phase, Selection, Tab, TabSelector};

use crate::config::Config;
use crate::resume;
use crate::section::{AboutSection, ExperienceSection, MusicSection, Section};
use crate::Result;

pub struct Portfolio {
    config: Config,
    profile: Profile,
    about_images: ImageSequence,
    music_images: ImageSequence,
    slide_interval: TimerPeriod,
    timers: TimerRuntime,
    selector: TabSelector,
    /// The one rendered section
    mounted: Section,
    phase: Phase,
    /// Fade of the mounted section for the current phase
    fade: Fade,
    /// Tab to mount once the exiting section has faded out
    pending: Option<Tab>,
}

impl Portfolio {
    /// Mount the default tab and start fading it in
    pub fn new(config: Config, timers: TimerRuntime, now: Instant) -> Result<Self> {
        config.validate()?;

        let profile = Profile::default();
        let about_images = profile.about_images()?;
        let music_images = profile.music_images()?;
        let slide_interval = config.slide_interval()?;
        let selector = TabSelector::new();

        let mut portfolio = Self {
            fade: Fade::fade_in(now, config.section_fade()),
            mounted: Section::Experience(ExperienceSection::default()),
            config,
            profile,
            about_images,
            music_images,
            slide_interval,
            timers,
            selector,
            phase: Phase::Entering,
            pending: None,
        };
        portfolio.mounted = portfolio.mount(portfolio.selector.active(), now);
        portfolio.advance(now);

        tracing::info!(tab = %portfolio.active_tab(), "Portfolio initialized");

        Ok(portfolio)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn timers(&self) -> &TimerRuntime {
        &self.timers
    }

    // === Tabs ===

    /// The tab highlighted in the navigation bar
    pub fn active_tab(&self) -> Tab {
        self.selector.active()
    }

    /// The tab whose section is currently mounted. Differs from
    /// [`active_tab`](Self::active_tab) only while a section is exiting.
    pub fn rendered_tab(&self) -> Tab {
        self.mounted.tab()
    }

    pub fn section(&self) -> &Section {
        &self.mounted
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Opacity of the mounted section
    pub fn section_opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Shown => 1.0,
            Phase::Entering | Phase::Exiting => self.fade.opacity(now),
        }
    }

    /// Select a tab. The mounted section fades out first; with a zero fade
    /// the new section is mounted before this returns.
    pub fn select(&mut self, tab: Tab, now: Instant) -> Selection {
        let selection = self.selector.select(tab);

        if let Selection::Switched { from, to } = selection {
            tracing::info!(from = %from, to = %to, "Switching section");

            if self.phase != Phase::Exiting {
                let current = self.section_opacity(now);
                self.set_phase(Phase::Exiting);
                self.fade = Fade::fade_out(now, self.config.section_fade(), current);
            }
            self.pending = Some(to);
            self.advance(now);
        }

        selection
    }

    pub fn select_next(&mut self, now: Instant) -> Selection {
        self.select(self.active_tab().next(), now)
    }

    pub fn select_prev(&mut self, now: Instant) -> Selection {
        self.select(self.active_tab().prev(), now)
    }

    /// Finish any fades that are complete at `now`
    pub fn advance(&mut self, now: Instant) {
        while self.fade.is_complete(now) {
            match self.phase {
                Phase::Entering => self.set_phase(Phase::Shown),
                Phase::Exiting => self.swap(now),
                Phase::Shown => break,
            }
        }
    }

    fn swap(&mut self, now: Instant) {
        let target = self.pending.take().unwrap_or_else(|| self.selector.active());

        // The old section, and with it any timer, is gone before the next mounts
        let unmounted = std::mem::replace(
            &mut self.mounted,
            Section::Experience(ExperienceSection::default()),
        );
        tracing::debug!(tab = %unmounted.tab(), "Section unmounted");
        drop(unmounted);

        self.mounted = self.mount(target, now);
        self.set_phase(Phase::Entering);
        self.fade = Fade::fade_in(now, self.config.section_fade());
    }

    fn mount(&self, tab: Tab, now: Instant) -> Section {
        tracing::debug!(tab = %tab, "Section mounted");

        match tab {
            Tab::About => {
                let carousel = TimedCarousel::mount(
                    self.about_images.clone(),
                    &self.timers,
                    self.slide_interval,
                );
                Section::About(AboutSection::new(carousel, self.config.slide_fade(), now))
            }
            Tab::Music => {
                let carousel = ManualCarousel::new(self.music_images.clone());
                Section::Music(MusicSection::new(carousel, self.config.music_fade(), now))
            }
            Tab::Experience => Section::Experience(ExperienceSection::default()),
        }
    }

    fn set_phase(&mut self, next: Phase) {
        if let Err(e) = self.phase.transition_to(next) {
            tracing::warn!(error = %e, "Unexpected section phase change");
            self.phase = next;
        }
    }

    // === Carousels ===

    /// Apply a timer firing. Returns whether the About slide moved; firings
    /// from timers of unmounted carousels are dropped.
    pub fn on_timer(&mut self, tick: TimerTick, now: Instant) -> bool {
        match &mut self.mounted {
            Section::About(about) => about.on_tick(tick, now),
            _ => {
                tracing::trace!(timer_id = tick.timer_id, "Tick with no timed carousel mounted");
                false
            }
        }
    }

    /// Next song. Returns false when the Music section is not mounted.
    pub fn music_next(&mut self, now: Instant) -> bool {
        match &mut self.mounted {
            Section::Music(music) => {
                music.next(now);
                true
            }
            _ => false,
        }
    }

    /// Previous song. Returns false when the Music section is not mounted.
    pub fn music_prev(&mut self, now: Instant) -> bool {
        match &mut self.mounted {
            Section::Music(music) => {
                music.prev(now);
                true
            }
            _ => false,
        }
    }

    // === Experience ===

    pub fn league_link(&self) -> &ExternalLink {
        &self.profile.league_link
    }

    /// Save a copy of the résumé into the download directory
    pub fn download_resume(&mut self) -> Result<PathBuf> {
        let asset = &self.profile.resume;
        let source = self.config.assets_dir.join(asset.file_name);
        let saved =
            resume::save_copy(&source, &self.config.download_dir, &asset.download_name())?;

        if let Section::Experience(experience) = &mut self.mounted {
            experience.set_saved_resume(saved.clone());
        }

        Ok(saved)
    }

    /// Whether any fade is still running, i.e. the view needs redrawing
    pub fn is_animating(&self, now: Instant) -> bool {
        if self.phase != Phase::Shown {
            return true;
        }
        match &self.mounted {
            Section::About(about) => about.slide_opacity(now) < 1.0,
            Section::Music(music) => music.slide_opacity(now) < 1.0,
            Section::Experience(_) => false,
        }
    }
}
