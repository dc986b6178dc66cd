//! Portfolio configuration

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use folio_carousel::{TimedCarousel, TimerPeriod};

use crate::error::CoreError;
use crate::Result;

/// Overrides `assets_dir` when set
pub const ASSETS_DIR_ENV: &str = "FOLIO_ASSETS_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the images and the résumé
    pub assets_dir: PathBuf,
    /// Where "Download Resume" saves its copy
    pub download_dir: PathBuf,
    /// Log file (the terminal belongs to the UI)
    pub log_path: PathBuf,
    /// Period of the About carousel
    pub slide_interval_ms: u64,
    /// Fade out/in when switching sections
    pub section_fade_ms: u64,
    /// Fade-in of a new About slide
    pub slide_fade_ms: u64,
    /// Fade-in of a new Music slide
    pub music_fade_ms: u64,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        let download_dir = dirs::download_dir().unwrap_or_else(|| data_dir.join("Downloads"));

        Self {
            assets_dir: data_dir.join("assets"),
            download_dir,
            log_path: data_dir.join("folio.log"),
            slide_interval_ms: TimedCarousel::DEFAULT_PERIOD_MS,
            section_fade_ms: 500,
            slide_fade_ms: 800,
            music_fade_ms: 500,
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_root()
            .map(|d| d.join("folio"))
            .unwrap_or_else(|| PathBuf::from(".folio"))
    }

    pub fn config_path() -> PathBuf {
        Self::data_dir().join("config.json")
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config file if there is one, then apply environment overrides
    pub fn load_or_default() -> Result<Self> {
        let path = Self::config_path();
        let config = if path.is_file() {
            tracing::info!(path = %path.display(), "Loading config");
            Self::load(&path)?
        } else {
            Self::default()
        };

        Ok(config.with_assets_override(std::env::var_os(ASSETS_DIR_ENV)))
    }

    pub fn with_assets_override(mut self, assets_dir: Option<OsString>) -> Self {
        if let Some(dir) = assets_dir.filter(|d| !d.is_empty()) {
            self.assets_dir = PathBuf::from(dir);
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.slide_interval_ms == 0 {
            return Err(CoreError::Config(
                "slide_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn slide_interval(&self) -> Result<TimerPeriod> {
        Ok(TimerPeriod::from_millis(self.slide_interval_ms)?)
    }

    pub fn section_fade(&self) -> Duration {
        Duration::from_millis(self.section_fade_ms)
    }

    pub fn slide_fade(&self) -> Duration {
        Duration::from_millis(self.slide_fade_ms)
    }

    pub fn music_fade(&self) -> Duration {
        Duration::from_millis(self.music_fade_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

// Per-user directories from the environment
mod dirs {
    use std::path::PathBuf;

    fn env_path(key: &str) -> Option<PathBuf> {
        std::env::var_os(key)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    fn home() -> Option<PathBuf> {
        env_path(if cfg!(windows) { "USERPROFILE" } else { "HOME" })
    }

    pub fn data_root() -> Option<PathBuf> {
        if cfg!(windows) {
            env_path("LOCALAPPDATA")
        } else if cfg!(target_os = "macos") {
            home().map(|h| h.join("Library/Application Support"))
        } else {
            env_path("XDG_DATA_HOME").or_else(|| home().map(|h| h.join(".local/share")))
        }
    }

    pub fn download_dir() -> Option<PathBuf> {
        env_path("XDG_DOWNLOAD_DIR").or_else(|| home().map(|h| h.join("Downloads")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_is_namespaced() {
        let data_dir = Config::data_dir();
        let name = data_dir.file_name().and_then(|n| n.to_str()).unwrap();
        assert!(name == "folio" || name == ".folio", "unexpected data dir {name}");
        assert_eq!(Config::config_path(), data_dir.join("config.json"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::new(PathBuf::from("/data/folio"));
        assert_eq!(config.assets_dir, PathBuf::from("/data/folio/assets"));
        assert_eq!(config.log_path, PathBuf::from("/data/folio/folio.log"));
        assert_eq!(config.slide_interval_ms, 6000);
        assert_eq!(config.section_fade(), Duration::from_millis(500));
        assert_eq!(config.slide_fade(), Duration::from_millis(800));
        assert_eq!(config.music_fade(), Duration::from_millis(500));
    }

    #[test]
    fn test_load_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "assets_dir": "/srv/public", "section_fade_ms": 0 }"#)
            .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.assets_dir, PathBuf::from("/srv/public"));
        assert_eq!(config.section_fade_ms, 0);
        assert_eq!(config.slide_interval_ms, 6000);
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config::new(PathBuf::from("/tmp/folio"));
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "slide_interval_ms": 0 }"#).unwrap();

        assert!(matches!(Config::load(&path), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(CoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_assets_override() {
        let config = Config::new(PathBuf::from("/data"));

        let same = config
            .clone()
            .with_assets_override(Some(OsString::new()));
        assert_eq!(same.assets_dir, config.assets_dir);

        let moved = config.with_assets_override(Some(OsString::from("/srv/public")));
        assert_eq!(moved.assets_dir, PathBuf::from("/srv/public"));
    }
}
