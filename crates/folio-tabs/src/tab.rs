//! Tab identifiers
//!
//! The navigation bar shows, in order:
//! - About Me
//! - Top 5 Music
//! - Experience / Goals

use serde::{Deserialize, Serialize};

use crate::error::TabError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Biography with the timed photo carousel
    #[default]
    About,
    /// Manual carousel of favourite songs
    Music,
    /// Experience, goals and the résumé download
    Experience,
}

impl Tab {
    /// All tabs in navigation order
    pub const ALL: [Tab; 3] = [Tab::About, Tab::Music, Tab::Experience];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::About => "about",
            Tab::Music => "music",
            Tab::Experience => "experience",
        }
    }

    /// Label shown in the navigation bar
    pub fn nav_label(&self) -> &'static str {
        match self {
            Tab::About => "About Me",
            Tab::Music => "Top 5 Music",
            Tab::Experience => "Experience / Goals",
        }
    }

    /// Position in the navigation bar
    pub fn position(&self) -> usize {
        match self {
            Tab::About => 0,
            Tab::Music => 1,
            Tab::Experience => 2,
        }
    }

    pub fn from_position(position: usize) -> Result<Self, TabError> {
        Self::ALL
            .get(position)
            .copied()
            .ok_or(TabError::OutOfRange(position))
    }

    /// The tab to the right, wrapping to the first
    pub fn next(&self) -> Tab {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping to the last
    pub fn prev(&self) -> Tab {
        if self.position() == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[self.position() - 1]
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Tab {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "about" => Ok(Tab::About),
            "music" => Ok(Tab::Music),
            "experience" => Ok(Tab::Experience),
            _ => Err(TabError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_about() {
        assert_eq!(Tab::default(), Tab::About);
    }

    #[test]
    fn test_parse() {
        assert_eq!("about".parse::<Tab>().unwrap(), Tab::About);
        assert_eq!("Music".parse::<Tab>().unwrap(), Tab::Music);
        assert_eq!(" experience ".parse::<Tab>().unwrap(), Tab::Experience);
        assert_eq!(
            "contact".parse::<Tab>(),
            Err(TabError::Unknown("contact".to_string()))
        );
    }

    #[test]
    fn test_positions() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_position(tab.position()).unwrap(), tab);
        }
        assert_eq!(Tab::from_position(3), Err(TabError::OutOfRange(3)));
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(Tab::About.next(), Tab::Music);
        assert_eq!(Tab::Experience.next(), Tab::About);
        assert_eq!(Tab::About.prev(), Tab::Experience);
        for tab in Tab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Tab::Experience).unwrap();
        assert_eq!(json, "\"experience\"");
        let tab: Tab = serde_json::from_str("\"music\"").unwrap();
        assert_eq!(tab, Tab::Music);
    }
}
