//! Portfolio copy

use folio_carousel::ImageSequence;

use crate::link::{ExternalLink, ResumeAsset};
use crate::Result;

pub const ABOUT_IMAGES: [&str; 3] = ["/IMG_4876.jpeg", "/IMG_5102.jpeg", "/IMG_5104.jpeg"];

pub const MUSIC_IMAGES: [&str; 5] = [
    "/song1.jpeg",
    "/song2.jpeg",
    "/song3.jpeg",
    "/song4.jpeg",
    "/song5.jpeg",
];

const ABOUT_BIO: &str = "Hi, I’m Uriel! I’m a Junior at the University of Illinois \
Urbana-Champaign, studying Computer Science and Learning Sciences. I grew up on Chicago’s \
southwest side in a Mexican immigrant family, which has shaped my perspective and values. \
I’m excited about exploring how technology and education intersect to make a positive impact.";

const EXPERIENCE_BACKGROUND: &str = "I graduated high school with both my high school diploma \
and an associate’s degree in Computer Science through a dual enrollment program, which I was \
fortunate to have access to. I am currently a student at the University of Illinois \
Urbana-Champaign. My experience includes working on various projects outside of school, \
including a website I am developing with a peer for a Sunday Soccer League. I am passionate \
about helping and fostering the next generation, especially in the tech field. Where I grew \
up, opportunities to explore tech-related fields like Computer Science are extremely limited \
compared to other parts of the city with more resources. My goal is to help close this gap by \
providing future generations with greater access to opportunities in technology, encouraging \
them to bring their ideas to the table, foster innovation, and pursue their passions. I aim to \
achieve this through improvements and expansion of CS and tech curricula, as well as by \
developing apps, websites, and other online resources that make learning Computer Science in \
a structured and accessible way available to all.";

const EXPERIENCE_GAMES: &str = "Another area that piques my interest is game development, \
particularly exploring innovative ways games can be used as tools to enhance education both \
within and outside of the tech field. Research shows that games can be highly effective in \
educational settings, but the biggest challenge lies in making these opportunities easily \
accessible for all students and schools—especially given the ongoing issues of affordability \
for families and educational institutions.";

/// Static copy for every section
#[derive(Debug, Clone)]
pub struct Profile {
    pub about_heading: &'static str,
    pub about_bio: &'static str,
    pub music_heading: &'static str,
    pub experience_heading: &'static str,
    pub experience_paragraphs: Vec<&'static str>,
    /// Closing paragraph of the experience section, with its link
    pub league_link: ExternalLink,
    pub resume: ResumeAsset,
}

impl Profile {
    /// Photos rotated in the About section
    pub fn about_images(&self) -> Result<ImageSequence> {
        Ok(ImageSequence::new(ABOUT_IMAGES)?.with_alt_prefix("Slide"))
    }

    /// Album covers stepped through in the Music section
    pub fn music_images(&self) -> Result<ImageSequence> {
        Ok(ImageSequence::new(MUSIC_IMAGES)?.with_alt_prefix("Music"))
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            about_heading: "About Me",
            about_bio: ABOUT_BIO,
            music_heading: "Top 5 Music",
            experience_heading: "Experience & Goals",
            experience_paragraphs: vec![EXPERIENCE_BACKGROUND, EXPERIENCE_GAMES],
            league_link: ExternalLink {
                before: "I am excited about the progress of our website for Promo Soccer \
League. You can check it out ",
                label: "here",
                after: " ⚽.",
                href: "https://uhern20.github.io/SoccerLeagueWebsite/",
            },
            resume: ResumeAsset {
                label: "Download Resume",
                file_name: "Updated_Resume_UrielHernandez - Google Docs.pdf",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_lists() {
        let profile = Profile::default();
        assert_eq!(profile.about_images().unwrap().len().get(), 3);
        assert_eq!(profile.music_images().unwrap().len().get(), 5);
    }

    #[test]
    fn test_alt_prefixes() {
        let profile = Profile::default();
        let about = profile.about_images().unwrap();
        assert_eq!(about.alt_text(&about.start()), "Slide 1");
        let music = profile.music_images().unwrap();
        assert_eq!(music.alt_text(&music.start()), "Music 1");
    }

    #[test]
    fn test_league_link_is_web_url() {
        let profile = Profile::default();
        let url = profile.league_link.url().unwrap();
        assert_eq!(url.scheme(), "https");
        assert!(profile.league_link.sentence().contains("check it out here"));
    }

    #[test]
    fn test_copy_has_no_stray_whitespace() {
        let profile = Profile::default();
        for paragraph in profile
            .experience_paragraphs
            .iter()
            .chain(std::iter::once(&profile.about_bio))
        {
            assert_eq!(paragraph.trim(), *paragraph);
            assert!(!paragraph.contains("  "));
        }
    }
}
