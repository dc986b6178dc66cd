//! Outbound link and downloadable asset

use std::path::Path;

use url::Url;

use crate::error::ContentError;
use crate::Result;

/// A hyperlink embedded in a paragraph, opened in a new browsing context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    /// Text before the link
    pub before: &'static str,
    /// Link text
    pub label: &'static str,
    /// Text after the link
    pub after: &'static str,
    pub href: &'static str,
}

impl ExternalLink {
    /// Parse the target, accepting only http and https
    pub fn url(&self) -> Result<Url> {
        let url = Url::parse(self.href)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ContentError::UnsupportedScheme(other.to_string())),
        }
    }

    /// The whole sentence with the label inline
    pub fn sentence(&self) -> String {
        format!("{}{}{}", self.before, self.label, self.after)
    }
}

/// A document offered as a "save to disk" download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeAsset {
    pub label: &'static str,
    /// Path relative to the assets directory
    pub file_name: &'static str,
}

impl ResumeAsset {
    /// Name the saved copy should get, without any directory part
    pub fn download_name(&self) -> String {
        let name = Path::new(self.file_name)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("download")
            .trim();

        if name.is_empty() {
            "download".to_string()
        } else {
            name.to_string()
        }
    }
}
