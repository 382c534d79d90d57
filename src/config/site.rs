//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,

    // Directory
    /// Path of the artist document, relative to the base directory
    pub source: String,
    pub public_dir: String,

    // Content
    /// Canonical display name used when `artist.name` is missing
    pub display_name: String,
    /// Literal token in the body replaced by the display name
    pub placeholder_token: String,
    pub headings: HeadingPolicy,
    pub tab_width: usize,

    // Embeds
    pub embeds: EmbedsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            url: String::new(),

            source: "content/artist.md".to_string(),
            public_dir: "public".to_string(),

            display_name: "Artist".to_string(),
            placeholder_token: "{{artist}}".to_string(),
            headings: HeadingPolicy::default(),
            tab_width: 2,

            embeds: EmbedsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        // An empty _config.yml deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Site URL normalized to a single trailing slash, if one is configured
    pub fn site_url(&self) -> Option<String> {
        let url = self.url.trim().trim_end_matches('/');
        if url.is_empty() {
            None
        } else {
            Some(format!("{}/", url))
        }
    }
}

/// How the number of `#` markers on a heading line maps to a heading level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingPolicy {
    /// `#` is level 1, `##` level 2, up to `######`
    #[default]
    Direct,
    /// `#` and `##` both render as level 2; the page title owns level 1
    Shifted,
}

impl HeadingPolicy {
    /// Heading level for a run of `markers` hashes, or None when the run is
    /// not a heading at all
    pub fn level(self, markers: usize) -> Option<u8> {
        if markers == 0 || markers > 6 {
            return None;
        }
        let level = match self {
            HeadingPolicy::Direct => markers,
            HeadingPolicy::Shifted => markers.max(2),
        };
        Some(level as u8)
    }
}

/// Per-platform embed toggles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedsConfig {
    pub youtube: bool,
    pub spotify: bool,
    pub tiktok: bool,
    pub concerts: bool,
}

impl Default for EmbedsConfig {
    fn default() -> Self {
        Self {
            youtube: true,
            spotify: true,
            tiktok: true,
            concerts: true,
        }
    }
}

impl EmbedsConfig {
    /// Whether a field under an embed platform's section should be read.
    /// Paths outside the four embed sections are always enabled.
    pub fn enables(&self, path: &str) -> bool {
        match path.split('.').next() {
            Some("youtube") => self.youtube,
            Some("spotify") => self.spotify,
            Some("tiktok") => self.tiktok,
            Some("concerts") => self.concerts,
            _ => true,
        }
    }
}
