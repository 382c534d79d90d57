//! artist-page: renders a single-page artist profile from one document
//!
//! The document is front matter (indented `key: value` configuration)
//! followed by a markdown body. The content pipeline turns it into a
//! presentation model that a rendering layer can consume directly; missing
//! configuration never fails a render, it only produces warnings.

pub mod binding;
pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod pipeline;
pub mod server;
pub mod watcher;

use anyhow::Result;
use std::path::Path;

/// Name of the site configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// The artist page application
#[derive(Clone)]
pub struct ArtistPage {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Artist document
    pub source_path: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl ArtistPage {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_path = base_dir.join(&config.source);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            source_path,
            public_dir,
        })
    }

    /// Load the document and run one render pass
    pub fn render(&self) -> Result<pipeline::RenderOutput> {
        let source = content::loader::ContentLoader::new(self).load()?;
        Ok(pipeline::Pipeline::new(&self.config).run(source))
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }

    /// Generate the output files
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
