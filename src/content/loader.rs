//! Content loader - reads the artist document, falling back to defaults

use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use super::tree::{ConfigNode, Mapping};
use crate::config::SiteConfig;
use crate::ArtistPage;

/// Why the source document could not be obtained
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source document not found: {0:?}")]
    NotFound(PathBuf),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("source document is not valid UTF-8: {0:?}")]
    NotUtf8(PathBuf),
}

/// What a render pass starts from
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// The raw document text
    Document(String),
    /// Retrieval failed; render this configuration with an empty body
    Fallback(ConfigNode),
}

/// Loads the artist document from the configured source path
pub struct ContentLoader<'a> {
    site: &'a ArtistPage,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a ArtistPage) -> Self {
        Self { site }
    }

    /// Read the document text
    pub fn fetch(&self) -> Result<String, LoadError> {
        let path = &self.site.source_path;
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(path.clone()),
            _ => LoadError::Io {
                path: path.clone(),
                source: e,
            },
        })?;

        String::from_utf8(bytes).map_err(|_| LoadError::NotUtf8(path.clone()))
    }

    /// Fetch the document, or substitute the built-in default configuration
    /// when it cannot be read. Content that is not text at all is still an
    /// error.
    pub fn load(&self) -> Result<Source, LoadError> {
        match self.fetch() {
            Ok(text) => {
                tracing::debug!(
                    "Loaded {:?} ({} bytes)",
                    self.site.source_path,
                    text.len()
                );
                Ok(Source::Document(text))
            }
            Err(e @ LoadError::NotUtf8(_)) => Err(e),
            Err(e) => {
                tracing::warn!("{}; rendering built-in defaults", e);
                Ok(Source::Fallback(default_tree(&self.site.config)))
            }
        }
    }
}

/// Configuration used when the document cannot be retrieved
pub fn default_tree(config: &SiteConfig) -> ConfigNode {
    let mut artist = Mapping::new();
    artist.insert(
        "name".to_string(),
        ConfigNode::Text(config.display_name.clone()),
    );

    let mut root = Mapping::new();
    root.insert("artist".to_string(), ConfigNode::Mapping(artist));

    if !config.title.is_empty() {
        let mut seo = Mapping::new();
        seo.insert("title".to_string(), ConfigNode::Text(config.title.clone()));
        root.insert("seo".to_string(), ConfigNode::Mapping(seo));
    }

    ConfigNode::Mapping(root)
}
