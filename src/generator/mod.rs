//! Generator module - writes the presentation model and markup fragments
//!
//! Output files in the public directory:
//! - `model.json`: presentation model, warnings and scripts to load
//! - `body.html`: rendered narrative body
//! - `head.html`: SEO tags followed by the embed scripts

mod scripts;

use anyhow::Result;
use serde::Serialize;
use std::fs;

pub use scripts::ScriptRegistry;

use crate::binding::{PresentationModel, Warning};
use crate::helpers::seo_head;
use crate::pipeline::RenderOutput;
use crate::ArtistPage;

pub const MODEL_FILE: &str = "model.json";
pub const BODY_FILE: &str = "body.html";
pub const HEAD_FILE: &str = "head.html";

/// Contents of `model.json`
#[derive(Debug, Serialize)]
struct SiteData<'a> {
    generated_at: String,
    generator: String,
    model: &'a PresentationModel,
    warnings: &'a [Warning],
    scripts: Vec<String>,
}

/// Writes render output to the public directory
pub struct Generator {
    site: ArtistPage,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &ArtistPage) -> Self {
        Self { site: site.clone() }
    }

    /// Write every output file
    pub fn generate(&self, output: &RenderOutput) -> Result<()> {
        fs::create_dir_all(&self.site.public_dir)?;

        let mut scripts = ScriptRegistry::new();
        for url in output.model.embeds.scripts() {
            scripts.register(&url);
        }

        let site_data = SiteData {
            generated_at: chrono::Local::now().to_rfc3339(),
            generator: format!("artist-page {}", env!("CARGO_PKG_VERSION")),
            model: &output.model,
            warnings: &output.warnings,
            scripts: scripts.urls(),
        };
        self.write(MODEL_FILE, &serde_json::to_string_pretty(&site_data)?)?;

        self.write(BODY_FILE, &output.model.body_html)?;

        let mut head = seo_head(&output.model.seo);
        if !scripts.is_empty() {
            head.push('\n');
            head.push_str(&scripts.to_html());
        }
        self.write(HEAD_FILE, &head)?;

        tracing::debug!(
            "Wrote {}, {} and {} to {:?}",
            MODEL_FILE,
            BODY_FILE,
            HEAD_FILE,
            self.site.public_dir
        );

        Ok(())
    }

    fn write(&self, name: &str, content: &str) -> Result<()> {
        let path = self.site.public_dir.join(name);
        fs::write(&path, content)?;
        Ok(())
    }
}
