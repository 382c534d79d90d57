//! Initialize a new artist site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::ArtistPage;

const CONFIG_TEMPLATE: &str = r#"# Artist page configuration

# Site
title: ''
url: ''

# Directory
source: content/artist.md
public_dir: public

# Content
display_name: Artist
placeholder_token: '{{artist}}'
# direct: '#' is h1, '##' is h2 ... / shifted: '#' and '##' are both h2
headings: direct
tab_width: 2

# Embeds
embeds:
  youtube: true
  spotify: true
  tiktok: true
  concerts: true
"#;

const DOCUMENT_TEMPLATE: &str = r#"---
artist:
  name: "{{name}}"
  tagline: Songs for late trains
seo:
  title: {{name}} | Official site
  description: Music, tour dates and booking for {{name}}.
  og_image: ~
  canonical: ~
social:
  spotify: ~
  tiktok: ~
  instagram: ~
  facebook: ~
  youtube: ~
booking:
  contact_name: ~
  email: ~
  phone: ~
  presskit: ~
youtube:
  latest_release:
    channel_id: ~
    label: Latest release
spotify:
  artist_embed: ~
  artist_url: ~
tiktok:
  profile_url: ~
  unique_id: ~
concerts:
  artist_page: ~
  artist_name: ~
  widget_artist_id: ~
  provider: bandsintown
---
# About {{artist}}

{{artist}} writes **songs** for *late trains*.

## Listen

- New single out now
- Full discography on [Bandcamp](https://bandcamp.com)
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("content"))?;

    let config_path = target_dir.join(crate::CONFIG_FILE);
    if config_path.exists() {
        tracing::info!("Keeping existing {:?}", config_path);
    } else {
        fs::write(&config_path, CONFIG_TEMPLATE)?;
    }

    let document_path = target_dir.join("content/artist.md");
    if document_path.exists() {
        tracing::info!("Keeping existing {:?}", document_path);
    } else {
        let name = target_dir
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("Artist");
        fs::write(&document_path, DOCUMENT_TEMPLATE.replace("{{name}}", name))?;
    }

    Ok(())
}

/// Run the init command with an existing instance
pub fn run(site: &ArtistPage) -> Result<()> {
    init_site(&site.base_dir)
}
