//! Binding module - maps the parsed configuration onto the presentation model
//!
//! Every field in [`fields::FIELDS`] is resolved on every pass. A missing
//! field never stops the binding: it gets its default and a [`Warning`]
//! naming the dotted path.

pub mod embed;
pub mod fields;
mod lookup;
mod model;

use indexmap::IndexMap;
use serde::Serialize;

pub use lookup::{lookup, FieldLookup};
pub use model::{
    Artist, Booking, ConcertProvider, ConcertsEmbed, ContactEmail, EmbedRequest, Embeds,
    PresentationModel, Seo, SpotifyEmbed, TiktokEmbed, YoutubeEmbed,
};

use crate::config::{EmbedsConfig, SiteConfig};
use crate::content::ConfigNode;
use fields::*;

/// Why a field could not be bound as written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningReason {
    Missing,
    /// A nested block where a single value was expected
    WrongShape,
    /// Present but not a value this binder knows how to use
    Unsupported,
}

impl std::fmt::Display for WarningReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            WarningReason::Missing => "missing",
            WarningReason::WrongShape => "wrong_shape",
            WarningReason::Unsupported => "unsupported",
        };
        f.write_str(reason)
    }
}

/// A field that fell back to its default
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub path: String,
    pub reason: WarningReason,
}

impl Warning {
    pub fn new(path: &str, reason: WarningReason) -> Self {
        Self {
            path: path.to_string(),
            reason,
        }
    }
}

/// Output of one binding pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binding {
    pub model: PresentationModel,
    pub warnings: Vec<Warning>,
}

/// Maps a configuration tree onto a [`PresentationModel`]
#[derive(Debug, Clone)]
pub struct ContentBinder {
    display_name: String,
    site_url: Option<String>,
    embeds: EmbedsConfig,
}

impl Default for ContentBinder {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}

impl ContentBinder {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            display_name: config.display_name.clone(),
            site_url: config.site_url(),
            embeds: config.embeds.clone(),
        }
    }

    /// The artist name as it will be displayed, without recording warnings
    pub fn display_name(&self, tree: &ConfigNode) -> String {
        lookup(tree, ARTIST_NAME)
            .node()
            .and_then(scalar_text)
            .unwrap_or_else(|| self.display_name.clone())
    }

    /// Bind `tree` and the rendered body markup into a presentation model
    pub fn bind(&self, tree: &ConfigNode, body_html: &str) -> Binding {
        let mut fields = ResolvedFields::resolve(tree, &self.embeds);

        let name = fields
            .take(ARTIST_NAME)
            .unwrap_or_else(|| self.display_name.clone());
        let tagline = fields.take(ARTIST_TAGLINE);

        let seo = Seo {
            title: fields.take(SEO_TITLE).unwrap_or_else(|| name.clone()),
            description: fields.take(SEO_DESCRIPTION).unwrap_or_else(|| {
                tagline
                    .clone()
                    .unwrap_or_else(|| format!("Official website of {}", name))
            }),
            og_image: fields.take(SEO_OG_IMAGE),
            canonical: fields.take(SEO_CANONICAL).or_else(|| self.site_url.clone()),
        };

        let mut social = IndexMap::new();
        for (platform, path) in SOCIAL_PLATFORMS {
            if let Some(url) = fields.take(path) {
                social.insert(platform.to_string(), url);
            }
        }

        let booking = Booking {
            contact_name: fields.take(BOOKING_CONTACT_NAME),
            email: match fields.take(BOOKING_EMAIL) {
                Some(address) => ContactEmail::address(&address),
                None => ContactEmail::Placeholder {
                    text: BOOKING_EMAIL_PLACEHOLDER.to_string(),
                },
            },
            phone: fields.take(BOOKING_PHONE),
            presskit: fields.take(BOOKING_PRESSKIT),
        };

        let mut warnings = std::mem::take(&mut fields.warnings);
        let embeds = self.bind_embeds(&mut fields, &name, &mut warnings);

        let model = PresentationModel {
            artist: Artist { name, tagline },
            seo,
            social,
            booking,
            body_html: body_html.to_string(),
            embeds,
        };

        Binding { model, warnings }
    }

    fn bind_embeds(
        &self,
        fields: &mut ResolvedFields,
        name: &str,
        warnings: &mut Vec<Warning>,
    ) -> Embeds {
        let channel_id = fields.take(YOUTUBE_CHANNEL_ID);
        let label = fields.take(YOUTUBE_LABEL).unwrap_or_default();
        let youtube = if self.embeds.youtube {
            embed::youtube(channel_id.as_deref(), &label)
        } else {
            EmbedRequest::Disabled
        };

        let artist_embed = fields.take(SPOTIFY_ARTIST_EMBED);
        let artist_url = fields.take(SPOTIFY_ARTIST_URL);
        let spotify = if self.embeds.spotify {
            embed::spotify(artist_embed.as_deref(), artist_url.as_deref())
        } else {
            EmbedRequest::Disabled
        };

        let profile_url = fields.take(TIKTOK_PROFILE_URL);
        let unique_id = fields.take(TIKTOK_UNIQUE_ID);
        let tiktok = if self.embeds.tiktok {
            embed::tiktok(profile_url.as_deref(), unique_id.as_deref())
        } else {
            EmbedRequest::Disabled
        };

        let artist_page = fields.take(CONCERTS_ARTIST_PAGE);
        let artist_name = fields
            .take(CONCERTS_ARTIST_NAME)
            .unwrap_or_else(|| name.to_string());
        let widget_artist_id = fields.take(CONCERTS_WIDGET_ARTIST_ID);
        let provider = fields.take(CONCERTS_PROVIDER).unwrap_or_default();
        let concerts = if self.embeds.concerts {
            embed::concerts(
                &provider,
                widget_artist_id.as_deref(),
                &artist_name,
                artist_page.as_deref(),
                warnings,
            )
        } else {
            EmbedRequest::Disabled
        };

        Embeds {
            youtube,
            spotify,
            tiktok,
            concerts,
        }
    }
}

/// Text of every enumerated field, with literal fallbacks applied.
/// Fields of a switched-off embed are never read and never warn.
struct ResolvedFields {
    values: IndexMap<&'static str, Option<String>>,
    warnings: Vec<Warning>,
}

impl ResolvedFields {
    fn resolve(tree: &ConfigNode, embeds: &EmbedsConfig) -> Self {
        let mut values = IndexMap::new();
        let mut warnings = Vec::new();

        for spec in FIELDS.iter().filter(|spec| embeds.enables(spec.path)) {
            let value = match lookup(tree, spec.path) {
                // Every bound field is text, a URL or an address
                FieldLookup::Present(node) if node.is_mapping() || node.as_bool().is_some() => {
                    warnings.push(Warning::new(spec.path, WarningReason::WrongShape));
                    None
                }
                FieldLookup::Present(node) => {
                    let text = scalar_text(node);
                    if text.is_none() {
                        warnings.push(Warning::new(spec.path, WarningReason::Missing));
                    }
                    text
                }
                FieldLookup::Missing(path) => {
                    warnings.push(Warning::new(&path, WarningReason::Missing));
                    None
                }
            };

            let value = match (value, spec.fallback) {
                (None, Fallback::Literal(text)) => Some(text.to_string()),
                (value, _) => value,
            };
            values.insert(spec.path, value);
        }

        Self { values, warnings }
    }

    fn take(&mut self, path: &str) -> Option<String> {
        self.values.get_mut(path).and_then(Option::take)
    }
}

/// Display text of a text node; blank text counts as absent
fn scalar_text(node: &ConfigNode) -> Option<String> {
    let text = node.as_text()?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
