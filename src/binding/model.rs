//! Presentation model handed to the rendering layer

use indexmap::IndexMap;
use serde::Serialize;

/// Normalized, fully-defaulted view of one artist document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentationModel {
    pub artist: Artist,
    pub seo: Seo,
    /// Platform name to profile URL; platforms without a link are absent
    pub social: IndexMap<String, String>,
    pub booking: Booking,
    pub body_html: String,
    pub embeds: Embeds,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artist {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Seo {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    pub email: ContactEmail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presskit: Option<String>,
}

/// Booking email, or the affordance shown in its place
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContactEmail {
    Address { address: String, href: String },
    Placeholder { text: String },
}

impl ContactEmail {
    pub fn address(address: &str) -> Self {
        ContactEmail::Address {
            address: address.to_string(),
            href: format!("mailto:{}", address),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ContactEmail::Placeholder { .. })
    }
}

/// Whether and how to request a third-party widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EmbedRequest<P> {
    Available { params: P },
    /// Not enough configuration; show a placeholder instead
    Unavailable { placeholder: String },
    /// Switched off in the site configuration
    Disabled,
}

impl<P> EmbedRequest<P> {
    pub fn params(&self) -> Option<&P> {
        match self {
            EmbedRequest::Available { params } => Some(params),
            _ => None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.params().is_some()
    }

    pub(crate) fn unavailable(placeholder: &str) -> Self {
        EmbedRequest::Unavailable {
            placeholder: placeholder.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embeds {
    pub youtube: EmbedRequest<YoutubeEmbed>,
    pub spotify: EmbedRequest<SpotifyEmbed>,
    pub tiktok: EmbedRequest<TiktokEmbed>,
    pub concerts: EmbedRequest<ConcertsEmbed>,
}

impl Embeds {
    /// Third-party scripts the available embeds need, in platform order
    pub fn scripts(&self) -> Vec<String> {
        let mut scripts = Vec::new();
        if let Some(tiktok) = self.tiktok.params() {
            scripts.push(tiktok.script.clone());
        }
        if let Some(concerts) = self.concerts.params() {
            scripts.push(concerts.script.clone());
        }
        scripts
    }
}

/// Uploads-playlist player for a YouTube channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YoutubeEmbed {
    pub channel_id: String,
    pub playlist_id: String,
    pub src: String,
    pub label: String,
    pub loading: String,
    pub height: u32,
    pub allow: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpotifyEmbed {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TiktokEmbed {
    pub unique_id: String,
    pub profile_url: String,
    pub script: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcertProvider {
    Bandsintown,
    Songkick,
}

impl ConcertProvider {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bandsintown" => Some(ConcertProvider::Bandsintown),
            "songkick" => Some(ConcertProvider::Songkick),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConcertsEmbed {
    pub provider: ConcertProvider,
    pub widget_artist_id: String,
    pub artist_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_page: Option<String>,
    pub script: String,
}
