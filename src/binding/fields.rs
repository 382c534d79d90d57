//! The configuration fields the presentation depends on

pub const ARTIST_NAME: &str = "artist.name";
pub const ARTIST_TAGLINE: &str = "artist.tagline";

pub const SEO_TITLE: &str = "seo.title";
pub const SEO_DESCRIPTION: &str = "seo.description";
pub const SEO_OG_IMAGE: &str = "seo.og_image";
pub const SEO_CANONICAL: &str = "seo.canonical";

pub const SOCIAL_SPOTIFY: &str = "social.spotify";
pub const SOCIAL_TIKTOK: &str = "social.tiktok";
pub const SOCIAL_INSTAGRAM: &str = "social.instagram";
pub const SOCIAL_FACEBOOK: &str = "social.facebook";
pub const SOCIAL_YOUTUBE: &str = "social.youtube";

pub const BOOKING_CONTACT_NAME: &str = "booking.contact_name";
pub const BOOKING_EMAIL: &str = "booking.email";
pub const BOOKING_PHONE: &str = "booking.phone";
pub const BOOKING_PRESSKIT: &str = "booking.presskit";

pub const YOUTUBE_CHANNEL_ID: &str = "youtube.latest_release.channel_id";
pub const YOUTUBE_LABEL: &str = "youtube.latest_release.label";

pub const SPOTIFY_ARTIST_EMBED: &str = "spotify.artist_embed";
pub const SPOTIFY_ARTIST_URL: &str = "spotify.artist_url";

pub const TIKTOK_PROFILE_URL: &str = "tiktok.profile_url";
pub const TIKTOK_UNIQUE_ID: &str = "tiktok.unique_id";

pub const CONCERTS_ARTIST_PAGE: &str = "concerts.artist_page";
pub const CONCERTS_ARTIST_NAME: &str = "concerts.artist_name";
pub const CONCERTS_WIDGET_ARTIST_ID: &str = "concerts.widget_artist_id";
pub const CONCERTS_PROVIDER: &str = "concerts.provider";

/// What to use when a field is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Optional element; leave it out of the model
    Hide,
    /// Fixed text
    Literal(&'static str),
    /// Computed from other bound fields or site settings
    Derived,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub path: &'static str,
    pub fallback: Fallback,
}

const fn field(path: &'static str, fallback: Fallback) -> FieldSpec {
    FieldSpec { path, fallback }
}

/// Every field the binder resolves, in resolution (and warning) order
pub const FIELDS: &[FieldSpec] = &[
    field(ARTIST_NAME, Fallback::Derived),
    field(ARTIST_TAGLINE, Fallback::Hide),
    field(SEO_TITLE, Fallback::Derived),
    field(SEO_DESCRIPTION, Fallback::Derived),
    field(SEO_OG_IMAGE, Fallback::Hide),
    field(SEO_CANONICAL, Fallback::Derived),
    field(SOCIAL_SPOTIFY, Fallback::Hide),
    field(SOCIAL_TIKTOK, Fallback::Hide),
    field(SOCIAL_INSTAGRAM, Fallback::Hide),
    field(SOCIAL_FACEBOOK, Fallback::Hide),
    field(SOCIAL_YOUTUBE, Fallback::Hide),
    field(BOOKING_CONTACT_NAME, Fallback::Hide),
    field(BOOKING_EMAIL, Fallback::Derived),
    field(BOOKING_PHONE, Fallback::Hide),
    field(BOOKING_PRESSKIT, Fallback::Hide),
    field(YOUTUBE_CHANNEL_ID, Fallback::Derived),
    field(YOUTUBE_LABEL, Fallback::Literal("Latest release")),
    field(SPOTIFY_ARTIST_EMBED, Fallback::Derived),
    field(SPOTIFY_ARTIST_URL, Fallback::Hide),
    field(TIKTOK_PROFILE_URL, Fallback::Derived),
    field(TIKTOK_UNIQUE_ID, Fallback::Derived),
    field(CONCERTS_ARTIST_PAGE, Fallback::Hide),
    field(CONCERTS_ARTIST_NAME, Fallback::Derived),
    field(CONCERTS_WIDGET_ARTIST_ID, Fallback::Derived),
    field(CONCERTS_PROVIDER, Fallback::Literal("bandsintown")),
];

/// Social platforms in display order, with their field paths
pub const SOCIAL_PLATFORMS: &[(&str, &str)] = &[
    ("spotify", SOCIAL_SPOTIFY),
    ("tiktok", SOCIAL_TIKTOK),
    ("instagram", SOCIAL_INSTAGRAM),
    ("facebook", SOCIAL_FACEBOOK),
    ("youtube", SOCIAL_YOUTUBE),
];

/// Placeholder shown when no booking email is configured
pub const BOOKING_EMAIL_PLACEHOLDER: &str = "Booking enquiries: contact via social";
