//! Embed-request descriptors for third-party widgets
//!
//! Only the parameters are decided here; loading the widgets is left to
//! whatever consumes the presentation model.

use super::model::{
    ConcertProvider, ConcertsEmbed, EmbedRequest, SpotifyEmbed, TiktokEmbed, YoutubeEmbed,
};
use super::{Warning, WarningReason};
use crate::binding::fields::CONCERTS_PROVIDER;
use crate::helpers::{encode_query, encode_segment, segment_after};

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed";
const YOUTUBE_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";
const YOUTUBE_HEIGHT: u32 = 315;

const SPOTIFY_EMBED_BASE: &str = "https://open.spotify.com/embed/artist";

const TIKTOK_PROFILE_BASE: &str = "https://www.tiktok.com/@";
const TIKTOK_SCRIPT: &str = "https://www.tiktok.com/embed.js";

const BANDSINTOWN_SCRIPT: &str = "https://widget.bandsintown.com/main.min.js";
const SONGKICK_INJECTOR: &str = "https://widget-app.songkick.com/injector";

/// The uploads playlist of a channel shares its id with a `UU` prefix in
/// place of the channel's `UC`
pub fn uploads_playlist_id(channel_id: &str) -> String {
    let bare = channel_id.strip_prefix("UC").unwrap_or(channel_id);
    format!("UU{}", bare)
}

pub fn youtube(channel_id: Option<&str>, label: &str) -> EmbedRequest<YoutubeEmbed> {
    let Some(channel_id) = channel_id else {
        return EmbedRequest::unavailable("Latest release is not available right now.");
    };

    let playlist_id = uploads_playlist_id(channel_id);
    let src = format!(
        "{}?listType=playlist&list={}",
        YOUTUBE_EMBED_BASE,
        encode_query(&playlist_id)
    );

    EmbedRequest::Available {
        params: YoutubeEmbed {
            channel_id: channel_id.to_string(),
            playlist_id,
            src,
            label: label.to_string(),
            loading: "lazy".to_string(),
            height: YOUTUBE_HEIGHT,
            allow: YOUTUBE_ALLOW.to_string(),
        },
    }
}

/// Artist id from an `open.spotify.com/artist/<id>` link or a
/// `spotify:artist:<id>` URI
pub fn spotify_artist_id(url: &str) -> Option<&str> {
    if let Some(id) = url.strip_prefix("spotify:artist:") {
        return (!id.is_empty()).then_some(id);
    }
    if !url.contains("open.spotify.com") {
        return None;
    }
    segment_after(url, "/artist/")
}

pub fn spotify(artist_embed: Option<&str>, artist_url: Option<&str>) -> EmbedRequest<SpotifyEmbed> {
    let src = match artist_embed {
        Some(embed) => Some(embed.to_string()),
        None => artist_url
            .and_then(spotify_artist_id)
            .map(|id| format!("{}/{}", SPOTIFY_EMBED_BASE, encode_segment(id))),
    };

    match src {
        Some(src) => EmbedRequest::Available {
            params: SpotifyEmbed {
                src,
                artist_url: artist_url.map(str::to_string),
            },
        },
        None => EmbedRequest::unavailable("Spotify player is not available right now."),
    }
}

/// TikTok handle from a profile URL such as `https://www.tiktok.com/@band`
pub fn tiktok_handle(profile_url: &str) -> Option<&str> {
    if !profile_url.contains("tiktok.com") {
        return None;
    }
    segment_after(profile_url, "/@")
}

pub fn tiktok(profile_url: Option<&str>, unique_id: Option<&str>) -> EmbedRequest<TiktokEmbed> {
    let unique_id = unique_id
        .map(|id| id.trim_start_matches('@'))
        .filter(|id| !id.is_empty())
        .or_else(|| profile_url.and_then(tiktok_handle));

    let Some(unique_id) = unique_id else {
        return EmbedRequest::unavailable("TikTok feed is not available right now.");
    };

    let profile_url = profile_url
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}{}", TIKTOK_PROFILE_BASE, encode_segment(unique_id)));

    EmbedRequest::Available {
        params: TiktokEmbed {
            unique_id: unique_id.to_string(),
            profile_url,
            script: TIKTOK_SCRIPT.to_string(),
        },
    }
}

pub fn concerts(
    provider: &str,
    widget_artist_id: Option<&str>,
    artist_name: &str,
    artist_page: Option<&str>,
    warnings: &mut Vec<Warning>,
) -> EmbedRequest<ConcertsEmbed> {
    let Some(provider) = ConcertProvider::parse(provider) else {
        warnings.push(Warning::new(CONCERTS_PROVIDER, WarningReason::Unsupported));
        return EmbedRequest::unavailable("Tour dates are not available right now.");
    };
    let Some(widget_artist_id) = widget_artist_id else {
        return EmbedRequest::unavailable("Tour dates are not available right now.");
    };

    let script = match provider {
        ConcertProvider::Bandsintown => BANDSINTOWN_SCRIPT.to_string(),
        ConcertProvider::Songkick => {
            format!("{}/{}", SONGKICK_INJECTOR, encode_segment(widget_artist_id))
        }
    };

    EmbedRequest::Available {
        params: ConcertsEmbed {
            provider,
            widget_artist_id: widget_artist_id.to_string(),
            artist_name: artist_name.to_string(),
            artist_page: artist_page.map(str::to_string),
            script,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploads_playlist_id() {
        assert_eq!(uploads_playlist_id("UCabc123"), "UUabc123");
        assert_eq!(uploads_playlist_id("abc123"), "UUabc123");
        assert_eq!(uploads_playlist_id("UCUC1"), "UUUC1");
    }

    #[test]
    fn test_youtube_embed() {
        let request = youtube(Some("UCxyz-_1"), "New single");
        let params = request.params().unwrap();
        assert_eq!(params.playlist_id, "UUxyz-_1");
        assert_eq!(
            params.src,
            "https://www.youtube.com/embed?listType=playlist&list=UUxyz-_1"
        );
        assert_eq!(params.loading, "lazy");
        assert_eq!(params.height, 315);
        assert_eq!(params.label, "New single");
    }

    #[test]
    fn test_youtube_without_channel() {
        assert!(!youtube(None, "x").is_available());
    }

    #[test]
    fn test_spotify_explicit_embed_wins() {
        let request = spotify(
            Some("https://open.spotify.com/embed/artist/zzz"),
            Some("https://open.spotify.com/artist/abc"),
        );
        let params = request.params().unwrap();
        assert_eq!(params.src, "https://open.spotify.com/embed/artist/zzz");
        assert_eq!(
            params.artist_url.as_deref(),
            Some("https://open.spotify.com/artist/abc")
        );
    }

    #[test]
    fn test_spotify_embed_derived_from_url() {
        let request = spotify(None, Some("https://open.spotify.com/artist/abc?si=q"));
        assert_eq!(
            request.params().unwrap().src,
            "https://open.spotify.com/embed/artist/abc"
        );
        let request = spotify(None, Some("spotify:artist:def"));
        assert_eq!(
            request.params().unwrap().src,
            "https://open.spotify.com/embed/artist/def"
        );
    }

    #[test]
    fn test_spotify_unavailable() {
        assert!(!spotify(None, None).is_available());
        assert!(!spotify(None, Some("https://example.com/artist/abc")).is_available());
    }

    #[test]
    fn test_tiktok_from_unique_id() {
        let request = tiktok(None, Some("@theband"));
        let params = request.params().unwrap();
        assert_eq!(params.unique_id, "theband");
        assert_eq!(params.profile_url, "https://www.tiktok.com/@theband");
        assert_eq!(params.script, "https://www.tiktok.com/embed.js");
    }

    #[test]
    fn test_tiktok_from_profile_url() {
        let request = tiktok(Some("https://www.tiktok.com/@theband?lang=en"), None);
        let params = request.params().unwrap();
        assert_eq!(params.unique_id, "theband");
        assert_eq!(params.profile_url, "https://www.tiktok.com/@theband?lang=en");
    }

    #[test]
    fn test_tiktok_unavailable() {
        assert!(!tiktok(None, None).is_available());
        assert!(!tiktok(None, Some("@")).is_available());
    }

    #[test]
    fn test_concerts_bandsintown() {
        let mut warnings = Vec::new();
        let request = concerts("Bandsintown", Some("id_1"), "Nova", None, &mut warnings);
        let params = request.params().unwrap();
        assert_eq!(params.provider, ConcertProvider::Bandsintown);
        assert_eq!(params.script, BANDSINTOWN_SCRIPT);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_concerts_songkick_script() {
        let mut warnings = Vec::new();
        let request = concerts("songkick", Some("12345"), "Nova", None, &mut warnings);
        assert_eq!(
            request.params().unwrap().script,
            "https://widget-app.songkick.com/injector/12345"
        );
    }

    #[test]
    fn test_concerts_unknown_provider_warns() {
        let mut warnings = Vec::new();
        let request = concerts("myspace", Some("1"), "Nova", None, &mut warnings);
        assert!(!request.is_available());
        assert_eq!(
            warnings,
            vec![Warning::new(CONCERTS_PROVIDER, WarningReason::Unsupported)]
        );
    }

    #[test]
    fn test_concerts_without_widget_id() {
        let mut warnings = Vec::new();
        assert!(!concerts("bandsintown", None, "Nova", None, &mut warnings).is_available());
        assert!(warnings.is_empty());
    }
}
