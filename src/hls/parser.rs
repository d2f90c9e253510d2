//! Master playlist parser
//!
//! Extracts the quality -> media-playlist-URL mapping from raw HLS master
//! playlist text. The parse is a single linear scan with one piece of
//! carried state: the attribute string of a stream-info tag whose URI line
//! has not been seen yet. Malformed individual entries are skipped, never
//! fatal; the only error is a playlist that yields nothing at all.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;
use crate::models::QualityMap;
use crate::utils::{base_url_of, resolve_reference};

const STREAM_INF_TAG: &str = "#EXT-X-STREAM-INF:";
const MEDIA_SEGMENT_TAG: &str = "#EXTINF";

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?i)NAME="([^"]*)""#).unwrap());
static RESOLUTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)RESOLUTION=(\d+)x(\d+)").unwrap());
static BANDWIDTH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)BANDWIDTH=(\d+)").unwrap());
// A 2-4 digit run in the URL, e.g. /720/ or index_1080p.m3u8
static URL_QUALITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d{2,4})p?").unwrap());

/// One `#EXT-X-STREAM-INF` entry paired with its resolved playlist URL
struct StreamVariant<'a> {
    attributes: &'a str,
    url: String,
}

impl StreamVariant<'_> {
    /// Derive the quality label, first match wins:
    /// `NAME="..."` verbatim, `RESOLUTION=WxH` height, `BANDWIDTH=N` as
    /// `bw_N`, a 2-4 digit number embedded in the URL (trailing `p`
    /// stripped), and finally the URL itself so no entry is ever unkeyed.
    fn label(&self) -> String {
        if let Some(caps) = NAME_RE.captures(self.attributes) {
            let name = &caps[1];
            if !name.is_empty() {
                return name.to_string();
            }
        }
        if let Some(caps) = RESOLUTION_RE.captures(self.attributes) {
            return caps[2].to_string();
        }
        if let Some(caps) = BANDWIDTH_RE.captures(self.attributes) {
            return format!("bw_{}", &caps[1]);
        }
        if let Some(caps) = URL_QUALITY_RE.captures(&self.url) {
            return caps[1].to_string();
        }
        self.url.clone()
    }
}

/// Parse master playlist text into an ordered quality map.
///
/// `master_url` must be the absolute URL the text was fetched from;
/// relative variant URIs resolve against its directory. Entries come back
/// sorted by descending numeric quality. Text with no variants but with
/// `#EXTINF` media segments is treated as a single-quality media playlist
/// and mapped to `{"default": master_url}`; anything else empty is
/// [`AppError::NoVariants`].
pub fn parse(playlist_text: &str, master_url: &str) -> Result<QualityMap, AppError> {
    let base_url = base_url_of(master_url);
    let mut qualities = QualityMap::new();

    // Attributes of a stream-info tag still awaiting its URI line
    let mut pending: Option<&str> = None;

    for raw_line in playlist_text.lines() {
        let line = raw_line.trim();

        if let Some(attributes) = line.strip_prefix(STREAM_INF_TAG) {
            // A previous tag with no URI line before this one is dropped
            pending = Some(attributes);
            continue;
        }

        let Some(attributes) = pending else {
            continue;
        };

        // The URI is the next non-empty, non-comment line
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        pending = None;

        let Some(url) = resolve_reference(base_url, line) else {
            continue;
        };

        let variant = StreamVariant { attributes, url };
        qualities.insert(variant.label(), variant.url);
    }

    if qualities.is_empty() {
        // No variants: a playlist with media segments is itself the single
        // quality, otherwise this was not a master playlist at all
        let has_segments = playlist_text
            .lines()
            .any(|l| l.trim().starts_with(MEDIA_SEGMENT_TAG));
        if has_segments {
            qualities.insert("default".to_string(), master_url.to_string());
        } else {
            return Err(AppError::NoVariants);
        }
    }

    qualities.sort_by_quality();
    Ok(qualities)
}
