//! Quality resolver
//!
//! Locates the best master-playlist URL inside a provider metadata
//! document. The metadata is loosely shaped upstream, so every missing
//! piece (no `qualities`, empty bucket, candidate without a URL) degrades
//! to the next fallback step rather than failing.

use crate::errors::AppError;
use crate::models::VideoMetadata;

/// Pick a master playlist URL from video metadata.
///
/// The `auto` bucket's first candidate is the typical location; failing
/// that, all buckets are scanned in key order for the first candidate
/// whose URL contains `.m3u8`. Nothing usable is
/// [`AppError::QualityNotFound`].
pub fn resolve(metadata: &VideoMetadata) -> Result<String, AppError> {
    let qualities = metadata
        .qualities
        .as_ref()
        .ok_or(AppError::QualityNotFound)?;

    if let Some(first) = qualities.get("auto").and_then(|bucket| bucket.first()) {
        if let Some(url) = &first.url {
            return Ok(url.clone());
        }
    }

    for bucket in qualities.values() {
        for candidate in bucket {
            if let Some(url) = &candidate.url {
                if url.contains(".m3u8") {
                    return Ok(url.clone());
                }
            }
        }
    }

    Err(AppError::QualityNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(json: &str) -> VideoMetadata {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_auto_bucket_wins() {
        let meta = metadata(
            r#"{"qualities":{
                "auto":[{"url":"https://p.example/master.m3u8"}],
                "720":[{"url":"https://p.example/720.m3u8"}]
            }}"#,
        );
        assert_eq!(resolve(&meta).unwrap(), "https://p.example/master.m3u8");
    }

    #[test]
    fn test_scan_finds_first_m3u8_in_key_order() {
        let meta = metadata(
            r#"{"qualities":{
                "720":[{"url":"https://p.example/720.mp4"},{"url":"https://p.example/720.m3u8"}],
                "240":[{"url":"https://p.example/240.m3u8"}]
            }}"#,
        );
        // "240" sorts before "720"; its candidate matches first
        assert_eq!(resolve(&meta).unwrap(), "https://p.example/240.m3u8");
    }

    #[test]
    fn test_auto_without_url_falls_through_to_scan() {
        let meta = metadata(
            r#"{"qualities":{
                "auto":[{"type":"application/x-mpegURL"}],
                "480":[{"url":"https://p.example/480.m3u8"}]
            }}"#,
        );
        assert_eq!(resolve(&meta).unwrap(), "https://p.example/480.m3u8");
    }

    #[test]
    fn test_empty_auto_bucket_falls_through() {
        let meta = metadata(
            r#"{"qualities":{
                "auto":[],
                "360":[{"url":"https://p.example/360.m3u8"}]
            }}"#,
        );
        assert_eq!(resolve(&meta).unwrap(), "https://p.example/360.m3u8");
    }

    #[test]
    fn test_non_m3u8_candidates_are_skipped() {
        let meta = metadata(
            r#"{"qualities":{"720":[{"url":"https://p.example/720.mp4"}]}}"#,
        );
        assert!(matches!(resolve(&meta), Err(AppError::QualityNotFound)));
    }

    #[test]
    fn test_missing_qualities_is_not_found() {
        let meta = metadata(r#"{"title":"x"}"#);
        assert!(matches!(resolve(&meta), Err(AppError::QualityNotFound)));

        let meta = metadata(r#"{"qualities":{}}"#);
        assert!(matches!(resolve(&meta), Err(AppError::QualityNotFound)));
    }
}
