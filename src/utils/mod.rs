//! Utility functions for the HLS resolver service
//!
//! URL helpers shared by the playlist parser plus the numeric label
//! extraction used for quality ordering.

use url::Url;

/// Truncate a master playlist URL after its last `/`, yielding the base
/// that relative variant URIs resolve against. A URL without a path slash
/// is returned unchanged.
pub fn base_url_of(master_url: &str) -> &str {
    match master_url.rfind('/') {
        Some(idx) => &master_url[..=idx],
        None => master_url,
    }
}

/// Resolve a playlist URI against a base URL.
///
/// URIs that already carry an `http`/`https` scheme are kept as-is;
/// anything else is joined against `base_url` per standard
/// relative-reference rules. A trailing `#fragment` is stripped in both
/// cases, since some providers append opaque markers that are not part of
/// the addressable resource. Returns `None` when the base is not an
/// absolute URL or the join fails.
pub fn resolve_reference(base_url: &str, uri: &str) -> Option<String> {
    let mut resolved = if uri.starts_with("http://") || uri.starts_with("https://") {
        Url::parse(uri).ok()?
    } else {
        Url::parse(base_url).ok()?.join(uri).ok()?
    };
    resolved.set_fragment(None);
    Some(resolved.to_string())
}

/// Extract the numeric quality value from a label: strip all non-digit
/// characters and parse the remainder. Empty or unparsable remainders
/// count as 0, so "720" -> 720, "bw_500000" -> 500000, "HD" -> 0.
pub fn numeric_label_value(label: &str) -> i64 {
    let digits: String = label.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_of() {
        assert_eq!(
            base_url_of("https://x.example/master/index.m3u8"),
            "https://x.example/master/"
        );
        assert_eq!(base_url_of("https://x.example/index.m3u8"), "https://x.example/");
        assert_eq!(base_url_of("no-slash"), "no-slash");
    }

    #[test]
    fn test_resolve_reference_relative() {
        assert_eq!(
            resolve_reference("https://x.example/master/", "360/index.m3u8"),
            Some("https://x.example/master/360/index.m3u8".to_string())
        );
        assert_eq!(
            resolve_reference("https://x.example/master/", "/root.m3u8"),
            Some("https://x.example/root.m3u8".to_string())
        );
    }

    #[test]
    fn test_resolve_reference_absolute_passthrough() {
        assert_eq!(
            resolve_reference("https://x.example/master/", "http://cdn.example/hd.m3u8"),
            Some("http://cdn.example/hd.m3u8".to_string())
        );
    }

    #[test]
    fn test_resolve_reference_strips_fragment() {
        assert_eq!(
            resolve_reference("https://x.example/master/", "hd/index.m3u8#cell=cf3"),
            Some("https://x.example/master/hd/index.m3u8".to_string())
        );
        assert_eq!(
            resolve_reference("https://x.example/master/", "https://cdn.example/a.m3u8#frag"),
            Some("https://cdn.example/a.m3u8".to_string())
        );
    }

    #[test]
    fn test_resolve_reference_bad_base() {
        assert_eq!(resolve_reference("not a url", "360/index.m3u8"), None);
    }

    #[test]
    fn test_numeric_label_value() {
        assert_eq!(numeric_label_value("720"), 720);
        assert_eq!(numeric_label_value("bw_500000"), 500000);
        assert_eq!(numeric_label_value("1080p"), 1080);
        assert_eq!(numeric_label_value("HD"), 0);
        assert_eq!(numeric_label_value(""), 0);
    }
}
