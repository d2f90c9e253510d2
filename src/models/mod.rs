//! Data models for the HLS resolver service

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::utils::numeric_label_value;

/// Ordered mapping from quality label to absolute media-playlist URL.
///
/// Built incrementally during a parse pass and finalized once with
/// [`QualityMap::sort_by_quality`]. Serializes as a single JSON object in
/// iteration order, so the sort order is what the caller sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualityMap {
    entries: Vec<(String, String)>,
}

impl QualityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a (label, url) pair. On a label collision the later URL wins,
    /// but the label keeps its original position so the final stable sort
    /// preserves discovery order among numerically equal labels.
    pub fn insert(&mut self, label: String, url: String) {
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = url,
            None => self.entries.push((label, url)),
        }
    }

    /// Sort entries by descending numeric quality extracted from the label.
    /// Labels without a numeric component sort as 0. The sort is stable, so
    /// equal keys keep their discovery order.
    pub fn sort_by_quality(&mut self) {
        self.entries
            .sort_by_key(|(label, _)| std::cmp::Reverse(numeric_label_value(label)));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, u)| (l.as_str(), u.as_str()))
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, u)| u.as_str())
    }
}

impl Serialize for QualityMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, url) in &self.entries {
            map.serialize_entry(label, url)?;
        }
        map.end()
    }
}

/// Player metadata document as returned by the provider.
///
/// Only the `qualities` field matters here; everything else in the
/// document is ignored. `BTreeMap` keeps bucket keys in their natural
/// order, which the resolver's fallback scan depends on.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoMetadata {
    #[serde(default)]
    pub qualities: Option<BTreeMap<String, Vec<QualityCandidate>>>,
}

/// One candidate stream within a metadata quality bucket
#[derive(Debug, Clone, Deserialize)]
pub struct QualityCandidate {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "type", default)]
    pub content_type: Option<String>,
}
