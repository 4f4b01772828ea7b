//! Track records and input normalization

use serde::Deserialize;
use serde_json::Value;

/// Canonical playlist entry, ready to be rendered as an XSPF `<track>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackRecord {
    /// Resource location, emitted verbatim (escaped) as `<location>`
    pub location: String,
    pub title: String,
    pub artist: String,
    pub album: String,
}

impl TrackRecord {
    /// Record with only a location
    pub fn from_location(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Default::default()
        }
    }
}

/// Structured entry as accepted by the converter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryRecord {
    pub url: String,
    pub title: String,
    pub artist: String,
    pub album: String,
}

/// One raw input entry: a bare URL, a structured record, or something else
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistEntry {
    Url(String),
    Record(EntryRecord),
    /// Any other JSON value (number, bool, null, array); always skipped
    Unsupported,
}

impl From<&str> for PlaylistEntry {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}

impl From<String> for PlaylistEntry {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl From<EntryRecord> for PlaylistEntry {
    fn from(record: EntryRecord) -> Self {
        Self::Record(record)
    }
}

impl From<Value> for PlaylistEntry {
    fn from(value: Value) -> Self {
        match value {
            Value::String(url) => Self::Url(url),
            Value::Object(map) => {
                let field = |name: &str| map.get(name).map(scalar_text).unwrap_or_default();
                Self::Record(EntryRecord {
                    url: field("url"),
                    title: field("title"),
                    artist: field("artist"),
                    album: field("album"),
                })
            }
            _ => Self::Unsupported,
        }
    }
}

impl<'de> Deserialize<'de> for PlaylistEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// Text of a scalar field value; falsy values become empty
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "true".to_string(),
        _ => String::new(),
    }
}

/// Convert raw entries into track records, preserving order
///
/// Unsupported entries produce no record at all. Entries with an empty
/// location are kept here and dropped when the track is rendered.
pub fn normalize(entries: &[PlaylistEntry]) -> Vec<TrackRecord> {
    entries
        .iter()
        .filter_map(|entry| match entry {
            PlaylistEntry::Url(url) => Some(TrackRecord::from_location(url.as_str())),
            PlaylistEntry::Record(record) => Some(TrackRecord {
                location: record.url.clone(),
                title: record.title.clone(),
                artist: record.artist.clone(),
                album: record.album.clone(),
            }),
            PlaylistEntry::Unsupported => None,
        })
        .collect()
}

/// Split delimited text into bare-URL records, skipping empty pieces
pub fn split_lines(text: &str, separator: &str) -> Vec<TrackRecord> {
    text.split(separator)
        .filter(|line| !line.is_empty())
        .map(TrackRecord::from_location)
        .collect()
}
