//! XSPF playlist conversion
//!
//! [`XspfConverter`] is the entry point: it turns URL entries, delimited text
//! or aria2 input lists into an XSPF document and optionally hands the result
//! to a [`FileSink`].

mod document;
mod escape;

use tracing::{debug, error, warn};

use crate::playlist::{self, PlaylistEntry, TrackRecord};
use crate::sink::{FileSink, XSPF_MIME_TYPE};

/// Playlist title used until one is set
pub const DEFAULT_TITLE: &str = "Playlist";

/// Per-call conversion options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Offer the generated document to the converter's sink
    pub emit_to_sink: bool,
    /// Separator used to split text input into lines
    pub line_separator: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            emit_to_sink: true,
            line_separator: "\n".to_string(),
        }
    }
}

/// Converts URL lists into XSPF playlists
pub struct XspfConverter<S> {
    title: String,
    sink: S,
}

impl<S: FileSink> XspfConverter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            sink,
        }
    }

    /// Set the playlist title; tabs and newlines are removed
    pub fn set_title(&mut self, name: &str) {
        self.title = name.chars().filter(|c| !matches!(c, '\t' | '\n')).collect();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Filename offered to the sink; an empty title falls back to the default
    pub fn filename(&self) -> String {
        let stem = if self.title.trim().is_empty() {
            DEFAULT_TITLE
        } else {
            &self.title
        };
        format!("{stem}.xspf")
    }

    /// Convert bare URLs and structured records
    ///
    /// Unsupported entries and entries without a location are skipped.
    pub fn entries_to_xspf(&self, entries: &[PlaylistEntry], options: &ConvertOptions) -> String {
        let records = playlist::normalize(entries);
        self.render(&records, options)
    }

    /// Convert text holding one URL per line
    pub fn text_to_xspf(&self, text: &str, options: &ConvertOptions) -> String {
        let records = playlist::split_lines(text, &options.line_separator);
        self.render(&records, options)
    }

    /// Convert an aria2 input list, using `out=` options as track titles
    ///
    /// Returns an empty string, without touching the sink, when the list
    /// contains no URL lines.
    pub fn input_list_to_xspf(&self, list: &str, options: &ConvertOptions) -> String {
        let records = playlist::parse_input_list(list, &options.line_separator);
        if records.is_empty() {
            warn!("No URLs found in input list");
            return String::new();
        }
        self.render(&records, options)
    }

    fn render(&self, records: &[TrackRecord], options: &ConvertOptions) -> String {
        let text = document::build_document(&self.title, records.iter().map(document::build_track));
        debug!("Rendered {} record(s) into playlist '{}'", records.len(), self.title);

        if options.emit_to_sink {
            let filename = self.filename();
            if let Err(e) = self.sink.offer(&text, &filename, XSPF_MIME_TYPE) {
                error!("Failed to save {}: {}", filename, e);
            }
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::EntryRecord;
    use crate::sink::{DirectorySink, NullSink, SinkError};
    use std::cell::RefCell;
    use std::io;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingSink {
        offers: RefCell<Vec<(String, String, String)>>,
    }

    impl FileSink for RecordingSink {
        fn offer(&self, text: &str, filename: &str, mime_type: &str) -> Result<(), SinkError> {
            self.offers
                .borrow_mut()
                .push((text.to_string(), filename.to_string(), mime_type.to_string()));
            Ok(())
        }
    }

    struct FailingSink;

    impl FileSink for FailingSink {
        fn offer(&self, _text: &str, filename: &str, _mime_type: &str) -> Result<(), SinkError> {
            Err(SinkError::Write {
                path: PathBuf::from(filename),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    fn no_sink() -> ConvertOptions {
        ConvertOptions {
            emit_to_sink: false,
            ..Default::default()
        }
    }

    fn locations(xml: &str) -> Vec<String> {
        let doc = roxmltree::Document::parse(xml).unwrap();
        doc.descendants()
            .filter(|n| n.has_tag_name("location"))
            .filter_map(|n| n.text().map(str::to_string))
            .collect()
    }

    fn track_titles(xml: &str) -> Vec<Option<String>> {
        let doc = roxmltree::Document::parse(xml).unwrap();
        doc.descendants()
            .filter(|n| n.has_tag_name("track"))
            .map(|track| {
                track
                    .children()
                    .find(|c| c.has_tag_name("title"))
                    .and_then(|t| t.text().map(str::to_string))
            })
            .collect()
    }

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::default();
        assert!(options.emit_to_sink);
        assert_eq!(options.line_separator, "\n");
    }

    #[test]
    fn test_set_title_strips_tabs_and_newlines() {
        let mut converter = XspfConverter::new(NullSink);
        assert_eq!(converter.title(), DEFAULT_TITLE);

        converter.set_title("My\tRoad\nTrip\r");
        assert_eq!(converter.title(), "MyRoadTrip\r");
        assert_eq!(converter.filename(), "MyRoadTrip\r.xspf");
    }

    #[test]
    fn test_empty_title_keeps_extension() {
        let dir = tempfile::tempdir().unwrap();
        let mut converter = XspfConverter::new(DirectorySink::new(dir.path()));
        converter.set_title("\t\n");
        assert_eq!(converter.title(), "");
        assert_eq!(converter.filename(), "Playlist.xspf");

        converter.text_to_xspf("http://a.com/1", &ConvertOptions::default());

        assert!(dir.path().join("Playlist.xspf").exists());
        assert!(xml_title(&converter).is_empty());
    }

    fn xml_title<S: FileSink>(converter: &XspfConverter<S>) -> String {
        let xml = converter.text_to_xspf("", &no_sink());
        let doc = roxmltree::Document::parse(&xml).unwrap();
        doc.root_element()
            .children()
            .find(|n| n.has_tag_name("title"))
            .and_then(|n| n.text().map(str::to_string))
            .unwrap_or_default()
    }

    #[test]
    fn test_entries_to_xspf() {
        let converter = XspfConverter::new(NullSink);
        let entries: Vec<PlaylistEntry> = serde_json::from_str(
            r#"[
                "http://a.com/1",
                {"url": "http://a.com/2", "title": "Two", "artist": "Band", "album": "LP"},
                42,
                null,
                {"title": "no location"}
            ]"#,
        )
        .unwrap();

        let xml = converter.entries_to_xspf(&entries, &no_sink());

        assert_eq!(locations(&xml), vec!["http://a.com/1", "http://a.com/2"]);
        assert!(xml.contains("<creator>Band</creator>"));
        assert!(xml.contains("<album>LP</album>"));
        assert!(!xml.contains("no location"));
    }

    #[test]
    fn test_typed_entries() {
        let converter = XspfConverter::new(NullSink);
        let entries = vec![
            PlaylistEntry::from(EntryRecord {
                url: "http://a.com/live".to_string(),
                title: "Live".to_string(),
                album: "Tour".to_string(),
                ..Default::default()
            }),
            PlaylistEntry::Unsupported,
            PlaylistEntry::from("http://a.com/2"),
        ];

        let xml = converter.entries_to_xspf(&entries, &no_sink());

        assert_eq!(locations(&xml), vec!["http://a.com/live", "http://a.com/2"]);
        assert_eq!(track_titles(&xml), vec![Some("Live".to_string()), None]);
        assert!(xml.contains("<album>Tour</album>"));
    }

    #[test]
    fn test_order_preserved() {
        let converter = XspfConverter::new(NullSink);
        let urls: Vec<String> = (0..25).map(|n| format!("http://a.com/{n}")).collect();
        let entries: Vec<PlaylistEntry> = urls.iter().cloned().map(PlaylistEntry::from).collect();

        let xml = converter.entries_to_xspf(&entries, &no_sink());
        assert_eq!(locations(&xml), urls);
    }

    #[test]
    fn test_duplicates_kept() {
        let converter = XspfConverter::new(NullSink);
        let xml = converter.text_to_xspf("a\na\nb", &no_sink());
        assert_eq!(locations(&xml), vec!["a", "a", "b"]);
    }

    #[test]
    fn test_text_to_xspf_separator() {
        let converter = XspfConverter::new(NullSink);
        let options = ConvertOptions {
            emit_to_sink: false,
            line_separator: ",".to_string(),
        };
        let xml = converter.text_to_xspf("http://a.com/1,,http://a.com/2,", &options);
        assert_eq!(locations(&xml), vec!["http://a.com/1", "http://a.com/2"]);
    }

    #[test]
    fn test_empty_text_still_renders_document() {
        let sink = RecordingSink::default();
        let converter = XspfConverter::new(sink);
        let xml = converter.text_to_xspf("", &ConvertOptions::default());

        assert!(xml.contains("<trackList>"));
        assert!(locations(&xml).is_empty());
        assert_eq!(converter.sink().offers.borrow().len(), 1);
    }

    #[test]
    fn test_input_list_titles() {
        let converter = XspfConverter::new(NullSink);
        let list = "http://a.com/1\n# comment\n out=file1.mp4\nhttp://a.com/2\n";

        let xml = converter.input_list_to_xspf(list, &no_sink());

        assert_eq!(locations(&xml), vec!["http://a.com/1", "http://a.com/2"]);
        assert_eq!(track_titles(&xml), vec![Some("file1.mp4".to_string()), None]);
    }

    #[test]
    fn test_input_list_without_urls_is_empty() {
        let converter = XspfConverter::new(RecordingSink::default());
        let xml = converter.input_list_to_xspf("# nothing\n\n out=x.mp4\n", &ConvertOptions::default());

        assert_eq!(xml, "");
        assert!(converter.sink().offers.borrow().is_empty());
    }

    #[test]
    fn test_sink_receives_document() {
        let mut converter = XspfConverter::new(RecordingSink::default());
        converter.set_title("Road & Trip");

        let xml = converter.text_to_xspf("http://a.com/1", &ConvertOptions::default());

        let offers = converter.sink().offers.borrow();
        assert_eq!(offers.len(), 1);
        let (text, filename, mime) = &offers[0];
        assert_eq!(text, &xml);
        assert_eq!(filename, "Road & Trip.xspf");
        assert_eq!(mime, "application/xspf+xml");
        assert!(xml.contains("<title>Road &amp; Trip</title>"));
    }

    #[test]
    fn test_sink_skipped_when_disabled() {
        let converter = XspfConverter::new(RecordingSink::default());
        converter.text_to_xspf("http://a.com/1", &no_sink());
        assert!(converter.sink().offers.borrow().is_empty());
    }

    #[test]
    fn test_sink_failure_still_returns_document() {
        let converter = XspfConverter::new(FailingSink);
        let xml = converter.text_to_xspf("http://a.com/1", &ConvertOptions::default());
        assert_eq!(locations(&xml), vec!["http://a.com/1"]);
    }

    #[test]
    fn test_track_count_matches_records() {
        let converter = XspfConverter::new(NullSink);
        let entries: Vec<PlaylistEntry> = vec!["a".into(), "".into(), "b".into(), "c".into()];
        let xml = converter.entries_to_xspf(&entries, &no_sink());

        let doc = roxmltree::Document::parse(&xml).unwrap();
        let tracks = doc.descendants().filter(|n| n.has_tag_name("track")).count();
        assert_eq!(tracks, 3);
    }
}
