//! aria2 input list parsing
//!
//! An input list is a sequence of URL lines. Each URL line may be followed by
//! option lines indented with at least one space. The only option used here
//! is `out=`, the desired output filename, which becomes the track title.
//!
//! ```text
//! http://example.com/1.mp4
//!   out=first.mp4
//! # comments and blank lines are allowed anywhere
//! http://example.com/2.mp4
//! ```

use tracing::debug;

use super::models::TrackRecord;

/// Option prefix carrying the output filename
const OUT_OPTION: &str = "out=";

/// Maximum lookahead offset when collecting options for a URL line
pub const MAX_OPTION_LINES: usize = 16;

/// Classification of a single input list line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Option,
    Url,
}

impl LineKind {
    pub fn classify(line: &str) -> Self {
        if line.trim().is_empty() {
            Self::Blank
        } else if line.starts_with('#') {
            Self::Comment
        } else if line.starts_with(' ') {
            Self::Option
        } else {
            Self::Url
        }
    }
}

/// Parse an input list into track records, in input order
///
/// An empty result means the list contained no URL lines.
pub fn parse_input_list(text: &str, separator: &str) -> Vec<TrackRecord> {
    let lines: Vec<&str> = text.split(separator).collect();
    let mut records = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if LineKind::classify(lines[i]) != LineKind::Url {
            i += 1;
            continue;
        }

        let (filename, consumed) = collect_options(&lines, i);
        records.push(TrackRecord {
            location: lines[i].to_string(),
            title: filename.unwrap_or_default(),
            ..Default::default()
        });

        i += 1 + consumed;
    }

    debug!("Parsed {} URL line(s) from {} input line(s)", records.len(), lines.len());
    records
}

/// Scan the lines after the URL at `url_index` for its options
///
/// Returns the last `out=` value seen and how many lines after the URL line
/// belong to it. A following URL line ends the scan and is left for the
/// caller; the scan never looks further than `MAX_OPTION_LINES` ahead.
fn collect_options(lines: &[&str], url_index: usize) -> (Option<String>, usize) {
    let mut filename = None;
    let mut consumed = 0;

    for offset in 1..=MAX_OPTION_LINES {
        let Some(line) = lines.get(url_index + offset) else {
            break;
        };

        match LineKind::classify(line) {
            LineKind::Blank | LineKind::Comment => continue,
            LineKind::Option => {
                if let Some(name) = line.trim().strip_prefix(OUT_OPTION) {
                    filename = Some(name.to_string());
                    consumed = offset;
                }
            }
            LineKind::Url => {
                consumed = offset - 1;
                break;
            }
        }
    }

    (filename, consumed)
}
