//! XSPF document generation

use super::escape::xml_escape;
use crate::playlist::TrackRecord;

const XSPF_NAMESPACE: &str = "http://xspf.org/ns/0/";

/// Render one `<track>` element
///
/// Returns an empty string when the record has no location, which is how
/// such records disappear from the document.
pub fn build_track(record: &TrackRecord) -> String {
    if record.location.is_empty() {
        return String::new();
    }

    let mut out = String::from("    <track>\n");
    for (tag, value) in [
        ("location", &record.location),
        ("title", &record.title),
        ("creator", &record.artist),
        ("album", &record.album),
    ] {
        if !value.is_empty() {
            out.push_str(&format!("      <{tag}>{}</{tag}>\n", xml_escape(value)));
        }
    }
    out.push_str("    </track>\n");
    out
}

/// Wrap rendered track fragments into a complete XSPF playlist
pub fn build_document<I, S>(title: &str, fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!("<playlist xmlns=\"{XSPF_NAMESPACE}\" version=\"1\">\n"));
    out.push_str(&format!("  <title>{}</title>\n", xml_escape(title)));
    out.push_str("  <trackList>\n");
    for fragment in fragments {
        out.push_str(fragment.as_ref());
    }
    out.push_str("  </trackList>\n");
    out.push_str("</playlist>\n");
    out
}
