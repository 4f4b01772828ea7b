//! XML text escaping

/// Escape a string for use as XML element text
///
/// Only `&`, `<` and `>` are replaced. `&` goes first so the entities
/// produced for `<` and `>` are not escaped a second time.
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
