//! Filename sanitization for generated playlists

/// Stem used when nothing usable is left after sanitizing
const FALLBACK_STEM: &str = "playlist";

/// Make a playlist filename safe to create on any common filesystem
///
/// Path separators and other reserved characters are swapped for visually
/// similar Unicode characters so titles stay readable. Control characters
/// are dropped, and dots are trimmed from both ends of the stem so the
/// playlist never becomes a hidden file. The extension is kept even when the
/// stem has to be replaced.
///
/// # Examples
///
/// ```
/// use xspfconv::utils::sanitize_filename;
///
/// assert_eq!(sanitize_filename("AC/DC Live.xspf"), "AC⧸DC Live.xspf");
/// assert_eq!(sanitize_filename("Mix: Vol. 2.xspf"), "Mix꞉ Vol. 2.xspf");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    let (stem, extension) = match name.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() => (stem, Some(replace_reserved(ext))),
        _ => (name, None),
    };

    let stem = replace_reserved(stem);
    let stem = stem.trim().trim_matches('.').trim();
    let stem = if stem.is_empty() { FALLBACK_STEM } else { stem };

    match extension {
        Some(ext) if !ext.trim().is_empty() => format!("{}.{}", stem, ext.trim()),
        _ => stem.to_string(),
    }
}

fn replace_reserved(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_control())
        .map(|c| match c {
            '/' => '⧸',  // U+29F8 Big Solidus
            '\\' => '⧹', // U+29F9 Big Reverse Solidus
            ':' => '꞉',  // U+A789 Modifier Letter Colon
            '*' => '⁎',  // U+204E Low Asterisk
            '?' => '？', // U+FF1F Fullwidth Question Mark
            '"' => '″',  // U+2033 Double Prime
            '<' => '‹',  // U+2039
            '>' => '›',  // U+203A
            '|' => '｜', // U+FF5C Fullwidth Vertical Line
            _ => c,
        })
        .collect()
}
