//! Small string helpers: markup escaping, URL joining and digests.

use sha2::Digest;
use sha2::Sha256;

/// Escapes the XML-significant characters `& ' ` " < >` as entities.
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#x27;"),
            '`' => out.push_str("&#x60;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

/// Escapes only angle brackets. Lossless partner of [`unescape_xml_lite`].
pub fn escape_xml_lite(input: &str) -> String {
    input.replace('<', "&lt;").replace('>', "&gt;")
}

/// Reverses [`escape_xml_lite`].
pub fn unescape_xml_lite(input: &str) -> String {
    input.replace("&lt;", "<").replace("&gt;", ">")
}

/// Joins URL segments with single slashes.
///
/// Each segment is trimmed; redundant slashes at segment boundaries are
/// dropped, so a trailing slash on one part and a leading slash on the next
/// do not double up.
pub fn url_join<S: AsRef<str>>(parts: &[S]) -> String {
    let last = parts.len().saturating_sub(1);
    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let mut s = part.as_ref().trim();
            if i > 0 {
                s = s.strip_prefix('/').unwrap_or(s);
            }
            if i < last {
                s = s.strip_suffix('/').unwrap_or(s);
            }
            s.to_owned()
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Hex-encoded SHA-256 digest of `input`.
pub fn sha256_hex(input: &str) -> String {
    let mut digest = Sha256::new();
    digest.update(input.as_bytes());
    format!("{:x}", digest.finalize())
}
