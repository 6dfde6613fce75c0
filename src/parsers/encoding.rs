use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

/// Only the head of the document is searched for a `<meta>` charset.
const META_SNIFF_BYTES: usize = 8192;

static META_CHARSET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?charset\s*=\s*["']?\s*([a-z0-9_.:-]+)"#)
        .expect("Invalid meta charset regex")
});

/// Where the charset of a page came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetSource {
    Header,
    MetaTag,
    Detected,
}

/// Picks the encoding of a response body: Content-Type header, then a
/// `<meta>` declaration, then statistical detection over the bytes.
pub fn resolve_encoding(raw: &[u8], content_type: Option<&str>) -> (&'static Encoding, CharsetSource) {
    if let Some(encoding) = content_type
        .and_then(charset_from_content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return (encoding, CharsetSource::Header);
    }

    if let Some(encoding) =
        charset_from_meta(raw).and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return (encoding, CharsetSource::MetaTag);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(raw, true);
    (detector.guess(None, true), CharsetSource::Detected)
}

/// Decodes a raw response body into UTF-8 text.
///
/// Never fails: byte sequences that are invalid in the resolved encoding
/// become U+FFFD and a warning is logged. A byte order mark wins over
/// every other hint.
pub fn normalize(raw: &[u8], content_type: Option<&str>) -> String {
    let (encoding, source) = resolve_encoding(raw, content_type);
    debug!("Page charset {} ({:?})", encoding.name(), source);

    let (text, used, had_errors) = encoding.decode(raw);
    if had_errors {
        warn!(
            "Undecodable bytes in {} page were replaced",
            used.name()
        );
    }
    if used != UTF_8 {
        debug!("Converted {} bytes from {} to UTF-8", raw.len(), used.name());
    }

    text.into_owned()
}

fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let label = value.trim().trim_matches(|c| c == '"' || c == '\'');
        (!label.is_empty()).then(|| label.to_string())
    })
}

fn charset_from_meta(raw: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&raw[..raw.len().min(META_SNIFF_BYTES)]);
    META_CHARSET_REGEX
        .captures(&head)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{WINDOWS_1252, UTF_8};

    // "Crème brûlée" in ISO-8859-1
    const LATIN1_BODY: &[u8] = b"<p>Cr\xe8me br\xfbl\xe9e</p>";

    #[test]
    fn header_charset_wins() {
        let (encoding, source) =
            resolve_encoding(LATIN1_BODY, Some("text/html; charset=ISO-8859-1"));
        assert_eq!(encoding, WINDOWS_1252);
        assert_eq!(source, CharsetSource::Header);
        assert_eq!(
            normalize(LATIN1_BODY, Some("text/html; charset=\"iso-8859-1\"")),
            "<p>Crème brûlée</p>"
        );
    }

    #[test]
    fn meta_tag_used_without_header_charset() {
        let mut body = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=iso-8859-1\"></head><body>".to_vec();
        body.extend_from_slice(b"Saut\xe9 de porc</body></html>");

        let (encoding, source) = resolve_encoding(&body, Some("text/html"));
        assert_eq!(encoding, WINDOWS_1252);
        assert_eq!(source, CharsetSource::MetaTag);
        assert!(normalize(&body, Some("text/html")).contains("Sauté de porc"));
    }

    #[test]
    fn unknown_header_label_falls_through() {
        let body = "<meta charset=\"utf-8\"><p>Gratin dauphinois à l'ail</p>".as_bytes();
        let (encoding, source) = resolve_encoding(body, Some("text/html; charset=bogus"));
        assert_eq!(encoding, UTF_8);
        assert_eq!(source, CharsetSource::MetaTag);
    }

    #[test]
    fn detection_without_hints() {
        let body = "<p>Émincé de bœuf, purée et légumes</p>".as_bytes();
        let (encoding, source) = resolve_encoding(body, None);
        assert_eq!(encoding, UTF_8);
        assert_eq!(source, CharsetSource::Detected);
        assert_eq!(normalize(body, None), "<p>Émincé de bœuf, purée et légumes</p>");
    }

    #[test]
    fn invalid_bytes_are_replaced_not_fatal() {
        let body = b"<p>Menu \xff\xfe du jour</p>";
        let text = normalize(body, Some("text/html; charset=utf-8"));
        assert!(text.starts_with("<p>Menu "));
        assert!(text.ends_with(" du jour</p>"));
        assert!(text.contains('\u{FFFD}'));
    }
}
