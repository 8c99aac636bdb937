//! Decoding editor buffers that are not guaranteed to be UTF-8.
//!
//! Buffers saved by mail clients often carry a legacy charset. The encoding is
//! taken from a byte-order mark, then from a `<meta>` charset declaration near
//! the top of the markup, and falls back to UTF-8.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::CHARSET_META;

/// How many leading bytes are searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Detect the character encoding of HTML bytes.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    CHARSET_META
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .map_or(UTF_8, Encoding::output_encoding)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD instead of failing. A byte-order mark is
/// stripped.
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        log::debug!("invalid {} sequences replaced while decoding", used.name());
    }
    decoded.into_owned()
}
