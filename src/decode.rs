//! Percent-escape expansion for url path segments.
//!
//! Escapes decode to *bytes*, not characters: a multi-byte UTF-8 sequence
//! may be split across consecutive `%XX` escapes, so the accumulated bytes
//! are only checked for UTF-8 well-formedness once the whole segment has
//! been consumed.

use crate::error::UrlError;

/// Expand every `%XX` escape in a single path segment.
///
/// Characters outside escapes pass through unchanged. Decoding is applied
/// per segment; [`HttpUrl::path_decoded`](crate::HttpUrl::path_decoded)
/// runs it over a whole path.
///
/// # Examples
///
/// ```
/// use url_strip::decode_segment;
///
/// assert_eq!(decode_segment("hello%20world").unwrap(), "hello world");
/// // A multi-byte code point split across escapes.
/// assert_eq!(decode_segment("%E2%82%AC").unwrap(), "€");
/// ```
///
/// # Errors
///
/// [`UrlError::MalformedEscape`] if a `%` has fewer than two characters
/// after it, [`UrlError::InvalidHexDigits`] if those characters are not
/// hex, and [`UrlError::InvalidUtf8`] if the decoded bytes are not
/// well-formed UTF-8.
pub fn decode_segment(segment: &str) -> Result<String, UrlError> {
    let mut bytes = Vec::with_capacity(segment.len());
    let mut chars = segment.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }

        let hi = chars.next().ok_or(UrlError::MalformedEscape)?;
        let lo = chars.next().ok_or(UrlError::MalformedEscape)?;

        match (hi.to_digit(16), lo.to_digit(16)) {
            (Some(h), Some(l)) => bytes.push((h * 16 + l) as u8),
            _ => {
                return Err(UrlError::InvalidHexDigits(
                    [hi, lo].into_iter().collect(),
                ))
            }
        }
    }

    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_segment_passes_through() {
        assert_eq!(decode_segment("plain-text_1.2").unwrap(), "plain-text_1.2");
        assert_eq!(decode_segment("").unwrap(), "");
    }

    #[test]
    fn test_single_escape() {
        assert_eq!(decode_segment("a%2Fb").unwrap(), "a/b");
        // Lowercase hex digits are accepted too.
        assert_eq!(decode_segment("a%2fb").unwrap(), "a/b");
    }

    #[test]
    fn test_multibyte_sequence_across_escapes() {
        assert_eq!(decode_segment("%E2%82%AC").unwrap(), "€");
        assert_eq!(decode_segment("caf%C3%A9").unwrap(), "café");
    }

    #[test]
    fn test_truncated_escape() {
        assert_eq!(decode_segment("abc%2"), Err(UrlError::MalformedEscape));
        assert_eq!(decode_segment("abc%"), Err(UrlError::MalformedEscape));
    }

    #[test]
    fn test_invalid_hex_digits() {
        assert_eq!(
            decode_segment("%zz"),
            Err(UrlError::InvalidHexDigits("zz".to_string()))
        );
        assert_eq!(
            decode_segment("%4x"),
            Err(UrlError::InvalidHexDigits("4x".to_string()))
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let err = decode_segment("%FF").unwrap_err();
        assert!(matches!(err, UrlError::InvalidUtf8(_)));
    }
}
