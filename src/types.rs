//! Core value types: the parsed url and the rewrite rule signature.

use crate::decode::decode_segment;
use crate::error::UrlError;

/// A single `key=value` query pair.
pub type QueryPair = (String, String);

/// A rewrite rule: maps a parsed url to its minimized form or a
/// domain-specific error.
pub type RewriteFn = fn(HttpUrl) -> Result<HttpUrl, UrlError>;

/// An http(s) url broken into its base parts, making it easy to modify
/// before re-serializing.
///
/// Produced by [`parse`](crate::parse) or by a rewrite rule copying and
/// mutating an existing value; each instance is owned by the call
/// processing one input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpUrl {
    /// Host name without scheme prefix or trailing slash
    /// (`www.youtube.com`).
    pub domain: String,

    /// Path including its leading `/`, or empty. Percent escapes are kept
    /// raw; see [`HttpUrl::path_decoded`].
    pub path: String,

    /// Query pairs in the order they appeared in the input. Duplicate keys
    /// are kept: position is what distinguishes tracking keys from
    /// semantic ones in ambiguous inputs.
    pub query: Vec<QueryPair>,

    /// Fragment including its leading `#`. `None` means the url had no
    /// fragment at all, which round-trips differently from an empty one.
    pub fragment: Option<String>,
}

impl HttpUrl {
    /// Render the url as a string with the `https` scheme.
    ///
    /// The scheme of the original input is never retained: stripping
    /// normalizes to `https` unless [`HttpUrl::into_str_with`] overrides
    /// it.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_strip::parse;
    ///
    /// let url = parse("http://example.com/a?x=1").unwrap();
    /// assert_eq!(url.into_str(), "https://example.com/a?x=1");
    /// ```
    pub fn into_str(self) -> String {
        self.into_str_with("https")
    }

    /// Render the url as a string with an explicit scheme.
    pub fn into_str_with(self, protocol: &str) -> String {
        let query_str = if self.query.is_empty() {
            String::new()
        } else {
            let pairs: Vec<String> = self
                .query
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            format!("?{}", pairs.join("&"))
        };

        let fragment_str = self.fragment.as_deref().unwrap_or("");

        format!(
            "{}://{}{}{}{}",
            protocol, self.domain, self.path, query_str, fragment_str
        )
    }

    /// Expand the percent escapes in every path segment.
    ///
    /// The stored path always keeps raw escapes; decoding is opt-in and
    /// fails atomically, so either every segment decodes or the first
    /// failure is returned with no partial result.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_strip::parse;
    ///
    /// let url = parse("https://example.com/docs/hello%20world").unwrap();
    /// let segments = url.path_decoded().unwrap();
    /// assert_eq!(segments, vec!["docs", "hello world"]);
    /// ```
    pub fn path_decoded(&self) -> Result<Vec<String>, UrlError> {
        if self.path.is_empty() {
            return Ok(Vec::new());
        }

        self.path
            .strip_prefix('/')
            .unwrap_or(&self.path)
            .split('/')
            .map(decode_segment)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HttpUrl {
        HttpUrl {
            domain: "example.com".to_string(),
            path: "/a/b".to_string(),
            query: vec![
                ("x".to_string(), "1".to_string()),
                ("y".to_string(), "2".to_string()),
            ],
            fragment: Some("#frag".to_string()),
        }
    }

    #[test]
    fn test_into_str_full() {
        assert_eq!(sample().into_str(), "https://example.com/a/b?x=1&y=2#frag");
    }

    #[test]
    fn test_into_str_defaults_to_https() {
        let url = HttpUrl {
            domain: "example.com".to_string(),
            path: String::new(),
            query: Vec::new(),
            fragment: None,
        };
        assert_eq!(url.into_str(), "https://example.com");
    }

    #[test]
    fn test_into_str_with_protocol_override() {
        assert_eq!(
            sample().into_str_with("http"),
            "http://example.com/a/b?x=1&y=2#frag"
        );
    }

    #[test]
    fn test_duplicate_query_keys_render_in_order() {
        let url = HttpUrl {
            domain: "example.com".to_string(),
            path: String::new(),
            query: vec![
                ("k".to_string(), "1".to_string()),
                ("k".to_string(), "2".to_string()),
            ],
            fragment: None,
        };
        assert_eq!(url.into_str(), "https://example.com?k=1&k=2");
    }

    #[test]
    fn test_path_decoded_empty_path() {
        let url = HttpUrl {
            domain: "example.com".to_string(),
            path: String::new(),
            query: Vec::new(),
            fragment: None,
        };
        assert_eq!(url.path_decoded().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_path_decoded_fails_atomically() {
        let url = HttpUrl {
            domain: "example.com".to_string(),
            path: "/fine/%FF/also-fine".to_string(),
            query: Vec::new(),
            fragment: None,
        };
        assert!(matches!(
            url.path_decoded(),
            Err(UrlError::InvalidUtf8(_))
        ));
    }
}
