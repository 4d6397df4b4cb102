//! The url grammar and the parser that applies it.
//!
//! The grammar is a single regex: matching and validating in one pass
//! avoids re-deriving ambiguous segment boundaries field by field, and a
//! single "does the match cover the whole input" check rejects urls with
//! trailing garbage.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;
use crate::types::{HttpUrl, QueryPair};

// Characters allowed in a url component, based on the unreserved set of
// RFC 3986, or a %XX escape.
const URL_CHARS: &str = r"(?:[a-zA-Z0-9\-\._@]|%[0-9a-fA-F]{2})";

// Path segments additionally allow `:`.
const PATH_CHARS: &str = r"(?:[a-zA-Z0-9\-\._@:]|%[0-9a-fA-F]{2})";

/// Matches something that is intended to be an http(s) url. The scheme is
/// required but not captured; it is never retained in the parsed value.
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let query_kv = format!("{}+={}+", URL_CHARS, URL_CHARS);
    let pattern = format!(
        r"\b(?:https?://)(?P<domain>{url}+)(?P<path>(?:/{path}*)+)?(?:\?(?P<query>{kv}(?:&{kv})*))?(?P<fragment>#{url}+)?\b",
        url = URL_CHARS,
        path = PATH_CHARS,
        kv = query_kv,
    );
    Regex::new(&pattern).expect("url grammar compiles")
});

/// Parse a raw string into an [`HttpUrl`].
///
/// Trailing `/` characters are ignored, and the grammar must cover the
/// whole remaining input. Percent escapes are preserved raw; expanding
/// them is opt-in via [`HttpUrl::path_decoded`].
///
/// # Examples
///
/// ```
/// use url_strip::parse;
///
/// let url = parse("https://example.com/a/b?x=1#frag").unwrap();
/// assert_eq!(url.domain, "example.com");
/// assert_eq!(url.path, "/a/b");
/// assert_eq!(url.query, vec![("x".to_string(), "1".to_string())]);
/// assert_eq!(url.fragment, Some("#frag".to_string()));
/// ```
///
/// # Errors
///
/// [`ParseError::NoMatch`] if the grammar matches nowhere,
/// [`ParseError::IncompleteMatch`] if it matches only part of the input,
/// and [`ParseError::MissingDomain`] if the domain group is absent.
pub fn parse(input: &str) -> Result<HttpUrl, ParseError> {
    let trimmed = input.trim_end_matches('/');

    let caps = URL_REGEX.captures(trimmed).ok_or(ParseError::NoMatch)?;
    let matched = caps.get(0).ok_or(ParseError::NoMatch)?;

    // Require the entire input to be the url.
    if (matched.start(), matched.end()) != (0, trimmed.len()) {
        return Err(ParseError::IncompleteMatch);
    }

    let domain = caps
        .name("domain")
        .ok_or(ParseError::MissingDomain)?
        .as_str()
        .to_string();

    let path = caps
        .name("path")
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let query = parse_query_str(caps.name("query").map(|m| m.as_str()))?;

    let fragment = caps.name("fragment").map(|m| m.as_str().to_string());

    Ok(HttpUrl {
        domain,
        path,
        query,
        fragment,
    })
}

/// Split a raw query string into ordered pairs.
///
/// Pairs without exactly one `=` are rejected rather than split on the
/// first occurrence. The grammar already guarantees well-formed pairs, so
/// hitting this error means the caller bypassed it.
fn parse_query_str(query_str: Option<&str>) -> Result<Vec<QueryPair>, ParseError> {
    let query_str = match query_str {
        Some(q) => q,
        None => return Ok(Vec::new()),
    };

    let mut query = Vec::new();
    for pair in query_str.split('&') {
        let mut halves = pair.split('=');
        match (halves.next(), halves.next(), halves.next()) {
            (Some(key), Some(value), None) => {
                query.push((key.to_string(), value.to_string()));
            }
            _ => return Err(ParseError::MalformedQueryPair(pair.to_string())),
        }
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let url = parse("https://example.com").unwrap();
        assert_eq!(url.domain, "example.com");
        assert_eq!(url.path, "");
        assert!(url.query.is_empty());
        assert_eq!(url.fragment, None);
    }

    #[test]
    fn test_trailing_slashes_ignored() {
        assert_eq!(parse("https://example.com///"), parse("https://example.com"));
        assert_eq!(parse("https://example.com/a/"), parse("https://example.com/a"));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(parse("https://"), Err(ParseError::NoMatch));
        assert_eq!(parse("ftp://example.com"), Err(ParseError::NoMatch));
        assert_eq!(parse("not a url"), Err(ParseError::NoMatch));
    }

    #[test]
    fn test_incomplete_match() {
        assert_eq!(
            parse("https://example.com/path trailing-garbage"),
            Err(ParseError::IncompleteMatch)
        );
        assert_eq!(
            parse("see https://example.com"),
            Err(ParseError::IncompleteMatch)
        );
    }

    #[test]
    fn test_malformed_query_pair_detection() {
        assert_eq!(parse_query_str(None), Ok(Vec::new()));
        assert_eq!(
            parse_query_str(Some("a=b=c")),
            Err(ParseError::MalformedQueryPair("a=b=c".to_string()))
        );
        assert_eq!(
            parse_query_str(Some("a=1&bare")),
            Err(ParseError::MalformedQueryPair("bare".to_string()))
        );
    }
}
