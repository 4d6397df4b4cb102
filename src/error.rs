//! Error types for url parsing and stripping operations.

use thiserror::Error;

/// Errors produced while decomposing a raw string into an
/// [`HttpUrl`](crate::HttpUrl).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The url grammar did not match anywhere in the input.
    #[error("string could not be parsed as a url")]
    NoMatch,

    /// The grammar matched a prefix of the input but trailing characters
    /// remained.
    #[error("url match does not cover the whole input")]
    IncompleteMatch,

    /// The grammar matched but produced no domain. Unreachable for the
    /// current grammar, kept as a defensive check.
    #[error("url has no domain")]
    MissingDomain,

    /// A query pair did not contain exactly one `=`.
    #[error("malformed query pair: '{0}'")]
    MalformedQueryPair(String),
}

/// Errors surfaced by the top-level stripping pipeline and the opt-in
/// percent decoder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// The input does not start with `http://` or `https://`.
    #[error("url does not start with http(s)")]
    NotHttpScheme,

    /// The parser rejected the input.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A `%` escape was cut off before both of its hex digits.
    #[error("percent escape is missing its hex digits")]
    MalformedEscape,

    /// A `%` escape contained characters that are not hex digits.
    #[error("invalid hex digits in percent escape: '%{0}'")]
    InvalidHexDigits(String),

    /// Decoded escape bytes were not well-formed UTF-8.
    #[error("decoded path segment is not valid utf-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// A rewrite rule was registered with an empty domain list.
    #[error("no domain specified for rewrite rule")]
    NoDomainSpecified,

    /// A domain-specific rewrite rule rejected the url.
    #[error("{0}")]
    Rewrite(String),
}
