//! url-strip - strip tracking parameters and bloat from urls.
//!
//! Given an arbitrary string purporting to be an http(s) url, this crate
//! either rejects it with a classified error or returns a minimized,
//! semantically equivalent url. Well-known domains get site-specific
//! canonicalization (a youtube watch link collapses to its `youtu.be`
//! short form); every other domain falls back to keeping at most its
//! first query pair.
//!
//! # Quick Start
//!
//! ```
//! use url_strip::strip;
//!
//! let clean = strip("https://youtube.com/watch?v=dQw4w9WgXcQ&feature=share").unwrap();
//! assert_eq!(clean, "https://youtu.be/dQw4w9WgXcQ");
//!
//! // Domains without a specific rule keep their first query pair.
//! let clean = strip("https://example.com/page?id=7&utm_source=mail").unwrap();
//! assert_eq!(clean, "https://example.com/page?id=7");
//! ```
//!
//! # Extensibility
//!
//! The built-in rules live in a frozen process-wide registry. To add or
//! override rules, build a [`Registry`] of your own during initialization
//! and share it read-only:
//!
//! ```
//! use url_strip::{HttpUrl, Registry, UrlError};
//!
//! fn bare(url: HttpUrl) -> Result<HttpUrl, UrlError> {
//!     Ok(HttpUrl { query: Vec::new(), fragment: None, ..url })
//! }
//!
//! let mut registry = Registry::with_default_rules();
//! registry.register(&["example.org"], bare).unwrap();
//!
//! let url = registry.strip("https://example.org/a?utm=1#top").unwrap();
//! assert_eq!(url.into_str(), "https://example.org/a");
//! ```
//!
//! # Error Handling
//!
//! Every entry point returns `Result`. Grammar failures are
//! [`ParseError`]s, wrapped into [`UrlError`] by the stripping pipeline;
//! domain-specific rules report semantic failures as
//! [`UrlError::Rewrite`], distinguishable from parse errors. Nothing in
//! the crate panics on bad input.

pub use decode::decode_segment;
pub use error::{ParseError, UrlError};
pub use parser::parse;
pub use registry::{list_registered_domains, strip, Registry};
pub use rules::{amazon_strip, strip_extra_queries, youtube_strip};
pub use types::{HttpUrl, QueryPair, RewriteFn};

pub mod decode;
pub mod error;
pub mod parser;
pub mod registry;
pub mod rules;
pub mod types;
