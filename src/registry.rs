//! The rewrite registry and the dispatch pipeline built on it.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::UrlError;
use crate::parser::parse;
use crate::rules::{amazon_strip, strip_extra_queries, youtube_strip};
use crate::types::{HttpUrl, RewriteFn};

/// The process-wide registry behind [`strip`] and
/// [`list_registered_domains`]: built once on first use and never mutated
/// again, so concurrent lookups need no locking.
static DEFAULT_REGISTRY: Lazy<Registry> = Lazy::new(Registry::with_default_rules);

/// Mapping from domain name to the rewrite rule registered for it.
///
/// A registry is mutable only while it is being built; once shared it is
/// read-only, and dispatch is a pure function of the domain and the parsed
/// url. The [`strip`] free function uses a frozen default instance; build
/// your own to add or override rules.
#[derive(Debug, Default)]
pub struct Registry {
    rules: HashMap<String, RewriteFn>,
}

impl Registry {
    /// An empty registry with no rules at all.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// A registry preloaded with the built-in rules.
    pub fn with_default_rules() -> Self {
        let mut registry = Self::new();
        for domain in ["youtube.com", "www.youtube.com"] {
            registry.rules.insert(domain.to_string(), youtube_strip as RewriteFn);
        }
        for domain in ["www.amazon.com", "www.amazon.co.uk"] {
            registry.rules.insert(domain.to_string(), amazon_strip as RewriteFn);
        }
        registry
    }

    /// Associate a rewrite rule with one or more literal domains.
    ///
    /// Registering a domain that already has a rule silently overwrites
    /// it: last registration wins, which is the supported way to override
    /// built-ins. All registration must finish before the registry is
    /// shared for stripping.
    ///
    /// # Errors
    ///
    /// [`UrlError::NoDomainSpecified`] if `domains` is empty.
    pub fn register(&mut self, domains: &[&str], rule: RewriteFn) -> Result<(), UrlError> {
        if domains.is_empty() {
            return Err(UrlError::NoDomainSpecified);
        }

        for domain in domains {
            self.rules.insert((*domain).to_string(), rule);
        }

        Ok(())
    }

    /// A sorted snapshot of every domain with a registered rule.
    pub fn domains(&self) -> Vec<String> {
        let mut domains: Vec<String> = self.rules.keys().cloned().collect();
        domains.sort();
        domains
    }

    /// Strip a raw url using this registry's rules.
    ///
    /// The scheme precondition is checked here, before the parser runs;
    /// parse errors propagate unchanged. A domain with a registered rule
    /// gets that rule (including its errors); every other domain gets
    /// [`strip_extra_queries`].
    pub fn strip(&self, url_str: &str) -> Result<HttpUrl, UrlError> {
        if !url_str.starts_with("http") {
            return Err(UrlError::NotHttpScheme);
        }

        let url = parse(url_str)?;

        match self.rules.get(&url.domain) {
            Some(rule) => rule(url),
            None => strip_extra_queries(url),
        }
    }
}

/// Strip a url of tracking elements and bloat using the built-in rules.
///
/// # Examples
///
/// ```
/// use url_strip::strip;
///
/// let clean = strip("https://youtube.com/watch?v=abcdefg1234&tracker=345345").unwrap();
/// assert_eq!(clean, "https://youtu.be/abcdefg1234");
/// ```
///
/// # Errors
///
/// [`UrlError::NotHttpScheme`] for inputs without an `http` prefix, a
/// wrapped [`ParseError`](crate::ParseError) when the grammar rejects the
/// input, and whatever error a domain-specific rule reports.
pub fn strip(url_str: &str) -> Result<String, UrlError> {
    DEFAULT_REGISTRY.strip(url_str).map(HttpUrl::into_str)
}

/// The domains the built-in registry has a specific rule for, sorted.
pub fn list_registered_domains() -> Vec<String> {
    DEFAULT_REGISTRY.domains()
}
