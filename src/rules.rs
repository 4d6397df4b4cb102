//! Built-in rewrite rules and the generic fallback policy.

use crate::error::UrlError;
use crate::types::HttpUrl;

/// Generic fallback for domains without a specific rule: keep at most the
/// first query pair and drop the rest, leaving path and fragment alone.
///
/// This is a heuristic, not a guarantee; the leading pair is assumed to be
/// the meaningful one.
pub fn strip_extra_queries(mut url: HttpUrl) -> Result<HttpUrl, UrlError> {
    url.query.truncate(1);
    Ok(url)
}

fn drop_query(url: HttpUrl) -> HttpUrl {
    HttpUrl {
        query: Vec::new(),
        ..url
    }
}

/// Rewrite rule for the youtube domains.
///
/// Watch links collapse to the `youtu.be` short form, keeping the fragment
/// and dropping the query entirely; any other path keeps its shape and
/// loses its query.
pub fn youtube_strip(url: HttpUrl) -> Result<HttpUrl, UrlError> {
    if url.path != "/watch" {
        return Ok(drop_query(url));
    }

    // Duplicate `v` keys resolve to the last occurrence.
    let video_id = url
        .query
        .iter()
        .rev()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.clone());

    match video_id {
        Some(id) => Ok(HttpUrl {
            domain: "youtu.be".to_string(),
            path: format!("/{}", id),
            query: Vec::new(),
            fragment: url.fragment,
        }),
        None => Err(UrlError::Rewrite(
            "address was a watch link, but could not find a video id".to_string(),
        )),
    }
}

/// Rewrite rule for the amazon storefronts.
///
/// Product links keep only their `/dp/{id}` part; paths without a product
/// id keep their shape and lose their query.
pub fn amazon_strip(url: HttpUrl) -> Result<HttpUrl, UrlError> {
    let segments: Vec<&str> = url.path.split('/').collect();

    if let Some(idx) = segments.iter().position(|s| *s == "dp") {
        if let Some(product_id) = segments.get(idx + 1).filter(|s| !s.is_empty()) {
            return Ok(HttpUrl {
                path: format!("/dp/{}", product_id),
                query: Vec::new(),
                ..url
            });
        }
    }

    Ok(drop_query(url))
}
