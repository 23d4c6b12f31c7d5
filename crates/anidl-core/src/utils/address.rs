//! Splitting URLs into base + parameters and joining them back.

use super::query::{obj2query, QueryParams, QueryValue};

/// Splits `url` at the first `?` into its base and query parameters.
///
/// Each `&`-separated segment is split at its first `=`. Segments without `=`,
/// or with an empty key or value, are dropped. Without a `?` the whole input is
/// the base and the parameters are empty.
pub fn decompose_url(url: &str) -> (String, QueryParams) {
    let (base, query) = match url.split_once('?') {
        Some((base, query)) => (base, query),
        None => return (url.to_string(), QueryParams::new()),
    };

    let mut params = QueryParams::new();
    for segment in query.split('&') {
        match segment.split_once('=') {
            Some((k, v)) if !k.is_empty() && !v.is_empty() => {
                params.insert(k.to_string(), QueryValue::Text(v.to_string()));
            }
            _ => {
                if !segment.is_empty() {
                    tracing::debug!("dropping malformed query segment {:?}", segment);
                }
            }
        }
    }

    (base.to_string(), params)
}

/// Appends `params` to `base` as a query string.
///
/// `base` is expected to carry no query. Empty `params` return `base` unchanged.
pub fn join_url(base: &str, params: &QueryParams) -> String {
    if params.is_empty() {
        return base.to_string();
    }
    format!("{}?{}", base, obj2query(params))
}
