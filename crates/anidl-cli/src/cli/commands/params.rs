//! Argument parsers for `KEY=VALUE` pairs and `k=v,k=v` lists.

use anidl_core::utils::{QueryParams, QueryValue};

/// Parses a single `KEY=VALUE` argument. The key must be non-empty.
pub fn parse_pair(arg: &str) -> Result<(String, QueryValue), String> {
    match arg.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_string(), QueryValue::from(v))),
        _ => Err(format!("expected KEY=VALUE, got {:?}", arg)),
    }
}

/// Parses a comma-separated list of `KEY=VALUE` pairs. An empty string is an empty list.
pub fn parse_params(arg: &str) -> Result<QueryParams, String> {
    arg.split(',')
        .filter(|s| !s.is_empty())
        .map(parse_pair)
        .collect()
}
