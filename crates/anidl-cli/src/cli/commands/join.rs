//! `anidl join <base> [KEY=VALUE]...`

use anidl_core::config::AnidlConfig;
use anidl_core::utils::{join_url, merge_object, QueryParams, QueryValue};

/// Config `default_query` first, then command-line pairs (which win on collision).
pub(crate) fn build_params(cfg: &AnidlConfig, pairs: Vec<(String, QueryValue)>) -> QueryParams {
    let given: QueryParams = pairs.into_iter().collect();
    match &cfg.default_query {
        Some(defaults) => merge_object(defaults, &given),
        None => given,
    }
}

pub fn run_join(cfg: &AnidlConfig, base: &str, pairs: Vec<(String, QueryValue)>) {
    let params = build_params(cfg, pairs);
    tracing::debug!("joining {} with {} params", base, params.len());
    println!("{}", join_url(base, &params));
}
