//! `anidl decompose <url>` – print the base, then one `key=value` per line.

use anidl_core::utils::decompose_url;

pub fn run_decompose(url: &str) {
    let (base, params) = decompose_url(url);
    println!("{}", base);
    for (k, v) in &params {
        println!("{}={}", k, v);
    }
}
