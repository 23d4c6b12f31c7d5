//! `anidl check-url <url>` – prints `valid` or `invalid`.

use anidl_core::config::AnidlConfig;
use anyhow::Result;

/// Returns `Ok(false)` for an invalid URL so the binary can exit non-zero.
pub fn run_check_url(cfg: &AnidlConfig, url: &str) -> Result<bool> {
    let policy = cfg.url_policy()?;
    let ok = policy.permits(url);
    println!("{}", if ok { "valid" } else { "invalid" });
    Ok(ok)
}
