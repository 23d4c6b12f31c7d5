//! `anidl pad <num> [--width N]` – zero-pad an episode number.

use anidl_core::config::AnidlConfig;
use anidl_core::utils::pad_to;
use anyhow::Result;

pub fn run_pad(cfg: &AnidlConfig, num: &str, width: Option<usize>) -> Result<()> {
    let width = width.unwrap_or(cfg.pad_width);
    println!("{}", pad_to(num, width)?);
    Ok(())
}
