//! `anidl slug <name>`

use anidl_core::utils::get_slug;

pub fn run_slug(name: &str) {
    println!("{}", get_slug(name));
}
