//! `anidl clean-name <name>`

use anidl_core::utils::clean_anime_name;

pub fn run_clean_name(name: &str) {
    println!("{}", clean_anime_name(name));
}
