//! `anidl safe-name <text>`

use anidl_core::utils::file_safe_string;

pub fn run_safe_name(text: &str) {
    println!("{}", file_safe_string(text));
}
