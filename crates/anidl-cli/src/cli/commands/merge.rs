//! `anidl merge <left> <right>`

use anidl_core::utils::{merge_object, obj2query, QueryParams};

pub fn run_merge(left: &QueryParams, right: &QueryParams) {
    println!("{}", obj2query(&merge_object(left, right)));
}
