//! CLI command handlers. Each command is in its own file.

mod check_url;
mod clean_name;
mod decompose;
mod join;
mod merge;
mod pad;
mod params;
mod safe_name;
mod slug;

pub use check_url::run_check_url;
pub use clean_name::run_clean_name;
pub use decompose::run_decompose;
pub use join::run_join;
pub use merge::run_merge;
pub use pad::run_pad;
pub use params::{parse_pair, parse_params};
pub use safe_name::run_safe_name;
pub use slug::run_slug;
