//! String and URL utilities used by the scraper.
//!
//! Every function here is a pure transformation: filename sanitization,
//! zero-padding, shallow map merging, query-string decomposition and joining,
//! display-name cleanup and URL validation.

mod address;
mod error;
mod filename;
mod name;
mod number;
mod query;
mod validate;

pub use address::{decompose_url, join_url};
pub use error::{UrlPolicyError, UtilsError};
pub use filename::file_safe_string;
pub use name::{clean_anime_name, get_slug};
pub use number::{pad, pad_to, DEFAULT_PAD_WIDTH, MAX_PAD_WIDTH};
pub use query::{merge_object, obj2query, QueryParams, QueryValue};
pub use validate::{is_url, UrlPolicy, DEFAULT_SCHEMES};
