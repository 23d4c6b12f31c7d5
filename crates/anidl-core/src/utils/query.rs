//! Query parameter values, ordered parameter maps and query-string building.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single query parameter value.
///
/// Conversion to text is explicit: strings verbatim, integers in decimal,
/// floats via `Display`, booleans as `true`/`false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Text(s) => f.write_str(s),
            QueryValue::Integer(n) => write!(f, "{}", n),
            QueryValue::Float(x) => write!(f, "{}", x),
            QueryValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Text(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Text(s)
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        QueryValue::Bool(b)
    }
}

impl From<f64> for QueryValue {
    fn from(x: f64) -> Self {
        QueryValue::Float(x)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for QueryValue {
                fn from(n: $t) -> Self {
                    QueryValue::Integer(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

/// Insertion-ordered query parameters. Iteration order is the output order of [`obj2query`].
pub type QueryParams = IndexMap<String, QueryValue>;

/// Shallow right-biased merge of two maps.
///
/// Keys of `left` keep their position (taking `right`'s value on collision);
/// keys only in `right` follow in `right`'s order. Neither input is modified.
pub fn merge_object<V: Clone>(
    left: &IndexMap<String, V>,
    right: &IndexMap<String, V>,
) -> IndexMap<String, V> {
    let mut merged = left.clone();
    for (k, v) in right {
        merged.insert(k.clone(), v.clone());
    }
    merged
}

/// Renders `params` as `k1=v1&k2=v2`. Values are not percent-encoded.
pub fn obj2query(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}
