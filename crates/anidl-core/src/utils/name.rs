//! Display-name cleanup and slug generation.

/// Language tags stripped from listing titles.
const STRIPPED_TAGS: [&str; 2] = ["(SUB)", "(DUB)"];

/// Removes `(SUB)` and `(DUB)` tags from a title and trims trailing whitespace.
///
/// Only those two exact tags are recognized; `(TV)` and other decorations stay.
pub fn clean_anime_name(name: &str) -> String {
    let mut out = name.to_string();
    for tag in STRIPPED_TAGS {
        out = out.replace(tag, "");
    }
    out.trim_end().to_string()
}

/// Builds a URL slug from a title.
///
/// Lower-cases ASCII letters, turns each space into `-` (runs are not
/// collapsed) and drops everything else that is not an ASCII letter or digit.
pub fn get_slug(name: &str) -> String {
    name.chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
            _ => None,
        })
        .collect()
}
