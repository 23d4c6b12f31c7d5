//! Filename-safe string sanitization.

/// Characters reserved by Windows (and `/` on Unix) in path segments.
const ILLEGAL_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Removes characters that are illegal in a file path segment.
///
/// Illegal characters (`\ / : * ? " < > |`) are deleted outright; nothing is
/// inserted in their place. Apostrophes and every other character are kept in
/// their original order.
pub fn file_safe_string(name: &str) -> String {
    name.chars().filter(|c| !ILLEGAL_CHARS.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_colons() {
        assert_eq!(file_safe_string("nar::to"), "narto");
    }

    #[test]
    fn removes_slash_and_backslash() {
        assert_eq!(file_safe_string("nar\\/to"), "narto");
    }

    #[test]
    fn keeps_apostrophe() {
        assert_eq!(file_safe_string("nar<>?*|'to"), "nar'to");
        assert_eq!(file_safe_string("JoJo's \"Bizarre\" Adventure"), "JoJo's Bizarre Adventure");
    }

    #[test]
    fn passthrough_and_empty() {
        assert_eq!(file_safe_string(""), "");
        assert_eq!(file_safe_string("Episode 001.mp4"), "Episode 001.mp4");
        assert_eq!(file_safe_string("Re:Zero – 第2期"), "ReZero – 第2期");
    }
}
