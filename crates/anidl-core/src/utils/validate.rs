//! URL validation with a scheme allow-list.

use std::collections::BTreeSet;

use url::Url;

use super::error::UrlPolicyError;

/// Schemes accepted by [`is_url`].
pub const DEFAULT_SCHEMES: [&str; 2] = ["http", "https"];

/// Scheme allow-list applied when validating URL strings.
///
/// A URL is permitted when it parses as an absolute URL, has a non-empty host
/// and uses one of the allowed schemes. `javascript:` and `data:` URLs have no
/// host and are always refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPolicy {
    allowed_schemes: BTreeSet<String>,
}

impl Default for UrlPolicy {
    fn default() -> Self {
        Self {
            allowed_schemes: DEFAULT_SCHEMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl UrlPolicy {
    /// Builds a policy from scheme names. Names are lower-cased.
    ///
    /// # Errors
    ///
    /// Returns an error when a scheme is empty or is not `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    pub fn from_schemes<I, S>(schemes: I) -> Result<Self, UrlPolicyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut allowed_schemes = BTreeSet::new();
        for scheme in schemes {
            let candidate = scheme.as_ref().trim();
            if candidate.is_empty() {
                return Err(UrlPolicyError::EmptyScheme);
            }
            let mut chars = candidate.chars();
            let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
            if !valid {
                return Err(UrlPolicyError::InvalidScheme {
                    scheme: candidate.to_string(),
                });
            }
            allowed_schemes.insert(candidate.to_ascii_lowercase());
        }
        Ok(Self { allowed_schemes })
    }

    /// Allowed schemes in sorted order.
    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.allowed_schemes.iter().map(String::as_str)
    }

    /// Returns true when `input` is an absolute URL this policy accepts. Never panics.
    ///
    /// Whitespace and control characters anywhere in `input` are refused even
    /// though the WHATWG parser would strip or drop them.
    pub fn permits(&self, input: &str) -> bool {
        if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
            tracing::debug!("rejecting {:?}: contains whitespace or control characters", input);
            return false;
        }

        let parsed = match Url::parse(input) {
            Ok(u) => u,
            Err(e) => {
                tracing::debug!("rejecting {:?}: {}", input, e);
                return false;
            }
        };

        if !self.allowed_schemes.contains(parsed.scheme()) {
            tracing::debug!("rejecting {:?}: scheme {} not allowed", input, parsed.scheme());
            return false;
        }

        parsed.host_str().is_some_and(|h| !h.is_empty())
    }
}

/// Returns true only for syntactically valid absolute `http`/`https` URLs.
pub fn is_url(input: &str) -> bool {
    UrlPolicy::default().permits(input)
}
