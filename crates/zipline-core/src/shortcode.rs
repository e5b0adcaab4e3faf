use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// Shortest code accepted from a caller.
pub const MIN_LENGTH: usize = 3;
/// Longest code accepted from a caller.
pub const MAX_LENGTH: usize = 10;

/// A validated short code.
///
/// Codes are 3 to 10 ASCII alphanumeric characters, case sensitive:
/// `Promo1` and `promo1` are distinct codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortCode(String);

impl ShortCode {
    /// Validates and wraps a caller-supplied code.
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        if !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidShortcode(format!(
                "only ASCII letters and digits are allowed, got {code:?}"
            )));
        }
        if code.len() < MIN_LENGTH || code.len() > MAX_LENGTH {
            return Err(ValidationError::InvalidShortcode(format!(
                "length must be between {MIN_LENGTH} and {MAX_LENGTH}, got {}",
                code.len()
            )));
        }
        Ok(Self(code))
    }

    /// Wraps a code already known to be well formed.
    ///
    /// Generators use this for codes drawn from the alphanumeric
    /// alphabet; anything caller-supplied goes through [`ShortCode::new`].
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Composes the full short URL against a base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }
}

impl std::fmt::Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
