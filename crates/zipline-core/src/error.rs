use thiserror::Error;

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Why a link creation request was rejected.
///
/// Every variant corresponds to exactly one request field, so the
/// gateway can key its error map by [`ValidationError::field`].
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// The URL did not parse as an absolute URL with a host.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The validity period was below one minute or not representable.
    #[error("validity period must be at least 1 minute, got {0}")]
    InvalidValidity(i64),

    /// The custom short code was malformed.
    #[error("invalid shortcode: {0}")]
    InvalidShortcode(String),

    /// The requested short code is already occupied, live or expired.
    #[error("shortcode already taken: {0}")]
    ShortcodeTaken(String),
}

impl ValidationError {
    /// The request field the error applies to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidUrl(_) => "originalUrl",
            ValidationError::InvalidValidity(_) => "validityPeriod",
            ValidationError::InvalidShortcode(_) | ValidationError::ShortcodeTaken(_) => {
                "customShortcode"
            }
        }
    }
}
