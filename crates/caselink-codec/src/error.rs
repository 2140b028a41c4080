//! Codec error types

/// Encode-side failures
///
/// Decoding never surfaces an error; see the crate docs.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Payload serialization failed
    #[error("payload serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Share-link parsing and composition failures
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// Input is not a parseable URL
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// URL parsed but its path is not `/share/<slugs>`
    #[error("not a share link: path must be /share/<slugs>")]
    NotAShareLink,

    /// Encoding the inline payload for a composed link failed
    #[error(transparent)]
    Codec(#[from] crate::error::CodecError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_error_display() {
        assert!(LinkError::NotAShareLink.to_string().contains("/share/"));
    }
}
