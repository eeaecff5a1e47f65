//! Error types for the feed-to-image pipeline

use thiserror::Error;

use crate::extract::Tag;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching, extracting or rendering a feed item.
///
/// Every variant is terminal for a run: nothing is retried and no image is
/// written once one of these is returned.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure or non-success HTTP status
    #[error("Network error: {0}")]
    NetworkError(String),

    /// An expected feed delimiter was not present in the document
    #[error("Couldn't find <{0}> tag")]
    MissingTag(Tag),

    /// Bad command-line invocation
    #[error("Usage error: {0}")]
    UsageError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to rasterize or encode the image
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to write the output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tag_names_the_delimiter() {
        assert_eq!(Error::MissingTag(Tag::Item).to_string(), "Couldn't find <item> tag");
        assert_eq!(
            Error::MissingTag(Tag::Description).to_string(),
            "Couldn't find <description> tag"
        );
    }
}
