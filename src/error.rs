//! Error kinds for everything upstream of the tree core.

use std::path::PathBuf;

/// Failure while resolving a repository into a path listing.
///
/// Building and rendering the tree never fail; only input parsing and
/// retrieval do.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Repository, branch or tree does not exist (or is private).
    #[error("not found: {0}")]
    NotFound(String),
    /// The provider refused the request because of its rate limit.
    #[error("GitHub API rate limit exceeded{0}; set GITHUB_TOKEN to raise the limit")]
    RateLimited(String),
    /// A repository identifier or API URL could not be understood.
    #[error("invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },
    /// The provider returned only part of the listing.
    #[error("listing truncated after {0} entries (use --allow-truncated to render it anyway)")]
    Truncated(usize),
    /// DNS, connection or timeout failure.
    #[error("network error: {0}")]
    Network(String),
    /// Any other non-success HTTP status.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },
    /// Response body was not the JSON we expected.
    #[error("failed to parse response: {0}")]
    Parse(String),
    /// Reading a local path list failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub(crate) fn invalid_input(input: &str, reason: impl Into<String>) -> Self {
        FetchError::InvalidInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Parse(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}
