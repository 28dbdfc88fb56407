//! Error types for GitHub API access
//!
//! Covers both the GraphQL primary path and the REST search fallback.

use thiserror::Error;

/// Errors that can occur when talking to the GitHub API
#[derive(Error, Debug)]
pub enum GitHubError {
    /// No credential configured
    #[error("GITHUB_TOKEN is not set - export a token with repo and project scopes")]
    MissingToken,

    /// Transport-level failure (connect, timeout, TLS)
    #[error("request to GitHub failed: {0}")]
    Http(#[from] reqwest::Error),

    /// GitHub answered with a non-success HTTP status
    #[error("GitHub returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as returned
        body: String,
    },

    /// The GraphQL response carried an `errors` array. Unknown organization
    /// or project surfaces here as a NOT_FOUND message.
    #[error("GraphQL query failed: {0}")]
    Graphql(String),

    /// Failed to decode a response body
    #[error("failed to parse GitHub response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;
