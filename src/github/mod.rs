//! GitHub API access: GraphQL primary path, REST search fallback

pub mod client;
pub mod error;
pub mod graphql;
pub mod rest;

pub use client::GitHubClient;
pub use error::{GitHubError, GitHubResult};
