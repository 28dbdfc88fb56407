//! Team Pulse MCP Library
//!
//! MCP-compatible tools over a GitHub Projects board: team calendar
//! events, per-person schedules, and workload analysis.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use team_pulse_mcp::{Config, TeamPulseMcpServer};
//!
//! let config = Config::load()?;
//! let server = TeamPulseMcpServer::new(config)?;
//! // Serve via stdio or an in-memory transport
//! ```
//!
//! # Data flow
//! raw GitHub records -> normalizer -> event extractor ->
//! {workload aggregator, calendar grid projector} -> text/HTML formatting
//!
//! # Requirements
//! - `GITHUB_TOKEN` with repo and project scopes

pub mod config;
pub mod github;
pub mod handlers;
pub mod params;
pub mod pipeline;
pub mod render;
pub mod server;
pub mod types;

// Re-export main entry points
pub use config::Config;
pub use server::TeamPulseMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
