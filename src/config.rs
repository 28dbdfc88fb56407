//! Configuration loading for team-pulse-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variables GITHUB_TOKEN and GITHUB_ORG
//! 2. Environment variable TEAM_PULSE_CONFIG_PATH
//! 3. ~/.config/team-pulse/config.toml
//! 4. Default values

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// GitHub project defaults
    #[serde(default)]
    pub github: GithubConfig,

    /// Bearer credential for the GitHub API. Only ever read from the
    /// GITHUB_TOKEN environment variable, never from the config file.
    #[serde(skip)]
    pub token: Option<String>,
}

/// Defaults for which project to read and which issues to consider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Organization that owns the project
    #[serde(default = "default_organization")]
    pub organization: String,

    /// Projects v2 board number within the organization
    #[serde(default = "default_project_number")]
    pub project_number: u32,

    /// Label filter used by the search fallback
    #[serde(default = "default_label")]
    pub label: String,

    /// Lower bound on issue creation date
    #[serde(default = "default_since")]
    pub since: NaiveDate,
}

// Default value functions
fn default_organization() -> String {
    "octo-org".to_string()
}

fn default_project_number() -> u32 {
    1
}

fn default_label() -> String {
    "calendar".to_string()
}

fn default_since() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github: GithubConfig::default(),
            token: None,
        }
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            organization: default_organization(),
            project_number: default_project_number(),
            label: default_label(),
            since: default_since(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_path();

        let mut config = if let Some(path) = config_path {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content)?
            } else {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
        } else {
            tracing::info!("No config path specified, using defaults");
            Self::default()
        };

        // Environment overrides (highest priority)
        if let Ok(org) = std::env::var("GITHUB_ORG") {
            config.github.organization = org;
        }
        config.token = std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        Ok(config)
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        // 1. Check environment variable
        if let Ok(path) = std::env::var("TEAM_PULSE_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        // 2. Check ~/.config/team-pulse/config.toml
        dirs::config_dir().map(|d| d.join("team-pulse").join("config.toml"))
    }
}
