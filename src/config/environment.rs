// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses listen port, database location, CORS origins, and timeouts from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! Environment-based configuration management

use anyhow::{bail, Context, Result};
use larder_core::constants::{defaults, env_config};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Environment type for CORS and logging behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed service
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            // Default fallback for unrecognized values
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (tests, demos)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns an error for non-`SQLite` schemes or an empty path
    pub fn parse_url(s: &str) -> Result<Self> {
        let Some(path_str) = s.strip_prefix("sqlite:") else {
            bail!("Unsupported database URL '{s}': only sqlite: URLs are supported");
        };
        match path_str {
            ":memory:" => Ok(Self::Memory),
            "" => bail!("Database URL '{s}' has an empty path"),
            path => Ok(Self::SQLite {
                path: PathBuf::from(path.trim_start_matches("//")),
            }),
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/larder.db"),
        }
    }
}

impl std::fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Deployment environment
    pub environment: Environment,
    /// Allowed CORS origins; empty means permissive in development
    pub cors_allowed_origins: Vec<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            database: DatabaseConfig {
                url: DatabaseUrl::default(),
            },
            environment: Environment::Development,
            cors_allowed_origins: Vec::new(),
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let http_port = env_var_or(env_config::HTTP_PORT, &defaults::HTTP_PORT.to_string())
            .parse()
            .with_context(|| format!("Invalid {} value", env_config::HTTP_PORT))?;

        let url = DatabaseUrl::parse_url(&env_var_or(
            env_config::DATABASE_URL,
            defaults::DATABASE_URL,
        ))
        .with_context(|| format!("Invalid {} value", env_config::DATABASE_URL))?;

        let request_timeout_secs = env_var_or(
            env_config::REQUEST_TIMEOUT_SECS,
            &defaults::REQUEST_TIMEOUT_SECS.to_string(),
        )
        .parse()
        .with_context(|| format!("Invalid {} value", env_config::REQUEST_TIMEOUT_SECS))?;

        Ok(Self {
            http_port,
            database: DatabaseConfig { url },
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
            cors_allowed_origins: parse_origins(&env_var_or(
                env_config::CORS_ALLOWED_ORIGINS,
                "",
            )),
            request_timeout_secs,
        })
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Larder Server Configuration:\n\
             - HTTP Port: {}\n\
             - Database: {}\n\
             - Environment: {}\n\
             - CORS Origins: {}\n\
             - Request Timeout: {}s",
            self.http_port,
            self.database.url,
            self.environment,
            if self.cors_allowed_origins.is_empty() {
                "any".to_owned()
            } else {
                self.cors_allowed_origins.join(", ")
            },
            self.request_timeout_secs,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    origins_str
        .split(',')
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://localhost:19006, https://larder.app"),
            vec!["http://localhost:19006", "https://larder.app"]
        );
        assert!(parse_origins("").is_empty());
        assert!(parse_origins(" , ").is_empty());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("test"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_database_url_parsing() {
        let file = DatabaseUrl::parse_url("sqlite:./data/test.db").unwrap();
        assert_eq!(
            file,
            DatabaseUrl::SQLite {
                path: PathBuf::from("./data/test.db")
            }
        );
        assert_eq!(file.to_connection_string(), "sqlite:./data/test.db");

        let memory = DatabaseUrl::parse_url("sqlite::memory:").unwrap();
        assert!(memory.is_memory());

        assert!(DatabaseUrl::parse_url("mongodb://localhost/larder").is_err());
        assert!(DatabaseUrl::parse_url("sqlite:").is_err());
    }

    #[test]
    fn test_summary_mentions_port_and_database() {
        let config = ServerConfig::default();
        let summary = config.summary();
        assert!(summary.contains("8081"));
        assert!(summary.contains("sqlite:./data/larder.db"));
    }
}
