//! Configuration management for the Plex command-line utility.
//!
//! This module handles loading configuration values from environment variables
//! and `.env` files, and resolving them together with the command-line options
//! into a [`PlexConfig`] describing which server to talk to.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command-line options (highest priority)
//! 2. Environment variables (`PLEX_TOKEN`, `PLEX_HOST`, `PLEX_PORT`, `PLEX_SCHEME`)
//! 3. `.env` file in the local data directory
//! 4. Application defaults (`http://localhost:32400`)

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_SCHEME: &str = "http";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 32400;

/// Errors raised while resolving the configuration, before any network activity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("The plex token is missing")]
    MissingToken,
}

/// Connection settings for a single Plex server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlexConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub token: String,
}

impl PlexConfig {
    /// Returns the server base address, e.g. `http://localhost:32400`.
    pub fn base_url(&self) -> String {
        format!(
            "{scheme}://{host}:{port}",
            scheme = self.scheme,
            host = self.host,
            port = self.port
        )
    }
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist and loads environment
/// variables from `plexcli/.env` below the platform-specific local data
/// directory. A missing file is not an error: all settings may as well come
/// from the real environment or the command line.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/plexcli/.env`
/// - macOS: `~/Library/Application Support/plexcli/.env`
/// - Windows: `%LOCALAPPDATA%/plexcli/.env`
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.exists() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("plexcli/.env");
    path
}

/// Resolves the parsed options into a [`PlexConfig`].
///
/// Blank values are treated as absent so that an exported but empty
/// `PLEX_TOKEN` is reported the same way as a missing one.
///
/// # Errors
///
/// Returns [`ConfigError::MissingToken`] if no token was supplied.
///
/// # Example
///
/// ```
/// let config = resolve(Some("abc".into()), None, None, None)?;
/// assert_eq!(config.base_url(), "http://localhost:32400");
/// ```
pub fn resolve(
    token: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    scheme: Option<String>,
) -> Result<PlexConfig, ConfigError> {
    let token = non_blank(token).ok_or(ConfigError::MissingToken)?;

    Ok(PlexConfig {
        scheme: non_blank(scheme).unwrap_or_else(|| DEFAULT_SCHEME.to_string()),
        host: non_blank(host).unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: port.unwrap_or(DEFAULT_PORT),
        token,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
