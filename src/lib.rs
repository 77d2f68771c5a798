//! Plex Server Command-Line Utility Library
//!
//! This library provides the building blocks of `plexcli`, a small tool to
//! remotely trigger administrative operations on a single Plex media server:
//! listing and scanning library sections, and refreshing the metadata of
//! recently added shows, seasons, episodes and movies.
//!
//! # Modules
//!
//! - `cli` - Command-line handlers, one per subcommand
//! - `config` - Configuration management and environment variables
//! - `management` - Recently-added aggregation, refresh orchestration and section handling
//! - `plex` - Plex HTTP API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use plexcli::{config, plex::PlexClient};
//!
//! #[tokio::main]
//! async fn main() -> plexcli::Res<()> {
//!     config::load_env().await?;
//!     let config = config::resolve(Some("token".into()), None, None, None)?;
//!     let client = PlexClient::new(&config);
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod management;
pub mod plex;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for top-level plumbing using a
/// boxed dynamic error trait object. Domain operations return their own typed
/// errors which convert into this alias with `?`.
///
/// # Example
///
/// ```
/// use plexcli::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for progress and status updates.
///
/// # Example
///
/// ```
/// info!("refreshing {}", label);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("refresh success");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Only used from the command-line
/// layer for failures that leave nothing useful to do, such as a missing
/// token or a malformed recently-added feed.
///
/// # Example
///
/// ```
/// error!("The plex token is missing");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues: failed requests at the API client boundary,
/// individual refresh failures, unknown library ids.
///
/// # Example
///
/// ```
/// warning!("Request to {} failed: {}", url, err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
