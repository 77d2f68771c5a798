//! # CLI Module
//!
//! This module provides the command-line handlers of plexcli. Each public
//! function implements one subcommand: it takes the API client plus the
//! arguments of that subcommand, drives the management layer and renders the
//! result on the console.
//!
//! ## Commands
//!
//! ### Libraries
//!
//! - [`list_libraries`] - Prints all library sections sorted by id
//! - [`scan_library`] - Scans one section, or lists all sections if the id is unknown
//!
//! ### Metadata Refresh
//!
//! - [`refresh_recent_tvshows`] - Refreshes each show owning recently added items
//! - [`refresh_tvshows`] - Refreshes each recently added season and episode
//! - [`refresh_movies`] - Refreshes each recently added movie
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Aggregation, Orchestration)
//!     ↓
//! Plex Layer (PlexApi, PlexClient)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Error Handling
//!
//! Handlers never return errors. Failures that leave nothing useful to do
//! (the recently-added feed cannot be fetched or is malformed) end the program
//! through [`crate::error!`]. Failures of single refresh requests are reported
//! and skipped, and an unknown library id falls back to the section listing.
//!
//! ## Usage Patterns
//!
//! ```bash
//! plexcli --plex-token abc list-libraries
//! plexcli --plex-token abc scan-library 2
//! PLEX_TOKEN=abc plexcli refresh-recent-tvshows
//! ```

mod libraries;
mod refresh;

pub use libraries::list_libraries;
pub use libraries::scan_library;
pub use refresh::refresh_movies;
pub use refresh::refresh_recent_tvshows;
pub use refresh::refresh_tvshows;
