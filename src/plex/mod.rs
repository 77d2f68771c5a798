//! # Plex Integration Module
//!
//! This module provides the interface to the administrative HTTP API of a single
//! Plex media server. It owns everything that touches the wire: URL
//! construction, the `X-Plex-Token` credential, status handling and JSON
//! decoding. No business logic lives here.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! PlexApi trait
//!          ↓
//! PlexClient
//!     ├── Library Sections (list, resolve, scan)
//!     └── Metadata (recently added, refresh)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Plex Media Server
//! ```
//!
//! ## API Coverage
//!
//! - `GET /library/sections` - All library sections
//! - `GET /library/sections/{id}` - A single section
//! - `GET /library/sections/{id}/refresh` - Scan a section for new files
//! - `GET /hubs/home/recentlyAdded` - Recently added movies or tvshow items
//! - `PUT /library/metadata/{id}/refresh` - Refresh the metadata of one item
//!
//! ## Error Handling
//!
//! Every operation returns `Result<_, PlexError>` and shows a spinner while
//! the request is in flight. Transport failures and
//! responses with a status of 300 or above are logged with [`warning!`] right
//! here, at the client boundary, and handed back to the caller as `Err`, so a
//! caller can decide to carry on with the next item without printing again.
//! Logged messages carry the request path only; the token never reaches the
//! console.

pub mod library;
pub mod metadata;

use async_trait::async_trait;
use reqwest::{Client, Method, Response, Url, header::ACCEPT};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{
    config::PlexConfig,
    types::{Item, MediaType, Section, SectionDetail},
    utils, warning,
};

pub const TOKEN_PARAM: &str = "X-Plex-Token";

#[derive(Debug, Error)]
pub enum PlexError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server answered with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
    #[error("library section {0} not found")]
    NotFound(String),
}

/// Typed operations offered by a Plex server.
///
/// The management layer only depends on this trait; [`PlexClient`] is the
/// production implementation.
#[async_trait]
pub trait PlexApi: Send + Sync {
    /// Lists all library sections in server order.
    async fn sections(&self) -> Result<Vec<Section>, PlexError>;

    /// Resolves one section by id.
    async fn section(&self, id: &str) -> Result<SectionDetail, PlexError>;

    /// Starts a scan of a section for new items.
    async fn scan_section(&self, id: &str) -> Result<(), PlexError>;

    /// Fetches the first 100 recently added items of the given media type.
    async fn recently_added(&self, media_type: MediaType) -> Result<Vec<Item>, PlexError>;

    /// Triggers a metadata refresh of a single item.
    async fn refresh_metadata(&self, id: &str) -> Result<(), PlexError>;
}

/// reqwest-backed client bound to one server address and token.
#[derive(Debug, Clone)]
pub struct PlexClient {
    base_url: String,
    token: String,
    http: Client,
}

impl PlexClient {
    pub fn new(config: &PlexConfig) -> Self {
        Self {
            base_url: config.base_url(),
            token: config.token.clone(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the full request url from path `segments`, appending `query` and the token.
    ///
    /// Each segment is percent-encoded on its own, so an id containing `/` or
    /// `?` stays a single path segment and cannot reach another endpoint or
    /// add query pairs.
    pub fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, PlexError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| PlexError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| PlexError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())))
            .append_pair(TOKEN_PARAM, &self.token);
        Ok(url)
    }

    /// Sends a request behind a spinner and logs any failure before handing it back.
    ///
    /// The spinner is cleared before anything is printed.
    pub(crate) async fn send(
        &self,
        method: Method,
        url: Url,
        message: &str,
    ) -> Result<Response, PlexError> {
        let path = url.path().to_string();

        let pb = utils::spinner(message);
        let result = self.execute(method.clone(), url).await;
        pb.finish_and_clear();

        if let Err(e) = &result {
            warning!("{} {} failed: {}", method, path, e);
        }
        result
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        message: &str,
    ) -> Result<T, PlexError> {
        let path = url.path().to_string();
        let response = self.send(Method::GET, url, message).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| PlexError::Transport(e.without_url()))?;

        serde_json::from_slice::<T>(&body).map_err(|e| {
            warning!("GET {} returned an unexpected body: {}", path, e);
            PlexError::Decode(e)
        })
    }

    async fn execute(&self, method: Method, url: Url) -> Result<Response, PlexError> {
        let response = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| PlexError::Transport(e.without_url()))?;

        let status = response.status();
        if status.as_u16() >= 300 {
            let body = response.text().await.unwrap_or_default();
            return Err(PlexError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl PlexApi for PlexClient {
    async fn sections(&self) -> Result<Vec<Section>, PlexError> {
        library::get_sections(self).await
    }

    async fn section(&self, id: &str) -> Result<SectionDetail, PlexError> {
        library::get_section(self, id).await
    }

    async fn scan_section(&self, id: &str) -> Result<(), PlexError> {
        library::scan_section(self, id).await
    }

    async fn recently_added(&self, media_type: MediaType) -> Result<Vec<Item>, PlexError> {
        metadata::get_recently_added(self, media_type).await
    }

    async fn refresh_metadata(&self, id: &str) -> Result<(), PlexError> {
        metadata::refresh_item(self, id).await
    }
}
