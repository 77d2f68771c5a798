use reqwest::Method;

use crate::{
    plex::{PlexClient, PlexError},
    types::{Item, MediaType, RecentlyAddedResponse},
};

/// Number of items requested from the recently-added hub.
pub const RECENTLY_ADDED_PAGE_SIZE: u32 = 100;

/// Retrieves recently added items from the home hub.
///
/// `MediaType::Show` returns a mix of shows, seasons and episodes,
/// `MediaType::Movie` returns movies. Only the first page of
/// [`RECENTLY_ADDED_PAGE_SIZE`] items is requested.
///
/// # Example
///
/// ```
/// let items = get_recently_added(&client, MediaType::Show).await?;
/// ```
pub async fn get_recently_added(
    client: &PlexClient,
    media_type: MediaType,
) -> Result<Vec<Item>, PlexError> {
    let url = client.endpoint(
        &["hubs", "home", "recentlyAdded"],
        &[
            ("type", media_type.code().to_string()),
            ("X-Plex-Container-Start", "0".to_string()),
            ("X-Plex-Container-Size", RECENTLY_ADDED_PAGE_SIZE.to_string()),
        ],
    )?;

    let res = client
        .get_json::<RecentlyAddedResponse>(url, "Fetching recently added items...")
        .await?;
    Ok(res.media_container.metadata)
}

/// Triggers a metadata refresh for one item.
///
/// Any status of 300 or above is returned as [`PlexError::Rejected`] carrying
/// the response body as detail.
pub async fn refresh_item(client: &PlexClient, id: &str) -> Result<(), PlexError> {
    let url = client.endpoint(&["library", "metadata", id, "refresh"], &[])?;
    client
        .send(Method::PUT, url, &format!("Refreshing item {}...", id))
        .await?;
    Ok(())
}
