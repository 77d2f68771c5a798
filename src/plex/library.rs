use reqwest::Method;

use crate::{
    plex::{PlexClient, PlexError},
    types::{Section, SectionDetail, SectionResponse, SectionsResponse},
};

/// Retrieves all library sections from the server.
///
/// Sections are returned in the order the server sends them; sorting for
/// display is left to the caller.
///
/// # Returns
///
/// - `Ok(Vec<Section>)` - Sections of the `MediaContainer.Directory` list
/// - `Err(PlexError)` - Transport error, non-success status or malformed body
///
/// # Example
///
/// ```
/// let sections = get_sections(&client).await?;
/// println!("{} libraries", sections.len());
/// ```
pub async fn get_sections(client: &PlexClient) -> Result<Vec<Section>, PlexError> {
    let url = client.endpoint(&["library", "sections"], &[])?;
    let res = client
        .get_json::<SectionsResponse>(url, "Fetching libraries...")
        .await?;
    Ok(res.media_container.directory)
}

/// Resolves a single section by id.
///
/// The section title is read from `MediaContainer.title1`. A response without
/// a title is reported as [`PlexError::NotFound`].
pub async fn get_section(client: &PlexClient, id: &str) -> Result<SectionDetail, PlexError> {
    let url = client.endpoint(&["library", "sections", id], &[])?;
    let res = client
        .get_json::<SectionResponse>(url, &format!("Resolving library {}...", id))
        .await?;

    match res.media_container.title1 {
        Some(title) => Ok(SectionDetail {
            id: id.to_string(),
            title,
        }),
        None => Err(PlexError::NotFound(id.to_string())),
    }
}

/// Asks the server to scan a section for new or changed files.
///
/// The server only acknowledges the request; the scan itself runs in the
/// background on the server.
pub async fn scan_section(client: &PlexClient, id: &str) -> Result<(), PlexError> {
    let url = client.endpoint(&["library", "sections", id, "refresh"], &[])?;
    client
        .send(Method::GET, url, &format!("Scanning library {}...", id))
        .await?;
    Ok(())
}
