use crate::{
    plex::{PlexApi, PlexError},
    types::{Section, SectionDetail},
    utils,
};

/// Result of a scan request for one library id.
#[derive(Debug)]
pub enum ScanOutcome {
    /// The section exists and the server accepted the scan.
    Started { section: SectionDetail },
    /// The section exists but the scan request failed.
    Failed {
        section: SectionDetail,
        error: PlexError,
    },
    /// The id could not be resolved; carries every section sorted by key.
    UnknownSection { id: String, sections: Vec<Section> },
}

/// Lists all sections sorted by numeric key.
pub async fn list_sections<A>(api: &A) -> Result<Vec<Section>, PlexError>
where
    A: PlexApi + ?Sized,
{
    let mut sections = api.sections().await?;
    utils::sort_sections(&mut sections);
    Ok(sections)
}

/// Scans the section `id`, or lists every section if `id` cannot be resolved.
///
/// The section is resolved first so that an unknown id never reaches the scan
/// endpoint. Any resolution failure leads to the fallback listing.
///
/// # Errors
///
/// Only fails when the fallback listing itself cannot be fetched.
pub async fn scan_or_list<A>(api: &A, id: &str) -> Result<ScanOutcome, PlexError>
where
    A: PlexApi + ?Sized,
{
    let section = match api.section(id).await {
        Ok(section) => section,
        Err(_) => {
            return Ok(ScanOutcome::UnknownSection {
                id: id.to_string(),
                sections: list_sections(api).await?,
            });
        }
    };

    match api.scan_section(id).await {
        Ok(()) => Ok(ScanOutcome::Started { section }),
        Err(error) => Ok(ScanOutcome::Failed { section, error }),
    }
}
