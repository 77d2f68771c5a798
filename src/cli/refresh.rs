use crate::{
    error, info,
    management::{self, ConsoleReporter, RefreshMode},
    plex::PlexApi,
};

/// Refreshes every show that recently got a new show, season or episode.
pub async fn refresh_recent_tvshows<A: PlexApi + ?Sized>(api: &A) {
    refresh_recent(api, RefreshMode::TvshowRoots).await
}

/// Refreshes every recently added season and episode on its own.
pub async fn refresh_tvshows<A: PlexApi + ?Sized>(api: &A) {
    refresh_recent(api, RefreshMode::EpisodesAndSeasons).await
}

/// Refreshes every recently added movie.
pub async fn refresh_movies<A: PlexApi + ?Sized>(api: &A) {
    refresh_recent(api, RefreshMode::Movies).await
}

async fn refresh_recent<A: PlexApi + ?Sized>(api: &A, mode: RefreshMode) {
    let items = match api.recently_added(mode.media_type()).await {
        Ok(items) => items,
        Err(e) => error!("Cannot fetch recently added items. Err: {}", e),
    };

    let targets = match management::aggregate(&items, mode) {
        Ok(targets) => targets,
        Err(e) => error!("Unexpected recently added item. Err: {}", e),
    };

    if targets.is_empty() {
        info!("No recently added {} found.", mode.describe());
    }

    management::refresh_all(api, &targets, &mut ConsoleReporter::default()).await;
}
