use std::collections::HashSet;

use thiserror::Error;

use crate::types::{Item, ItemKind, MediaType, RefreshTarget};

/// How a recently-added feed is turned into refresh targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    /// One target per distinct show owning an episode, season or show item.
    TvshowRoots,
    /// Every episode and season item, in feed order, duplicates included.
    EpisodesAndSeasons,
    /// Every movie item, in feed order, duplicates included.
    Movies,
}

impl RefreshMode {
    /// Feed the mode has to be fed with.
    pub fn media_type(self) -> MediaType {
        match self {
            RefreshMode::Movies => MediaType::Movie,
            RefreshMode::TvshowRoots | RefreshMode::EpisodesAndSeasons => MediaType::Show,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            RefreshMode::TvshowRoots => "tvshows",
            RefreshMode::EpisodesAndSeasons => "seasons or episodes",
            RefreshMode::Movies => "movies",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("{kind} item {} has no {field}", .rating_key.as_deref().unwrap_or("<unknown>"))]
    MissingField {
        kind: &'static str,
        rating_key: Option<String>,
        field: &'static str,
    },
}

/// Groups a recently-added feed into refresh targets.
///
/// Items whose type is not handled by `mode` are skipped. In
/// [`RefreshMode::TvshowRoots`] every item is resolved to the show owning it
/// (episode to grandparent, season to parent, show to itself) and each show is
/// kept once, at the position and with the title of its first occurrence.
///
/// # Errors
///
/// Returns [`AggregateError::MissingField`] for the first kept item that lacks
/// an id or title the mode needs.
///
/// # Example
///
/// ```
/// let targets = aggregate(&items, RefreshMode::TvshowRoots)?;
/// for target in targets {
///     println!("{} {}", target.id, target.label);
/// }
/// ```
pub fn aggregate(items: &[Item], mode: RefreshMode) -> Result<Vec<RefreshTarget>, AggregateError> {
    match mode {
        RefreshMode::TvshowRoots => tvshow_roots(items),
        RefreshMode::EpisodesAndSeasons => items
            .iter()
            .filter(|item| matches!(item.kind(), ItemKind::Episode | ItemKind::Season))
            .map(episode_or_season_target)
            .collect(),
        RefreshMode::Movies => items
            .iter()
            .filter(|item| item.kind() == ItemKind::Movie)
            .map(movie_target)
            .collect(),
    }
}

fn tvshow_roots(items: &[Item]) -> Result<Vec<RefreshTarget>, AggregateError> {
    let mut seen_ids = HashSet::new();
    let mut targets = Vec::new();

    for item in items {
        let (id, title) = match item.kind() {
            ItemKind::Episode => (
                require(item, &item.grandparent_rating_key, "grandparentRatingKey")?,
                require(item, &item.grandparent_title, "grandparentTitle")?,
            ),
            ItemKind::Season => (
                require(item, &item.parent_rating_key, "parentRatingKey")?,
                require(item, &item.parent_title, "parentTitle")?,
            ),
            ItemKind::Show => (
                require(item, &item.rating_key, "ratingKey")?,
                require(item, &item.title, "title")?,
            ),
            ItemKind::Movie | ItemKind::Other => continue,
        };

        if seen_ids.insert(id) {
            targets.push(RefreshTarget::new(id, title));
        }
    }

    Ok(targets)
}

fn episode_or_season_target(item: &Item) -> Result<RefreshTarget, AggregateError> {
    let id = require(item, &item.rating_key, "ratingKey")?;

    let label = if item.kind() == ItemKind::Episode {
        format!(
            "{show}, season {season}, episode {episode}",
            show = require(item, &item.grandparent_title, "grandparentTitle")?,
            season = require_number(item, item.parent_index, "parentIndex")?,
            episode = require_number(item, item.index, "index")?,
        )
    } else {
        format!(
            "{show}, season {season}",
            show = require(item, &item.parent_title, "parentTitle")?,
            season = require_number(item, item.index, "index")?,
        )
    };

    Ok(RefreshTarget::new(id, label))
}

fn movie_target(item: &Item) -> Result<RefreshTarget, AggregateError> {
    let id = require(item, &item.rating_key, "ratingKey")?;
    let title = require(item, &item.title, "title")?;

    let label = match item.year {
        Some(year) => format!("{}, {}", year, title),
        None => title.to_string(),
    };

    Ok(RefreshTarget::new(id, label))
}

fn require<'a>(
    item: &Item,
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, AggregateError> {
    value.as_deref().ok_or_else(|| missing(item, field))
}

fn require_number(item: &Item, value: Option<u32>, field: &'static str) -> Result<u32, AggregateError> {
    value.ok_or_else(|| missing(item, field))
}

fn missing(item: &Item, field: &'static str) -> AggregateError {
    AggregateError::MissingField {
        kind: item.kind().as_str(),
        rating_key: item.rating_key.clone(),
        field,
    }
}
