//! Movie-to-movie similarity scoring and the recommendation ranking built
//! on top of it.

use std::cmp::Ordering;

use super::item::Movie;
use super::store::{StoreError, StoreResult};
use super::user::{RatingEntry, User};

/// A movie scored against some ranking target.
#[derive(Debug, Clone, Copy)]
pub struct SimilarMovie<'a> {
    pub movie: &'a Movie,
    pub score: f32,
}

/// Recommendations derived from a user's highest-rated movie.
#[derive(Debug)]
pub struct Recommendation<'a> {
    /// Title of the rating entry the ranking was seeded with.
    pub based_on: &'a str,
    pub matches: Vec<SimilarMovie<'a>>,
}

/// Weighted heuristic closeness of two movies.
///
/// Sharing a genre is worth 3.0 and sharing a director 2.0. The remaining
/// terms reward close ratings (up to 5.0) and close release years (up to
/// 1.0, saturating at a fifty-year gap). A movie scored against itself
/// reaches the maximum of 11.0.
pub fn similarity(a: &Movie, b: &Movie) -> f32 {
    let mut score = 0.0;
    if a.genre == b.genre {
        score += 3.0;
    }
    if a.director == b.director {
        score += 2.0;
    }
    score += (10.0 - (a.rating - b.rating).abs()) * 0.5;
    let year_gap = (a.year - b.year).abs() as f32 / 10.0;
    score += (5.0 - year_gap.min(5.0)) * 0.2;
    score
}

/// Rank every other movie against the one titled `title`, best first.
///
/// Movies carrying the target's title are excluded from the ranking, the
/// duplicates included. Ties keep storage order and at most `limit` entries
/// come back.
pub fn find_similar<'a>(
    movies: &'a [Movie],
    title: &str,
    limit: usize,
) -> StoreResult<Vec<SimilarMovie<'a>>> {
    let target = movies
        .iter()
        .find(|m| m.title == title)
        .ok_or_else(|| StoreError::MovieNotFound(title.to_string()))?;

    let mut scored: Vec<SimilarMovie<'a>> = movies
        .iter()
        .filter(|m| m.title != title)
        .map(|m| SimilarMovie {
            movie: m,
            score: similarity(target, m),
        })
        .collect();

    // Stable sort: equal scores stay in storage order.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(limit);
    Ok(scored)
}

/// Recommend movies for `user`, seeded by their highest-rated title.
///
/// The scan keeps the first strictly-greater entry, so equal top ratings
/// break toward the oldest entry and zero-valued ratings never qualify.
/// `Ok(None)` means the user has no qualifying rating yet.
pub fn recommend<'a>(
    movies: &'a [Movie],
    user: &'a User,
    limit: usize,
) -> StoreResult<Option<Recommendation<'a>>> {
    let mut best: Option<&RatingEntry> = None;
    for entry in &user.ratings {
        if entry.value > best.map_or(0.0, |b| b.value) {
            best = Some(entry);
        }
    }

    let best = match best {
        Some(entry) => entry,
        None => return Ok(None),
    };

    let matches = find_similar(movies, &best.title, limit)?;
    Ok(Some(Recommendation {
        based_on: &best.title,
        matches,
    }))
}
