//! Vote kinds, aggregate result types, and the tie-inclusive ranking rule.
//!
//! Statistics endpoints do not return a fixed top-N. They return every
//! entity tied for the highest count, which [`top_ties`] computes from a
//! result set already ordered by count descending.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Votes
// ---------------------------------------------------------------------------

/// The two mutually exclusive vote states a user can hold on a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteKind {
    Like,
    Dislike,
}

impl VoteKind {
    /// The `(is_like, is_unlike)` column pair stored for this vote.
    ///
    /// Exactly one of the two is `true`.
    pub fn flags(self) -> (bool, bool) {
        match self {
            Self::Like => (true, false),
            Self::Dislike => (false, true),
        }
    }
}

/// Result of applying a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteStatus {
    /// A row was inserted or its flags flipped.
    Success,
    /// The stored vote already matched; nothing was written.
    Unchanged,
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// A movie with a view or like count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieTally {
    pub id: DbId,
    pub title: String,
    pub count: i64,
}

/// A genre with a view or like count summed over its movies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreTally {
    pub id: DbId,
    pub name: String,
    pub count: i64,
}

/// Movies and genres tied for first place on one metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaderboard {
    pub movies: Vec<MovieTally>,
    pub genres: Vec<GenreTally>,
}

/// One entry in a user's voting history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VotedMovie {
    pub movie_id: DbId,
    pub title: String,
    pub is_like: bool,
    pub is_unlike: bool,
    pub voted_at: Timestamp,
}

/// Anything carrying an aggregate count.
pub trait Tally {
    fn count(&self) -> i64;
}

impl Tally for MovieTally {
    fn count(&self) -> i64 {
        self.count
    }
}

impl Tally for GenreTally {
    fn count(&self) -> i64 {
        self.count
    }
}

/// Keep every row tied with the first row's count.
///
/// `rows` must be ordered by count descending. The first row fixes the
/// maximum; iteration stops at the first strictly lower count. When the
/// maximum is zero every zero-count row is kept.
pub fn top_ties<T: Tally>(rows: Vec<T>) -> Vec<T> {
    let mut rows = rows.into_iter();
    let Some(first) = rows.next() else {
        return Vec::new();
    };

    let max = first.count();
    let mut top = vec![first];
    top.extend(rows.take_while(|row| row.count() >= max));
    top
}
