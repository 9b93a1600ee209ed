use std::fmt;

use serde::{Deserialize, Serialize};

/// A window achieving the global minimum distance.
///
/// Carries no distance of its own: all matches held together share the
/// distance tracked by the [`SearchState`] that produced them.
///
/// Ordering is series-major, then offset, which is the order in which the
/// search discovers matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Match {
    /// Index of the corpus member containing the window.
    pub series: usize,
    /// Start of the window within that member.
    pub offset: usize,
}

impl Match {
    pub fn new(series: usize, offset: usize) -> Self {
        Self { series, offset }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "T Position Index: {:>12}", self.series)?;
        writeln!(f, "S Starting Position Index: {}", self.offset)
    }
}

/// Outcome of scanning one candidate sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowMatch {
    /// Best distance known after the scan. Equal to the threshold passed in
    /// when no window in this candidate beat or tied it.
    pub distance: f64,
    /// Window starts achieving `distance`, ascending. Empty when this
    /// candidate lost to the threshold.
    pub offsets: Vec<usize>,
}

/// Running state of one corpus search: the global best distance and every
/// match currently tied at it.
///
/// Every held match has a distance exactly equal to `best_distance`. A state
/// belongs to a single `search` call; starting a new search means starting
/// a new state.
#[derive(Debug, Clone)]
pub struct SearchState {
    best_distance: f64,
    matches: Vec<Match>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    /// Create an empty state. The threshold starts at `+inf` so the first
    /// completed distance always seeds it.
    pub fn new() -> Self {
        Self {
            best_distance: f64::INFINITY,
            matches: Vec::new(),
        }
    }

    /// Current global best distance (`+inf` before anything was accepted).
    #[inline]
    pub fn best_distance(&self) -> f64 {
        self.best_distance
    }

    /// Matches currently tied at the best distance.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Fold the scan of corpus member `series` into this state.
    ///
    /// A strictly lower distance makes every earlier match stale; otherwise
    /// the offsets tied the existing best and are appended.
    pub fn absorb(&mut self, series: usize, window: WindowMatch) {
        debug_assert!(window.distance <= self.best_distance);
        if window.distance < self.best_distance {
            tracing::debug!(
                series,
                previous = self.best_distance,
                best = window.distance,
                discarded = self.matches.len(),
                "global best improved"
            );
            self.matches.clear();
            self.best_distance = window.distance;
        }
        self.matches
            .extend(window.offsets.into_iter().map(|offset| Match::new(series, offset)));
    }

    /// Merge the state of a later, disjoint part of the corpus into this one.
    ///
    /// `other` must cover series with higher indices than every match held
    /// here, which keeps the merged matches in series order.
    pub fn merge(&mut self, other: SearchState) {
        debug_assert!(match (self.matches.last(), other.matches.first()) {
            (Some(a), Some(b)) => a.series < b.series,
            _ => true,
        });
        if other.best_distance < self.best_distance {
            *self = other;
        } else if other.best_distance == self.best_distance {
            self.matches.extend(other.matches);
        }
    }

    /// Finish the search.
    pub fn into_result(self) -> SearchResult {
        let distance = if self.matches.is_empty() {
            None
        } else {
            Some(self.best_distance)
        };
        SearchResult {
            distance,
            matches: self.matches,
        }
    }
}

/// Result of a corpus search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Distance shared by every match; `None` when there are no matches.
    pub distance: Option<f64>,
    /// All windows at the minimum distance, ordered by series then offset.
    pub matches: Vec<Match>,
}

impl SearchResult {
    pub fn empty() -> Self {
        Self {
            distance: None,
            matches: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }
}
