use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;

use super::Genre;

/// A watchable catalog entry: a movie, a single episode, or a series
/// bundling episodes.
///
/// Shows are immutable once constructed and shared via `Arc`, so one show
/// can sit in several service catalogs without ownership transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    /// Entity handle; duplicate detection compares handles, not field values
    pub id: Uuid,
    pub name: String,
    pub genre: Genre,
    pub release_date: DateTime<Utc>,
    pub kind: ShowKind,
}

/// Show variant with the data specific to each kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ShowKind {
    Movie,
    Episode,
    /// The ordered episodes this series bundles; episodes are shows too
    Series { episodes: Vec<Arc<Show>> },
}

impl Show {
    /// Creates a movie
    pub fn movie(name: impl Into<String>, genre: Genre, release_date: DateTime<Utc>) -> Arc<Self> {
        Self::with_kind(name, genre, release_date, ShowKind::Movie)
    }

    /// Creates a standalone episode
    pub fn episode(
        name: impl Into<String>,
        genre: Genre,
        release_date: DateTime<Utc>,
    ) -> Arc<Self> {
        Self::with_kind(name, genre, release_date, ShowKind::Episode)
    }

    /// Creates a series bundling an ordered list of episodes
    pub fn series(
        name: impl Into<String>,
        genre: Genre,
        release_date: DateTime<Utc>,
        episodes: Vec<Arc<Show>>,
    ) -> Arc<Self> {
        Self::with_kind(name, genre, release_date, ShowKind::Series { episodes })
    }

    fn with_kind(
        name: impl Into<String>,
        genre: Genre,
        release_date: DateTime<Utc>,
        kind: ShowKind,
    ) -> Arc<Self> {
        Arc::new(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            genre,
            release_date,
            kind,
        })
    }

    /// Duration sort key: the clock's current epoch milliseconds minus the
    /// milliseconds-within-the-second component of the release date.
    ///
    /// Not an elapsed-time measurement; only the relative order of the
    /// values is ever used.
    pub fn duration(&self, clock: &dyn Clock) -> i64 {
        let release_subsec_ms = i64::from(self.release_date.timestamp_subsec_millis());
        clock.now().timestamp_millis() - release_subsec_ms
    }
}
