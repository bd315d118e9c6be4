use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::Datelike;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::error::{CatalogError, CatalogResult};
use crate::services::ranking;

use super::{Genre, Show};

/// Years this far back or further are rejected by year queries (exclusive bound)
const MIN_YEAR: i32 = 1940;

/// Inner state shared between every clone of a service handle
#[derive(Debug)]
struct ServiceState {
    shows: Vec<Arc<Show>>,
    views: HashMap<String, u64>,
}

/// A streaming service: a named catalog of shows and a per-show view tally.
///
/// The handle is cheap to clone and every clone shares one catalog and
/// tally, so a subscription and the catalog owner always see the same
/// counts. Catalog and tally only ever grow; there is no removal.
#[derive(Clone)]
pub struct StreamingService {
    id: Uuid,
    name: String,
    clock: Arc<dyn Clock>,
    state: Arc<RwLock<ServiceState>>,
}

impl StreamingService {
    /// Creates a service with an initial catalog; every show starts at zero views
    pub fn new(name: impl Into<String>, initial_shows: Vec<Arc<Show>>) -> Self {
        Self::with_clock(name, initial_shows, Arc::new(SystemClock))
    }

    /// As [`StreamingService::new`], with an injected clock for deterministic tests
    pub fn with_clock(
        name: impl Into<String>,
        initial_shows: Vec<Arc<Show>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let views = initial_shows
            .iter()
            .map(|show| (show.name.clone(), 0))
            .collect();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            clock,
            state: Arc::new(RwLock::new(ServiceState {
                shows: initial_shows,
                views,
            })),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    /// Adds a show to the catalog and seeds its view count with zero.
    ///
    /// Duplicate detection is by handle: re-adding the same `Arc<Show>`
    /// fails, while a separately constructed show with identical fields is
    /// accepted as a new catalog entry.
    pub fn add_show(&self, show: Arc<Show>) -> CatalogResult<()> {
        let mut state = self.state.write();
        if state.shows.iter().any(|existing| Arc::ptr_eq(existing, &show)) {
            return Err(CatalogError::DuplicateShow(show.name.clone()));
        }
        tracing::debug!(service = %self.name, show = %show.name, "show added to catalog");
        state.views.insert(show.name.clone(), 0);
        state.shows.push(show);
        Ok(())
    }

    /// The at-most-ten most viewed shows released in `year`.
    ///
    /// `year` must be after 1940 and no later than the current calendar
    /// year; an empty filter result is an error, never an empty list.
    pub fn most_viewed_of_year(&self, year: i32) -> CatalogResult<Vec<Arc<Show>>> {
        let current_year = self.clock.now().year();
        if year <= MIN_YEAR || year > current_year {
            return Err(CatalogError::InvalidYear(year));
        }
        let state = self.state.read();
        let filtered: Vec<Arc<Show>> = state
            .shows
            .iter()
            .filter(|show| show.release_date.year() == year)
            .cloned()
            .collect();
        ranking::most_viewed(&state.views, filtered)
    }

    /// The at-most-ten most viewed shows of a genre
    pub fn most_viewed_of_genre(&self, genre: Genre) -> CatalogResult<Vec<Arc<Show>>> {
        let state = self.state.read();
        let filtered: Vec<Arc<Show>> = state
            .shows
            .iter()
            .filter(|show| show.genre == genre)
            .cloned()
            .collect();
        ranking::most_viewed(&state.views, filtered)
    }

    /// Snapshot of the per-show view tally
    pub fn view_counts(&self) -> HashMap<String, u64> {
        self.state.read().views.clone()
    }

    /// Current view count for a single show, if catalogued
    pub fn views_of(&self, show_name: &str) -> Option<u64> {
        self.state.read().views.get(show_name).copied()
    }

    /// Snapshot of the catalog, in insertion order
    pub fn catalog(&self) -> Vec<Arc<Show>> {
        self.state.read().shows.clone()
    }

    /// Increments a show's view count. The single mutator of the tally,
    /// reached through [`Subscription::watch`](super::Subscription::watch).
    pub(crate) fn record_view(&self, show_name: &str) -> CatalogResult<()> {
        let mut state = self.state.write();
        match state.views.get_mut(show_name) {
            Some(count) => {
                *count += 1;
                tracing::debug!(service = %self.name, show = show_name, views = *count, "view recorded");
                Ok(())
            }
            None => Err(CatalogError::UnknownShow(show_name.to_string())),
        }
    }
}

/// Handle identity: two handles are equal exactly when they share the same
/// underlying service state.
impl PartialEq for StreamingService {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl Eq for StreamingService {}

impl fmt::Debug for StreamingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("StreamingService")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("shows", &state.shows.len())
            .finish()
    }
}
