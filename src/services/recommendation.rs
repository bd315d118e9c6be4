use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::clock::Clock;
use crate::error::{CatalogError, CatalogResult};
use crate::models::Show;

/// Picks one show uniformly at random from a ranked candidate list.
///
/// Candidates are first re-sorted by descending duration, which overrides
/// whatever view-count order they arrived in. Since the pick is uniform
/// over the whole list, neither ordering actually influences the result;
/// the re-sort is kept because it is the selection rule this library
/// promises, quirks included.
///
/// Callers reach this through a ranking query that already rejects empty
/// filters, so the empty-input error is unreachable from the public API.
pub fn pick(
    mut candidates: Vec<Arc<Show>>,
    clock: &dyn Clock,
    rng: &mut impl Rng,
) -> CatalogResult<Arc<Show>> {
    candidates.sort_by(|a, b| b.duration(clock).cmp(&a.duration(clock)));
    candidates
        .choose(rng)
        .cloned()
        .ok_or(CatalogError::EmptyFilter)
}
