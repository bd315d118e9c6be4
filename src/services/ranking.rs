use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{CatalogError, CatalogResult};
use crate::models::Show;

/// Maximum number of entries a ranking query returns
pub const TOP_N: usize = 10;

/// Ranks an already-filtered show list by view count, descending, keeping
/// at most [`TOP_N`] entries.
///
/// The sort is stable: shows with equal counts keep the order they arrived
/// in, which is their catalog order. An empty input is an error so callers
/// never have to distinguish "no match" from "matched nothing popular".
pub fn most_viewed(
    views: &HashMap<String, u64>,
    filtered: Vec<Arc<Show>>,
) -> CatalogResult<Vec<Arc<Show>>> {
    if filtered.is_empty() {
        return Err(CatalogError::EmptyFilter);
    }

    let mut ranked: Vec<(Arc<Show>, u64)> = filtered
        .into_iter()
        .map(|show| {
            let count = views.get(&show.name).copied().unwrap_or(0);
            (show, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_N);

    Ok(ranked.into_iter().map(|(show, _)| show).collect())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::models::Genre;

    use super::*;

    fn show(name: &str) -> Arc<Show> {
        Show::movie(
            name,
            Genre::Comedy,
            Utc.with_ymd_and_hms(2020, 3, 20, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_empty_filter_is_an_error() {
        let views = HashMap::new();
        assert!(matches!(
            most_viewed(&views, vec![]),
            Err(CatalogError::EmptyFilter)
        ));
    }

    #[test]
    fn test_sorts_descending_by_views() {
        let views = HashMap::from([
            ("A".to_string(), 2),
            ("B".to_string(), 5),
            ("C".to_string(), 0),
        ]);
        let ranked = most_viewed(&views, vec![show("A"), show("B"), show("C")]).unwrap();
        let names: Vec<_> = ranked.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let views = HashMap::from([
            ("A".to_string(), 3),
            ("B".to_string(), 3),
            ("C".to_string(), 3),
        ]);
        let ranked = most_viewed(&views, vec![show("A"), show("B"), show("C")]).unwrap();
        let names: Vec<_> = ranked.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_truncates_to_top_n() {
        let mut views = HashMap::new();
        let mut filtered = Vec::new();
        for i in 0..15 {
            let name = format!("Show {i}");
            views.insert(name.clone(), i);
            filtered.push(show(&name));
        }
        let ranked = most_viewed(&views, filtered).unwrap();
        assert_eq!(ranked.len(), TOP_N);
        assert_eq!(ranked[0].name, "Show 14");
    }

    #[test]
    fn test_missing_view_entry_counts_as_zero() {
        let views = HashMap::from([("A".to_string(), 1)]);
        let ranked = most_viewed(&views, vec![show("Untallied"), show("A")]).unwrap();
        assert_eq!(ranked[0].name, "A");
        assert_eq!(ranked[1].name, "Untallied");
    }
}
