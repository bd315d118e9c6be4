use std::sync::Arc;

use chrono::Datelike;
use rand::Rng;

use crate::error::CatalogResult;
use crate::services::recommendation;

use super::{Genre, Show, StreamingService};

/// A user's binding to one streaming service.
///
/// Watch events and recommendation requests go through the subscription;
/// the view counts they touch live on the shared service, so every
/// subscriber to a service sees the same tally.
#[derive(Debug, Clone)]
pub struct Subscription {
    service: StreamingService,
}

impl Subscription {
    pub(crate) fn new(service: StreamingService) -> Self {
        Self { service }
    }

    /// The service this subscription is bound to
    pub fn service(&self) -> &StreamingService {
        &self.service
    }

    /// Records one watch of the named show on the service
    pub fn watch(&self, show_name: &str) -> CatalogResult<()> {
        self.service.record_view(show_name)
    }

    /// Recommends one show from the current year's most viewed
    pub fn recommendation_trending(&self, rng: &mut impl Rng) -> CatalogResult<Arc<Show>> {
        let clock = self.service.clock();
        let current_year = clock.now().year();
        let trending = self.service.most_viewed_of_year(current_year)?;
        recommendation::pick(trending, clock.as_ref(), rng)
    }

    /// Recommends one show from a genre's most viewed
    pub fn recommendation_by_genre(
        &self,
        genre: Genre,
        rng: &mut impl Rng,
    ) -> CatalogResult<Arc<Show>> {
        let clock = self.service.clock();
        let candidates = self.service.most_viewed_of_genre(genre)?;
        recommendation::pick(candidates, clock.as_ref(), rng)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::clock::{Clock, FixedClock};
    use crate::error::CatalogError;

    use super::*;

    fn fixed_clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        ))
    }

    fn released(year: i32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(year, 3, 20, 0, 0, 0).unwrap()
    }

    fn megogo() -> StreamingService {
        StreamingService::with_clock(
            "Megogo",
            vec![
                Show::movie("Avengers: Endgame", Genre::Animation, released(2001)),
                Show::episode("Thicket Rattlebox", Genre::Animation, released(2020)),
            ],
            fixed_clock(),
        )
    }

    #[test]
    fn test_watch_increments_by_one_each_time() {
        let subscription = Subscription::new(megogo());
        for _ in 0..4 {
            subscription.watch("Avengers: Endgame").unwrap();
        }
        assert_eq!(subscription.service().views_of("Avengers: Endgame"), Some(4));
        assert_eq!(subscription.service().views_of("Thicket Rattlebox"), Some(0));
    }

    #[test]
    fn test_watch_unknown_show_fails_and_changes_nothing() {
        let subscription = Subscription::new(megogo());
        subscription.watch("Avengers: Endgame").unwrap();

        let err = subscription.watch("Something").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownShow(name) if name == "Something"));

        let counts = subscription.service().view_counts();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["Avengers: Endgame"], 1);
        assert_eq!(counts["Thicket Rattlebox"], 0);
    }

    #[test]
    fn test_genre_ranking_after_watches() {
        let service = megogo();
        let subscription = Subscription::new(service.clone());
        // A x2, B x5 => [B, A]
        subscription.watch("Avengers: Endgame").unwrap();
        subscription.watch("Avengers: Endgame").unwrap();
        for _ in 0..5 {
            subscription.watch("Thicket Rattlebox").unwrap();
        }

        let ranked = service.most_viewed_of_genre(Genre::Animation).unwrap();
        let names: Vec<_> = ranked.iter().map(|show| show.name.as_str()).collect();
        assert_eq!(names, vec!["Thicket Rattlebox", "Avengers: Endgame"]);
    }

    #[test]
    fn test_recommendation_by_genre_comes_from_the_filter() {
        let subscription = Subscription::new(megogo());
        let mut rng = StdRng::seed_from_u64(3);
        let picked = subscription
            .recommendation_by_genre(Genre::Animation, &mut rng)
            .unwrap();
        assert!(picked.name == "Avengers: Endgame" || picked.name == "Thicket Rattlebox");
    }

    #[test]
    fn test_recommendation_by_genre_propagates_empty_filter() {
        let subscription = Subscription::new(megogo());
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            subscription.recommendation_by_genre(Genre::Reality, &mut rng),
            Err(CatalogError::EmptyFilter)
        ));
    }

    #[test]
    fn test_trending_uses_the_clocks_current_year() {
        // Clock pinned to 2024; only show released in 2024
        let service = StreamingService::with_clock(
            "Netflix",
            vec![Show::movie("Fresh Release", Genre::Drama, released(2024))],
            fixed_clock(),
        );
        let subscription = Subscription::new(service);
        let mut rng = StdRng::seed_from_u64(9);
        let picked = subscription.recommendation_trending(&mut rng).unwrap();
        assert_eq!(picked.name, "Fresh Release");
    }

    #[test]
    fn test_trending_with_no_current_year_release_is_empty_filter() {
        let subscription = Subscription::new(megogo());
        let mut rng = StdRng::seed_from_u64(9);
        assert!(matches!(
            subscription.recommendation_trending(&mut rng),
            Err(CatalogError::EmptyFilter)
        ));
    }

    #[test]
    fn test_same_seed_gives_a_repeatable_recommendation() {
        let subscription = Subscription::new(megogo());

        let mut first_rng = StdRng::seed_from_u64(11);
        let first = subscription
            .recommendation_by_genre(Genre::Animation, &mut first_rng)
            .unwrap();

        let mut second_rng = StdRng::seed_from_u64(11);
        let second = subscription
            .recommendation_by_genre(Genre::Animation, &mut second_rng)
            .unwrap();

        assert_eq!(first.name, second.name);
    }
}
