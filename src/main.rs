use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Datelike, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use showreel::config::Config;
use showreel::{CatalogResult, Genre, Show, StreamingService, User};

fn release_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid demo release date")
}

fn print_show_table(shows: &[Arc<Show>]) {
    for show in shows {
        println!(
            "  {:<22} {:<12} {}",
            show.name,
            show.genre,
            show.release_date.year()
        );
    }
}

fn print_recommendation(label: &str, result: CatalogResult<Arc<Show>>) {
    match result {
        Ok(show) => println!("{label}: {}", show.name),
        Err(e) => println!("{label}: ERROR: {e}"),
    }
}

fn expect_failure<T>(label: &str, result: CatalogResult<T>) {
    match result {
        Ok(_) => println!("{label}: unexpectedly succeeded"),
        Err(e) => println!("{label}: ERROR: {e}"),
    }
}

fn main() -> Result<()> {
    let config = Config::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let mut rng = match config.recommendation_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // === Population ===
    let avengers = Show::movie("Avengers: Endgame", Genre::Animation, release_date(2001, 3, 20));
    let top_gun = Show::movie("Top Gun: Maverick", Genre::Documentary, release_date(2018, 5, 20));
    let whiplash = Show::episode("Whiplash Saxifrage", Genre::Drama, release_date(2022, 3, 20));
    let bur_clover = Show::episode("Little Bur-clover", Genre::Drama, release_date(2020, 3, 20));
    let soot_lichen = Show::episode("Notaris' Soot Lichen", Genre::Adventure, release_date(2020, 3, 20));
    let rattlebox = Show::episode("Thicket Rattlebox", Genre::Animation, release_date(2020, 3, 20));
    let stranger_things = Show::series(
        "Stranger things",
        Genre::Horror,
        release_date(2010, 3, 20),
        vec![soot_lichen.clone(), rattlebox.clone()],
    );
    let frozen = Show::series(
        "Frozen II",
        Genre::Animation,
        release_date(2022, 3, 20),
        vec![whiplash.clone(), bur_clover.clone(), soot_lichen.clone()],
    );

    // One show handle can sit in several catalogs at once
    let netflix = StreamingService::new(
        "Netflix",
        vec![whiplash.clone(), avengers.clone(), stranger_things.clone()],
    );
    let megogo = StreamingService::new(
        "Megogo",
        vec![
            whiplash.clone(),
            bur_clover.clone(),
            soot_lichen.clone(),
            rattlebox.clone(),
            avengers.clone(),
            top_gun.clone(),
            stranger_things.clone(),
        ],
    );
    let _amazon_prime = StreamingService::new(
        "Amazon Prime",
        vec![
            whiplash.clone(),
            bur_clover.clone(),
            rattlebox.clone(),
            stranger_things.clone(),
        ],
    );

    let mut john = User::new();

    // === Usage ===
    let megogo_subscription = john.subscribe(&megogo)?;
    let _netflix_subscription = john.subscribe(&netflix)?;

    for _ in 0..4 {
        megogo_subscription.watch("Avengers: Endgame")?;
    }
    for _ in 0..2 {
        megogo_subscription.watch("Notaris' Soot Lichen")?;
    }
    for _ in 0..3 {
        megogo_subscription.watch("Little Bur-clover")?;
    }
    for _ in 0..7 {
        megogo_subscription.watch("Top Gun: Maverick")?;
    }

    // A show added mid-run starts at zero views like any other
    megogo.add_show(frozen.clone())?;
    for _ in 0..3 {
        megogo_subscription.watch("Frozen II")?;
    }

    println!("\nCurrent views");
    let counts: BTreeMap<String, u64> = megogo.view_counts().into_iter().collect();
    println!("{}", serde_json::to_string_pretty(&counts)?);

    println!("\nMost viewed shows of the Animation genre");
    print_show_table(&megogo.most_viewed_of_genre(Genre::Animation)?);

    println!("\nMost viewed shows of 2020");
    print_show_table(&megogo.most_viewed_of_year(2020)?);

    println!();
    print_recommendation(
        "Recommended show of the Animation genre",
        megogo_subscription.recommendation_by_genre(Genre::Animation, &mut rng),
    );
    // Legitimately empty when nothing in the catalog was released this year
    print_recommendation(
        "Recommended show of the current year",
        megogo_subscription.recommendation_trending(&mut rng),
    );

    // === Validation ===
    println!("\nValidation");
    expect_failure("subscribing again", john.subscribe(&netflix));
    expect_failure(
        "watching an unknown show",
        megogo_subscription.watch("Something"),
    );
    expect_failure("adding the same show again", megogo.add_show(frozen));
    expect_failure("ranking an invalid year", megogo.most_viewed_of_year(2045));

    Ok(())
}
