//! In-memory streaming-service catalog.
//!
//! Users subscribe to services, watch shows to bump per-service view
//! counters, and ask for recommendations filtered by year or genre. All
//! state lives in memory for the lifetime of the process; the `showreel`
//! binary is a console harness over this API.

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CatalogError, CatalogResult};
pub use models::{Genre, Show, ShowKind, StreamingService, Subscription, User};
