use std::fmt::Display;

use serde::{Deserialize, Serialize};

mod show;
mod streaming_service;
mod subscription;
mod user;

pub use show::{Show, ShowKind};
pub use streaming_service::StreamingService;
pub use subscription::Subscription;
pub use user::User;

/// Genres a show can be catalogued under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Drama,
    Comedy,
    Adventure,
    Documentary,
    Children,
    Reality,
    Horror,
    Animation,
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
