use thiserror::Error;

/// Catalog-level errors
///
/// All variants are synchronous, recoverable-by-caller failures raised at
/// the point of detection; callers decide how to report them.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("already subscribed to streaming service: {0}")]
    AlreadySubscribed(String),

    #[error("no such show: {0}")]
    UnknownShow(String),

    #[error("show is already on the streaming service: {0}")]
    DuplicateShow(String),

    #[error("invalid year: {0} (must be after 1940 and not in the future)")]
    InvalidYear(i32),

    #[error("no shows match the current filter")]
    EmptyFilter,
}

pub type CatalogResult<T> = Result<T, CatalogError>;
