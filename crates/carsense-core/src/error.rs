use thiserror::Error;

/// Errors surfaced by the core layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The registry listing itself could not be fetched. The caller
    /// decides whether to show a degraded widget or nothing; no retry is
    /// performed here.
    #[error("entity resolution failed: {0}")]
    Registry(#[from] carsense_api::Error),
}
