use thiserror::Error;

/// Errors produced by rate snapshots and currency conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FxError {
    /// The requested currency has no usable rate in the current
    /// snapshot, or the source-side rate is zero. Surfaced instead of
    /// letting the cross-rate division produce NaN or infinity.
    #[error("Exchange rate unavailable: {0}")]
    RateUnavailable(String),

    /// No rate snapshot has been installed yet.
    #[error("Exchange rates not available")]
    SnapshotUnavailable,

    #[error("Invalid currency code: {0}")]
    InvalidCurrencyCode(String),

    /// The snapshot cell lock was poisoned.
    #[error("Cache error: {0}")]
    CacheError(String),
}
