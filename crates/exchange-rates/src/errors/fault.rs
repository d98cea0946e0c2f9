//! Fault classification for exchange rate errors.

/// How an [`ExchangeError`](super::ExchangeError) should be interpreted at
/// the boundary layer.
///
/// The core never retries on its own; this classification lets the boundary
/// map error kinds to its own response semantics (request-rejected vs.
/// not-found vs. dependency-down) without matching on individual variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaultClass {
    /// The caller sent a bad request. Retrying the same request cannot help.
    CallerError,

    /// A named resource (provider) does not exist.
    NotFound,

    /// An upstream dependency failed. The caller may retry later.
    Dependency,

    /// Unexpected failure, surfaced unchanged for diagnostics.
    Internal,
}
