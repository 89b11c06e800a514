use std::collections::TryReserveError;

/// Errors surfaced by the top-level `scan` and `compact` entry points.
///
/// There are no recoverable mid-algorithm states: a call either completes
/// every tree level or aborts wholesale, and a failed call can simply be
/// re-invoked since the engine keeps no state between calls.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The padded working buffer could not be allocated. Fatal for this
    /// call; no partial result is returned and nothing is retried.
    #[error("failed to allocate a working buffer of {needed} elements")]
    Allocation {
        needed: usize,
        source: TryReserveError,
    },
}
