//! Per-query instrumentation hooks.

use std::fmt;
use std::time::Duration;

/// Façade operations reported to a [`QueryObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Canonicalize,
    IsDescendantOf,
    Derive,
    Synonyms,
    Ancestors,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Canonicalize => "canonicalize",
            Self::IsDescendantOf => "is_descendant_of",
            Self::Derive => "derive",
            Self::Synonyms => "synonyms",
            Self::Ancestors => "ancestors",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives the latency of every engine call.
pub trait QueryObserver: Send + Sync {
    fn record(&self, operation: Operation, elapsed: Duration);
}

/// Discards every observation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl QueryObserver for NoopObserver {
    fn record(&self, _operation: Operation, _elapsed: Duration) {}
}

/// Emits one `debug` event per query.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl QueryObserver for TracingObserver {
    fn record(&self, operation: Operation, elapsed: Duration) {
        let elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        tracing::debug!(operation = operation.as_str(), elapsed_us, "query completed");
    }
}
