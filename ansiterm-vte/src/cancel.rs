use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative stop signal shared between a parser and its owner.
///
/// Clones observe the same flag. The parser only looks at it when a new
/// chunk is handed to [`Parser::advance`](crate::Parser::advance), never
/// in the middle of one.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the parser stops consuming input.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Withdraw a previous [`cancel`](Self::cancel) so parsing may resume.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Outcome of a call to [`Parser::advance`](crate::Parser::advance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every byte of the chunk was consumed.
    Completed,
    /// The cancel token was set; no byte of the chunk was consumed.
    Cancelled,
}
