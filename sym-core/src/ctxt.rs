//! Configuration threaded through every simplifier entry point.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// The default number of rewrite iterations a single [`simplify`](crate::simplify()) call may
/// perform.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// A cooperative cancellation flag.
///
/// Clones share the same flag, so one clone can be handed to the thread running a simplification
/// while another is kept to cancel it. The simplifier checks the flag before every pass and every
/// rewrite attempt.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// Creates a new, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of every operation observing this token.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns true if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// A context to use when simplifying an expression.
#[derive(Debug, Clone)]
pub struct Ctxt {
    /// The maximum number of rewrite iterations (fixed-point passes plus rule firings) a single
    /// call may perform before failing with
    /// [`QuotaExceeded`](crate::error::QuotaExceeded).
    pub max_iterations: usize,

    /// The token to observe for cancellation, if any.
    pub cancellation: Option<CancellationToken>,
}

impl Default for Ctxt {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            cancellation: None,
        }
    }
}

impl Ctxt {
    /// Sets the iteration quota.
    pub fn with_quota(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the cancellation token to observe.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Returns true if the context's cancellation token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .map(CancellationToken::is_cancelled)
            .unwrap_or(false)
    }
}
