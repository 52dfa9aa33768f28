use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation requested from outside the session, typically by a process
/// signal handler.
///
/// The engine checks the flag before every blocking read and cancels through
/// its normal path when it is set.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// The shared atomic, for handing to a signal registration.
    #[must_use]
    pub fn as_atomic(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.0)
    }
}
