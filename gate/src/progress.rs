//! In-flight activity signal bracketing each pipeline call.
//!
//! DESIGN
//! ======
//! The indicator is a reference count rather than a flag, so overlapping calls
//! keep it busy until the last one finishes. [`ProgressGuard`] pairs every
//! `start` with exactly one `done`, including when a call future is dropped.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use std::sync::atomic::{AtomicUsize, Ordering};

/// Start/done notifications for the global progress affordance.
pub trait ProgressIndicator: Send + Sync {
    fn start(&self);
    fn done(&self);
}

/// Counts calls currently in flight.
#[derive(Debug, Default)]
pub struct ProgressCounter {
    in_flight: AtomicUsize,
}

impl ProgressCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight() > 0
    }
}

impl ProgressIndicator for ProgressCounter {
    fn start(&self) {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
    }

    fn done(&self) {
        // Saturate at zero; a stray `done` must not wrap the counter.
        let _ = self
            .in_flight
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| Some(n.saturating_sub(1)));
    }
}

/// Signals `start` on creation and `done` exactly once on drop.
#[must_use = "dropping the guard immediately releases the progress indicator"]
pub struct ProgressGuard<'a> {
    indicator: &'a dyn ProgressIndicator,
}

impl<'a> ProgressGuard<'a> {
    pub fn begin(indicator: &'a dyn ProgressIndicator) -> Self {
        indicator.start();
        Self { indicator }
    }
}

impl Drop for ProgressGuard<'_> {
    fn drop(&mut self) {
        self.indicator.done();
    }
}
