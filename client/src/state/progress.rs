//! Reactive progress state behind the top-of-page loading bar.
//!
//! DESIGN
//! ======
//! The pipeline only knows `start`/`done`. [`SignalProgress`] turns those into
//! updates of a shared `RwSignal<ProgressState>` so the bar re-renders as the
//! in-flight count changes.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use gate::ProgressIndicator;
use leptos::prelude::*;

/// Count of pipeline calls currently in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressState {
    pub in_flight: usize,
}

impl ProgressState {
    pub fn begin(&mut self) {
        self.in_flight += 1;
    }

    pub fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    #[must_use]
    pub fn is_busy(self) -> bool {
        self.in_flight > 0
    }
}

/// [`ProgressIndicator`] that writes through to a reactive signal.
#[derive(Clone, Copy, Debug)]
pub struct SignalProgress(pub RwSignal<ProgressState>);

impl ProgressIndicator for SignalProgress {
    fn start(&self) {
        // A disposed signal means the app is tearing down; nothing to show.
        let _ = self.0.try_update(ProgressState::begin);
    }

    fn done(&self) {
        let _ = self.0.try_update(ProgressState::finish);
    }
}
