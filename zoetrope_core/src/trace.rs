// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observability hooks for the carousel.
//!
//! The controller does not log; it reports [`TraceEvent`]s to a
//! [`CarouselTrace`] sink the embedder supplies at mount. The unit sink `()`
//! discards everything and costs nothing; [`TraceRecorder`] keeps events in
//! order for tests and debugging overlays.

use alloc::vec::Vec;

/// Why the current slide changed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NavCause {
    /// Arrow, preview, or keyboard navigation.
    User,
    /// An auto-play tick.
    Timer,
    /// An explicit jump, via a dot or `go_to`.
    Jump,
    /// The dataset was replaced and the position reset.
    DataReplaced,
}

/// One observable controller transition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TraceEvent {
    /// The carousel was mounted with this many slides.
    Mounted {
        /// Dataset length at mount.
        slides: usize,
    },
    /// The current slide changed.
    PositionChanged {
        /// Index before the change.
        from: usize,
        /// Index after the change.
        to: usize,
        /// What drove the change.
        cause: NavCause,
    },
    /// The auto-play ticker was started (or restarted).
    AutoPlayStarted,
    /// The auto-play ticker was stopped and the intent cleared.
    AutoPlayStopped,
    /// The ticker was suppressed while keeping the intent to resume.
    AutoPlayPaused,
    /// The ticker was re-armed after a pause.
    AutoPlayResumed,
    /// The dataset was replaced with this many slides.
    DataReplaced {
        /// New dataset length.
        slides: usize,
    },
    /// The carousel was destroyed and its container emptied.
    Destroyed,
}

/// Receives controller trace events.
///
/// The single method defaults to a no-op, so a sink only as elaborate as the
/// embedder needs is fine. `()` is the canonical discard-everything sink.
pub trait CarouselTrace {
    /// Called for every observable controller transition.
    fn event(&mut self, event: TraceEvent) {
        _ = event;
    }
}

impl CarouselTrace for () {}

/// A sink that records every event in order.
#[derive(Clone, Debug, Default)]
pub struct TraceRecorder {
    events: Vec<TraceEvent>,
}

impl TraceRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// The recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Forgets all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl CarouselTrace for TraceRecorder {
    fn event(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_events_in_order() {
        let mut recorder = TraceRecorder::new();
        recorder.event(TraceEvent::Mounted { slides: 3 });
        recorder.event(TraceEvent::PositionChanged {
            from: 0,
            to: 1,
            cause: NavCause::Timer,
        });

        assert_eq!(
            recorder.events(),
            [
                TraceEvent::Mounted { slides: 3 },
                TraceEvent::PositionChanged {
                    from: 0,
                    to: 1,
                    cause: NavCause::Timer,
                },
            ]
        );

        recorder.clear();
        assert!(recorder.events().is_empty());
    }
}
