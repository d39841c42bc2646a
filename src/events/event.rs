//! # Runtime events emitted by the intersection loop.
//!
//! The [`EventKind`] enum classifies event types across three categories:
//! - **Lifecycle events**: loop start and stop
//! - **Phase events**: traffic and pedestrian signal changes
//! - **Request events**: accepted / ignored pedestrian requests
//!
//! The [`Event`] struct carries additional metadata such as timestamps and the
//! signal values involved.
//!
//! These events are observability only. The cross-machine coordination protocol
//! (traffic entry notices → pedestrian events) is routed synchronously inside
//! the intersection loop and never travels over the bus, so a slow or absent
//! subscriber can never desynchronize the two signals.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the exact order when events are
//! observed out of order.
//!
//! ## Example
//! ```rust
//! use crosslight::{Event, EventKind, TrafficPhase};
//!
//! let ev = Event::new(EventKind::PhaseChanged).with_phase(TrafficPhase::Yellow);
//!
//! assert_eq!(ev.kind, EventKind::PhaseChanged);
//! assert_eq!(ev.phase, Some(TrafficPhase::Yellow));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

use crate::signals::{CrossingSignal, TrafficPhase};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of runtime events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Lifecycle events ===
    /// The intersection loop started; both machines are running.
    ///
    /// Sets:
    /// - `phase`: initial traffic phase (`green`)
    /// - `crossing`: initial pedestrian signal (`dont-walk`)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    Started,

    /// The intersection loop stopped; both machines are gone.
    ///
    /// Sets:
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    Stopped,

    // === Phase events ===
    /// The traffic machine entered a new phase.
    ///
    /// Sets:
    /// - `phase`: the phase that was entered
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    PhaseChanged,

    /// The pedestrian machine switched its signal.
    ///
    /// Sets:
    /// - `crossing`: the signal that became active
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    CrossingChanged,

    // === Request events ===
    /// A pedestrian request arrived in `green` and short-circuited the dwell
    /// timer. A `PhaseChanged` event for `yellow` follows with a higher `seq`.
    ///
    /// Sets:
    /// - `phase`: phase the request was received in (`green`)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    RequestAccepted,

    /// A pedestrian request arrived outside `green` and was dropped. Requests
    /// are never queued; the pending dwell timer is unaffected.
    ///
    /// Sets:
    /// - `phase`: phase the request was received in (`yellow` or `red`)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    RequestIgnored,
}

/// Runtime event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Traffic phase involved, if applicable.
    pub phase: Option<TrafficPhase>,
    /// Pedestrian signal involved, if applicable.
    pub crossing: Option<CrossingSignal>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next
    /// sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            phase: None,
            crossing: None,
        }
    }

    /// Attaches a traffic phase.
    #[inline]
    pub fn with_phase(mut self, phase: TrafficPhase) -> Self {
        self.phase = Some(phase);
        self
    }

    /// Attaches a pedestrian signal.
    #[inline]
    pub fn with_crossing(mut self, crossing: CrossingSignal) -> Self {
        self.crossing = Some(crossing);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let a = Event::new(EventKind::Started);
        let b = Event::new(EventKind::Stopped);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_builders_attach_metadata() {
        let ev = Event::new(EventKind::CrossingChanged).with_crossing(CrossingSignal::Walk);
        assert_eq!(ev.crossing, Some(CrossingSignal::Walk));
        assert_eq!(ev.phase, None);
    }
}
