//! # Pedestrian walk / don't-walk machine.
//!
//! [`PedestrianMachine`] models the pedestrian indicator: two states, two
//! events, no timers and no context beyond the current tag.
//!
//! ```text
//! dont-walk ──SafeToWalk──► walk
//!      ▲                      │
//!      └─────UnsafeToWalk─────┘
//! ```
//!
//! ## Rules
//! - Exactly one [`CrossingSignal`] is active at a time.
//! - An event whose target state is already active is a **no-op**, not a fault.
//! - The machine is purely reactive: it only moves when [`on_event`] is called.
//!
//! [`on_event`]: PedestrianMachine::on_event

/// State of the pedestrian indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrossingSignal {
    /// Crossing is not allowed (initial state).
    DontWalk,
    /// Crossing is allowed.
    Walk,
}

impl CrossingSignal {
    /// Returns a short stable label for logs and rendering collaborators.
    pub fn as_str(&self) -> &'static str {
        match self {
            CrossingSignal::DontWalk => "dont-walk",
            CrossingSignal::Walk => "walk",
        }
    }
}

/// Events accepted by the pedestrian machine.
///
/// Internal to the intersection: the coordinator derives these from traffic
/// entry notices, nothing outside the crate sends them directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrossingEvent {
    /// Traffic has stopped; the indicator may switch to `walk`.
    SafeToWalk,
    /// Traffic is about to flow; the indicator must show `dont-walk`.
    UnsafeToWalk,
}

/// Running instance of the pedestrian machine.
///
/// ### Rules
/// - Starts in [`CrossingSignal::DontWalk`].
/// - [`on_event`](Self::on_event) is total: every event is either applied or
///   ignored, it never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct PedestrianMachine {
    signal: CrossingSignal,
}

impl Default for CrossingSignal {
    fn default() -> Self {
        CrossingSignal::DontWalk
    }
}

impl PedestrianMachine {
    /// Creates a machine in the initial `dont-walk` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently active signal.
    #[inline]
    pub fn signal(&self) -> CrossingSignal {
        self.signal
    }

    /// Applies one event; returns `true` if the signal changed.
    ///
    /// An event that targets the already-active state leaves the machine
    /// untouched and returns `false`.
    pub fn on_event(&mut self, event: CrossingEvent) -> bool {
        let next = match (self.signal, event) {
            (CrossingSignal::DontWalk, CrossingEvent::SafeToWalk) => CrossingSignal::Walk,
            (CrossingSignal::Walk, CrossingEvent::UnsafeToWalk) => CrossingSignal::DontWalk,
            _ => return false,
        };
        self.signal = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_dont_walk() {
        assert_eq!(PedestrianMachine::new().signal(), CrossingSignal::DontWalk);
    }

    #[test]
    fn test_safe_then_unsafe_round_trip() {
        let mut m = PedestrianMachine::new();

        assert!(m.on_event(CrossingEvent::SafeToWalk));
        assert_eq!(m.signal(), CrossingSignal::Walk);

        assert!(m.on_event(CrossingEvent::UnsafeToWalk));
        assert_eq!(m.signal(), CrossingSignal::DontWalk);
    }

    #[test]
    fn test_event_for_active_state_is_noop() {
        let mut m = PedestrianMachine::new();

        assert!(!m.on_event(CrossingEvent::UnsafeToWalk));
        assert_eq!(m.signal(), CrossingSignal::DontWalk);

        m.on_event(CrossingEvent::SafeToWalk);
        assert!(!m.on_event(CrossingEvent::SafeToWalk));
        assert_eq!(m.signal(), CrossingSignal::Walk);
    }

    #[test]
    fn test_labels() {
        assert_eq!(CrossingSignal::DontWalk.as_str(), "dont-walk");
        assert_eq!(CrossingSignal::Walk.as_str(), "walk");
    }
}
