//! # Three-phase timed traffic machine.
//!
//! [`TrafficMachine`] models the traffic light cycle and the pedestrian-request
//! shortcut. The machine itself is timer-free: it is a transition/notice table
//! plus the current phase tag. Dwell durations live in
//! [`Timing`](crate::config::Timing) and the actual timers are armed by the
//! runtime actor, which feeds expiries back in via [`on_timer`].
//!
//! ```text
//!      green ──(dwell elapsed | PedestrianRequest)──► yellow
//!        ▲ entry: Notice::Green                         │
//!        │                                       (dwell elapsed)
//!        └──(dwell elapsed)── red ◄─────────────────────┘
//!                             entry: Notice::Red
//! ```
//!
//! ## Rules
//! - The cycle is endless: `green → yellow → red → green → …`.
//! - `PedestrianRequest` is only heard in `green`; in `yellow`/`red` it is
//!   dropped silently — never queued, never deferred.
//! - Entry notices are produced on **every** entry, including the initial
//!   entry into `green` when the machine starts.
//!
//! [`on_timer`]: TrafficMachine::on_timer

/// Phase of the traffic light.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrafficPhase {
    /// Traffic flows (initial phase).
    Green,
    /// Traffic is being stopped.
    Yellow,
    /// Traffic is stopped; the crossing is safe.
    Red,
}

impl TrafficPhase {
    /// Returns a short stable label for logs and rendering collaborators.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficPhase::Green => "green",
            TrafficPhase::Yellow => "yellow",
            TrafficPhase::Red => "red",
        }
    }

    /// Notice emitted when this phase is entered, if any.
    ///
    /// Only `green` and `red` announce themselves; `yellow` is a silent
    /// transitional phase. The notice is the mechanism that keeps the
    /// pedestrian signal consistent, not an observability hook.
    pub fn entry_notice(&self) -> Option<TrafficNotice> {
        match self {
            TrafficPhase::Green => Some(TrafficNotice::Green),
            TrafficPhase::Yellow => None,
            TrafficPhase::Red => Some(TrafficNotice::Red),
        }
    }

    /// Phase reached when the current phase's dwell timer expires.
    #[inline]
    pub fn after_dwell(&self) -> TrafficPhase {
        match self {
            TrafficPhase::Green => TrafficPhase::Yellow,
            TrafficPhase::Yellow => TrafficPhase::Red,
            TrafficPhase::Red => TrafficPhase::Green,
        }
    }
}

/// External events accepted by the traffic machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrafficEvent {
    /// A pedestrian asked to cross. Short-circuits the `green` dwell timer.
    PedestrianRequest,
}

/// Entry notification emitted by the traffic machine.
///
/// Consumed only by the coordinator, which translates it into a
/// [`CrossingEvent`](crate::signals::CrossingEvent) for the pedestrian machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrafficNotice {
    /// The light has turned green: crossing is no longer safe.
    Green,
    /// The light has turned red: crossing is safe.
    Red,
}

/// One applied phase change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Phase that was exited.
    pub from: TrafficPhase,
    /// Phase that was entered.
    pub to: TrafficPhase,
    /// Entry notice of the new phase, if it has one.
    pub notice: Option<TrafficNotice>,
}

/// Running instance of the traffic machine.
///
/// ### Rules
/// - Starts in [`TrafficPhase::Green`]; the initial entry notice is exposed
///   via [`TrafficPhase::entry_notice`] and must be applied by the owner.
/// - [`on_timer`](Self::on_timer) always transitions (the cycle never stalls).
/// - [`on_event`](Self::on_event) transitions only from `green`; everywhere
///   else it returns `None` and leaves the phase (and the owner's pending
///   timer) untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrafficMachine {
    phase: TrafficPhase,
}

impl Default for TrafficPhase {
    fn default() -> Self {
        TrafficPhase::Green
    }
}

impl TrafficMachine {
    /// Creates a machine in the initial `green` phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently active phase.
    #[inline]
    pub fn phase(&self) -> TrafficPhase {
        self.phase
    }

    /// Applies the expiry of the current phase's dwell timer.
    pub fn on_timer(&mut self) -> Transition {
        self.enter(self.phase.after_dwell())
    }

    /// Applies one external event; returns the transition it caused, if any.
    ///
    /// `PedestrianRequest` in `green` moves to `yellow` immediately (the owner
    /// must cancel the green dwell timer). In any other phase the request is
    /// dropped with no deferred effect.
    pub fn on_event(&mut self, event: TrafficEvent) -> Option<Transition> {
        match (self.phase, event) {
            (TrafficPhase::Green, TrafficEvent::PedestrianRequest) => {
                Some(self.enter(TrafficPhase::Yellow))
            }
            _ => None,
        }
    }

    fn enter(&mut self, to: TrafficPhase) -> Transition {
        let from = self.phase;
        self.phase = to;
        Transition {
            from,
            to,
            notice: to.entry_notice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_green() {
        assert_eq!(TrafficMachine::new().phase(), TrafficPhase::Green);
    }

    #[test]
    fn test_natural_cycle() {
        let mut m = TrafficMachine::new();

        let t = m.on_timer();
        assert_eq!((t.from, t.to), (TrafficPhase::Green, TrafficPhase::Yellow));
        assert_eq!(t.notice, None);

        let t = m.on_timer();
        assert_eq!((t.from, t.to), (TrafficPhase::Yellow, TrafficPhase::Red));
        assert_eq!(t.notice, Some(TrafficNotice::Red));

        let t = m.on_timer();
        assert_eq!((t.from, t.to), (TrafficPhase::Red, TrafficPhase::Green));
        assert_eq!(t.notice, Some(TrafficNotice::Green));

        assert_eq!(m.phase(), TrafficPhase::Green);
    }

    #[test]
    fn test_request_short_circuits_green() {
        let mut m = TrafficMachine::new();
        let t = m.on_event(TrafficEvent::PedestrianRequest).unwrap();
        assert_eq!((t.from, t.to), (TrafficPhase::Green, TrafficPhase::Yellow));
        assert_eq!(t.notice, None);
    }

    #[test]
    fn test_request_dropped_outside_green() {
        let mut m = TrafficMachine::new();
        m.on_timer(); // yellow
        assert!(m.on_event(TrafficEvent::PedestrianRequest).is_none());
        assert_eq!(m.phase(), TrafficPhase::Yellow);

        m.on_timer(); // red
        assert!(m.on_event(TrafficEvent::PedestrianRequest).is_none());
        assert_eq!(m.phase(), TrafficPhase::Red);
    }

    #[test]
    fn test_entry_notices() {
        assert_eq!(
            TrafficPhase::Green.entry_notice(),
            Some(TrafficNotice::Green)
        );
        assert_eq!(TrafficPhase::Yellow.entry_notice(), None);
        assert_eq!(TrafficPhase::Red.entry_notice(), Some(TrafficNotice::Red));
    }

    #[test]
    fn test_labels() {
        assert_eq!(TrafficPhase::Green.as_str(), "green");
        assert_eq!(TrafficPhase::Yellow.as_str(), "yellow");
        assert_eq!(TrafficPhase::Red.as_str(), "red");
    }
}
