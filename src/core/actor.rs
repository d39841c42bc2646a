//! # IntersectionActor: the single-consumer intersection loop.
//!
//! One tokio task owns both signal machines and processes one event at a time
//! to completion: a transition, its entry notice, the cross-machine routing,
//! and the snapshot publish all happen before the next event is looked at.
//! There are no locks because there is nothing to share — the machines live
//! inside the loop.
//!
//! ## Event flow
//! ```text
//! loop {
//!   select! {
//!     cancelled            → break
//!     sleep_until(deadline)→ traffic.on_timer() ─► apply(transition)
//!     cmd = rx.recv()      → traffic.on_event() ─► apply(transition) | ignore
//!   }
//! }
//!
//! apply(transition):
//!   ├─► route entry notice → pedestrian.on_event(...)   (synchronous)
//!   ├─► publish PhaseChanged (+ CrossingChanged)        (bus, fire-and-forget)
//!   ├─► publish one combined snapshot                   (watch)
//!   └─► deadline = now + dwell(new phase)
//! ```
//!
//! ## Rules
//! - **Stale timers are unreachable**: the pending sleep is re-derived from
//!   `deadline` on every iteration, and every transition unconditionally
//!   replaces `deadline`. Cancellation is synchronous with the state exit,
//!   never eventually-consistent.
//! - **Ignored events leave the deadline untouched**: a pedestrian request in
//!   `yellow`/`red` neither delays nor hastens the scheduled expiry.
//! - **Snapshots are atomic**: traffic phase and pedestrian signal are
//!   published as one value after the routing has been applied, so an observer
//!   can never see `walk` paired with a non-`red` phase.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

use crate::config::Timing;
use crate::core::intersection::{IntersectionEvent, IntersectionSnapshot};
use crate::events::{Bus, Event, EventKind};
use crate::signals::{
    CrossingEvent, PedestrianMachine, TrafficEvent, TrafficMachine, TrafficNotice, Transition,
};

/// Command delivered into the loop by the [`Intersection`](crate::Intersection) handle.
///
/// The `done` half is signalled after the event and all resulting routing have
/// been applied, which is what lets `Intersection::send` resolve only once the
/// snapshot is consistent again.
pub(crate) struct Command {
    pub(crate) event: IntersectionEvent,
    pub(crate) done: oneshot::Sender<()>,
}

/// Single-consumer loop owning the traffic and pedestrian machines.
pub(crate) struct IntersectionActor {
    timing: Timing,
    bus: Bus,
    traffic: TrafficMachine,
    pedestrian: PedestrianMachine,
    snapshot_tx: watch::Sender<IntersectionSnapshot>,
    rx: mpsc::UnboundedReceiver<Command>,
}

impl IntersectionActor {
    /// Creates a new actor with both machines in their initial states.
    pub(crate) fn new(
        timing: Timing,
        bus: Bus,
        snapshot_tx: watch::Sender<IntersectionSnapshot>,
        rx: mpsc::UnboundedReceiver<Command>,
    ) -> Self {
        Self {
            timing,
            bus,
            traffic: TrafficMachine::new(),
            pedestrian: PedestrianMachine::new(),
            snapshot_tx,
            rx,
        }
    }

    /// Runs the loop until cancellation or until the owning handle is dropped.
    ///
    /// ### Startup
    /// The initial entry into `green` runs its entry notice like any other
    /// entry (a no-op for a fresh pedestrian machine), then `Started` and the
    /// initial snapshot are published and the green dwell timer is armed.
    ///
    /// ### Exit conditions
    /// - the cancellation token fires (explicit `stop`), or
    /// - the command channel closes (the handle was dropped).
    pub(crate) async fn run(mut self, cancel: CancellationToken) {
        if let Some(notice) = self.traffic.phase().entry_notice() {
            self.route_notice(notice);
        }
        self.bus.publish(
            Event::new(EventKind::Started)
                .with_phase(self.traffic.phase())
                .with_crossing(self.pedestrian.signal()),
        );
        self.publish_snapshot();

        let mut deadline = Instant::now() + self.timing.dwell(self.traffic.phase());
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = time::sleep_until(deadline) => {
                    let transition = self.traffic.on_timer();
                    self.apply(transition);
                    deadline = Instant::now() + self.timing.dwell(transition.to);
                }
                cmd = self.rx.recv() => match cmd {
                    Some(Command { event, done }) => {
                        if let Some(next) = self.handle_event(event) {
                            deadline = next;
                        }
                        let _ = done.send(());
                    }
                    None => break,
                },
            }
        }

        self.bus.publish(Event::new(EventKind::Stopped));
    }

    /// Forwards one external event to the traffic machine.
    ///
    /// Returns the replacement deadline when the event caused a transition;
    /// `None` means the event was ignored and the pending timer stands.
    fn handle_event(&mut self, event: IntersectionEvent) -> Option<Instant> {
        match event {
            IntersectionEvent::PedestrianRequest => {
                let received_in = self.traffic.phase();
                match self.traffic.on_event(TrafficEvent::PedestrianRequest) {
                    Some(transition) => {
                        self.bus.publish(
                            Event::new(EventKind::RequestAccepted).with_phase(received_in),
                        );
                        self.apply(transition);
                        Some(Instant::now() + self.timing.dwell(transition.to))
                    }
                    None => {
                        self.bus.publish(
                            Event::new(EventKind::RequestIgnored).with_phase(received_in),
                        );
                        None
                    }
                }
            }
        }
    }

    /// Applies one traffic transition to completion.
    ///
    /// Routing happens before anything becomes observable: the pedestrian
    /// machine is updated first, then the bus events go out, then the single
    /// combined snapshot.
    fn apply(&mut self, transition: Transition) {
        let crossing_changed = match transition.notice {
            Some(notice) => self.route_notice(notice),
            None => false,
        };

        self.bus
            .publish(Event::new(EventKind::PhaseChanged).with_phase(transition.to));
        if crossing_changed {
            self.bus.publish(
                Event::new(EventKind::CrossingChanged).with_crossing(self.pedestrian.signal()),
            );
        }
        self.publish_snapshot();
    }

    /// Translates a traffic entry notice into a pedestrian event.
    ///
    /// This mapping is the whole coordination protocol, and it lives here —
    /// in the mediator — so neither machine knows the other exists.
    fn route_notice(&mut self, notice: TrafficNotice) -> bool {
        let event = match notice {
            TrafficNotice::Green => CrossingEvent::UnsafeToWalk,
            TrafficNotice::Red => CrossingEvent::SafeToWalk,
        };
        self.pedestrian.on_event(event)
    }

    fn publish_snapshot(&self) {
        let next = IntersectionSnapshot {
            traffic: self.traffic.phase(),
            pedestrian: self.pedestrian.signal(),
        };
        self.snapshot_tx.send_if_modified(|current| {
            if *current != next {
                *current = next;
                true
            } else {
                false
            }
        });
    }
}
