//! # Intersection: owner and mediator of the two signal machines.
//!
//! The [`Intersection`] owns the event bus, the snapshot channel, and the
//! single loop task driving both machines. It is a pure router: all meaningful
//! state lives in the machines inside the loop, the handle itself only holds
//! channels.
//!
//! ## High-level architecture
//! ```text
//! UI / collaborator                Intersection (handle)         loop task
//!   request_crossing() ──► send ──► mpsc command ─────────────► traffic.on_event
//!   snapshot() / watch() ◄──────── watch::Receiver ◄─────────── publish_snapshot
//!   subscribe() / attach() ◄────── Bus (broadcast) ◄─────────── publish(Event)
//!   stop() ─────────────────────── CancellationToken ─────────► break + join
//! ```
//!
//! ## Consistency
//! `send` resolves only after the event and any resulting cross-machine
//! routing have been applied, so a caller that reads [`Intersection::snapshot`]
//! after `send` returns always sees a consistent view. The snapshot combines
//! both signals in one value; at every observable instant
//! `pedestrian == walk ⇔ traffic == red`.
//!
//! ## Example
//! ```rust
//! use crosslight::{Config, CrossingSignal, Intersection, TrafficPhase};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let ix = Intersection::start(Config::default());
//!
//!     let snap = ix.snapshot();
//!     assert_eq!(snap.traffic, TrafficPhase::Green);
//!     assert_eq!(snap.pedestrian, CrossingSignal::DontWalk);
//!
//!     // Short-circuits the green dwell timer.
//!     ix.request_crossing().await;
//!     assert_eq!(ix.snapshot().traffic, TrafficPhase::Yellow);
//!
//!     ix.stop().await.unwrap();
//! }
//! ```

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::core::actor::{Command, IntersectionActor};
use crate::error::RuntimeError;
use crate::events::{Bus, Event};
use crate::signals::{CrossingSignal, TrafficPhase};
use crate::subscribers::{self, Subscribe};

/// External events accepted by the intersection.
///
/// Raised by a UI control or any other collaborator; forwarded verbatim to the
/// traffic machine. Events that are invalid for the current phase are dropped
/// silently — never queued, never surfaced as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntersectionEvent {
    /// A pedestrian requested to cross. No payload.
    PedestrianRequest,
}

/// Combined state of both signals at one observable instant.
///
/// Published atomically by the loop: the two fields always satisfy
/// `pedestrian == Walk ⇔ traffic == Red`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntersectionSnapshot {
    /// Current phase of the traffic light.
    pub traffic: TrafficPhase,
    /// Current pedestrian indicator.
    pub pedestrian: CrossingSignal,
}

/// Coordinates the traffic and pedestrian machines and routes events between
/// them.
///
/// ### Responsibilities
/// - **Ownership**: both machines are created on [`start`](Self::start) and
///   live exactly as long as the handle; nothing else can reach them.
/// - **Routing**: forwards external events in, relays traffic entry notices to
///   the pedestrian machine inside the loop.
/// - **Observation**: exposes side-effect-free snapshot reads and event
///   subscriptions for rendering and logging collaborators.
pub struct Intersection {
    bus: Bus,
    tx: mpsc::UnboundedSender<Command>,
    snapshot_rx: watch::Receiver<IntersectionSnapshot>,
    cancel: CancellationToken,
    join: JoinHandle<()>,
}

impl Intersection {
    /// Starts the intersection: spawns the loop task with both machines in
    /// their initial states (`green` / `dont-walk`).
    ///
    /// The initial snapshot is observable immediately, before the loop task
    /// has been polled.
    pub fn start(cfg: Config) -> Self {
        let bus = Bus::new(cfg.bus_capacity);
        let (tx, rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(IntersectionSnapshot {
            traffic: TrafficPhase::Green,
            pedestrian: CrossingSignal::DontWalk,
        });
        let cancel = CancellationToken::new();

        let actor = IntersectionActor::new(cfg.timing, bus.clone(), snapshot_tx, rx);
        let join = tokio::spawn(actor.run(cancel.child_token()));

        Self {
            bus,
            tx,
            snapshot_rx,
            cancel,
            join,
        }
    }

    /// Sends one external event into the intersection.
    ///
    /// Resolves after the event has been processed to completion, including
    /// any cross-machine routing it triggered. Infallible by design: an event
    /// that is invalid for the current phase is dropped silently, and sending
    /// after the loop has stopped is a no-op.
    pub async fn send(&self, event: IntersectionEvent) {
        let (done, applied) = oneshot::channel();
        if self.tx.send(Command { event, done }).is_err() {
            return;
        }
        let _ = applied.await;
    }

    /// Convenience for `send(IntersectionEvent::PedestrianRequest)`.
    pub async fn request_crossing(&self) {
        self.send(IntersectionEvent::PedestrianRequest).await;
    }

    /// Returns the current combined snapshot. Side-effect free, callable at
    /// any time.
    pub fn snapshot(&self) -> IntersectionSnapshot {
        *self.snapshot_rx.borrow()
    }

    /// Returns a watch receiver that observes every snapshot change.
    ///
    /// Intended for rendering collaborators: `changed().await` then `borrow()`.
    pub fn watch(&self) -> watch::Receiver<IntersectionSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Creates a new receiver for runtime events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    /// Attaches a subscriber: spawns a worker that forwards every bus event to
    /// `sub.on_event`. The worker runs at the subscriber's own pace and never
    /// blocks the loop.
    ///
    /// The worker exits when the intersection's bus is dropped.
    pub fn attach(&self, sub: Arc<dyn Subscribe>) {
        subscribers::spawn_worker(self.bus.subscribe(), sub);
    }

    /// Stops the intersection: cancels the loop and joins it.
    ///
    /// Both machines are destroyed with the loop. Returns an error only if the
    /// loop task panicked.
    pub async fn stop(self) -> Result<(), RuntimeError> {
        self.cancel.cancel();
        self.join.await?;
        Ok(())
    }
}
