//! # crosslight
//!
//! **Crosslight** is the state-machine core of a signalized road intersection:
//! a timed three-phase traffic light coordinated with a two-state pedestrian
//! walk signal, driven by an external pedestrian-request event.
//!
//! The crate deliberately excludes everything around the core — rendering,
//! styling, HTTP, input wiring. Collaborators observe snapshots and raise
//! typed events; nothing outside mutates state directly.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!              ┌──────────────────────────────────────────────────┐
//!              │  Intersection (coordinator / mediator)           │
//!   request ──►│  - mpsc command channel (external events in)     │
//!              │  - Bus (broadcast observability events out)      │
//!              │  - watch::Sender<IntersectionSnapshot>           │
//!              └───────────────┬──────────────────────────────────┘
//!                              ▼ one tokio task (single consumer)
//!              ┌──────────────────────────────────────────────────┐
//!              │  loop: select! { cancel | dwell timer | command }│
//!              │                                                  │
//!              │   TrafficMachine        PedestrianMachine        │
//!              │   green→yellow→red      dont-walk ⇄ walk         │
//!              │        │  entry notices (Green/Red)  ▲           │
//!              │        └────────── routed ───────────┘           │
//!              └───────────────┬──────────────────────────────────┘
//!                              ▼
//!                snapshot (watch) + Event (Bus) to observers
//! ```
//!
//! ### Coordination protocol
//! The traffic machine announces entering `green` and `red` via entry notices.
//! The coordinator relays them to the pedestrian machine — `Green` becomes
//! `UnsafeToWalk`, `Red` becomes `SafeToWalk` — synchronously, inside the same
//! loop iteration as the transition itself. The combined snapshot is published
//! once per processed event, which gives the crate-wide invariant:
//!
//! > at every observable instant, `pedestrian == walk ⇔ traffic == red`.
//!
//! ### Timers
//! Each phase's dwell timer is armed at entry and replaced on every exit; the
//! pending sleep is re-derived from the current deadline on each loop
//! iteration, so a timer belonging to an exited phase can never fire. The only
//! early-exit path is the pedestrian-request shortcut out of `green`; requests
//! in `yellow`/`red` are dropped silently and leave the pending timer alone.
//!
//! ## Features
//! | Area              | Description                                             | Key types / traits                        |
//! |-------------------|---------------------------------------------------------|-------------------------------------------|
//! | **Coordinator**   | Own both machines, route events, expose snapshots.      | [`Intersection`], [`IntersectionSnapshot`]|
//! | **Machines**      | Pure transition/notice tables, timer-free.              | [`TrafficMachine`], [`PedestrianMachine`] |
//! | **Events**        | Observability stream with monotonic sequence numbers.   | [`Event`], [`EventKind`]                  |
//! | **Subscriber API**| Hook into runtime events (logging, rendering, custom).  | [`Subscribe`]                             |
//! | **Configuration** | Dwell durations and bus capacity.                       | [`Config`], [`Timing`]                    |
//! | **Errors**        | Runtime-boundary failures only.                         | [`RuntimeError`]                          |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use crosslight::{Config, CrossingSignal, Intersection, Timing, TrafficPhase};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let mut cfg = Config::default();
//!     cfg.timing = Timing {
//!         green: Duration::from_millis(50),
//!         yellow: Duration::from_millis(20),
//!         red: Duration::from_millis(60),
//!     };
//!
//!     let ix = Intersection::start(cfg);
//!     assert_eq!(ix.snapshot().traffic, TrafficPhase::Green);
//!
//!     // The request shortcut: green → yellow without waiting out the dwell.
//!     ix.request_crossing().await;
//!     assert_eq!(ix.snapshot().traffic, TrafficPhase::Yellow);
//!     assert_eq!(ix.snapshot().pedestrian, CrossingSignal::DontWalk);
//!
//!     // Wait for the light to go red; the walk signal follows atomically.
//!     let mut w = ix.watch();
//!     while w.borrow().traffic != TrafficPhase::Red {
//!         w.changed().await.unwrap();
//!     }
//!     assert_eq!(ix.snapshot().pedestrian, CrossingSignal::Walk);
//!
//!     ix.stop().await.unwrap();
//! }
//! ```

mod config;
mod core;
mod error;
mod events;
mod signals;
mod subscribers;

// ---- Public re-exports ----

pub use config::{Config, Timing};
pub use core::{Intersection, IntersectionEvent, IntersectionSnapshot};
pub use error::RuntimeError;
pub use events::{Event, EventKind};
pub use signals::{
    CrossingEvent, CrossingSignal, PedestrianMachine, TrafficEvent, TrafficMachine, TrafficNotice,
    TrafficPhase, Transition,
};
pub use subscribers::Subscribe;

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
