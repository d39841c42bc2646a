//! Pure signal machine definitions.
//!
//! This module groups the two state machines of the intersection as plain,
//! timer-free values:
//! - [`TrafficMachine`] — the three-phase timed traffic cycle
//! - [`PedestrianMachine`] — the two-state walk / don't-walk indicator
//!
//! ## Contents
//! - [`TrafficPhase`], [`TrafficEvent`], [`TrafficNotice`], [`Transition`]
//! - [`CrossingSignal`], [`CrossingEvent`]
//!
//! ## Quick wiring
//! ```text
//! Machine      = transition table + current tag   (this module, no I/O)
//! Dwell table  = Timing                           (crate::config)
//! Timers/loop  = IntersectionActor                (crate::core)
//! ```
//!
//! Neither machine knows the other exists: the cross-machine protocol
//! (traffic entry notices → crossing events) is routed by the coordinator.

mod pedestrian;
mod traffic;

pub use pedestrian::{CrossingEvent, CrossingSignal, PedestrianMachine};
pub use traffic::{TrafficEvent, TrafficMachine, TrafficNotice, TrafficPhase, Transition};
