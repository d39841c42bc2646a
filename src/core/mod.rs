//! Runtime core: orchestration and lifecycle.
//!
//! This module contains the embedded implementation of the crosslight runtime.
//! The public API from this module is [`Intersection`], the coordinator that
//! owns the two signal machines, routes events between them, and exposes
//! snapshots to collaborators.
//!
//! Internal modules:
//! - [`actor`]: the single-consumer event loop driving both machines;
//! - [`intersection`]: the owner handle (start, send, snapshot, stop).

mod actor;
mod intersection;

pub use intersection::{Intersection, IntersectionEvent, IntersectionSnapshot};
