//! Runtime events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to runtime events emitted by the intersection loop.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publisher**: the intersection loop (`core::actor`).
//! - **Consumers**: [`Intersection::subscribe`](crate::Intersection::subscribe)
//!   receivers and workers attached via
//!   [`Intersection::attach`](crate::Intersection::attach).

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
