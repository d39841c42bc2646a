//! # Event subscribers for the crosslight runtime.
//!
//! This module provides the [`Subscribe`] trait and the worker that feeds an
//! attached subscriber from the [`Bus`](crate::events::Bus).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   loop task ── publish(Event) ──► Bus ──► broadcast to all receivers
//!                                              │
//!                                              ├──► worker ──► Subscribe::on_event(&Event)
//!                                              │    ┌────┴────┬─────────┐
//!                                              │    ▼         ▼         ▼
//!                                              │  LogWriter  Renderer  Custom
//!                                              │
//!                                              └──► plain broadcast receivers (tests)
//! ```
//!
//! ## Implementing custom subscribers
//! ```no_run
//! use crosslight::{Event, EventKind, Subscribe};
//! use async_trait::async_trait;
//!
//! struct PhaseCounter;
//!
//! #[async_trait]
//! impl Subscribe for PhaseCounter {
//!     async fn on_event(&self, event: &Event) {
//!         if event.kind == EventKind::PhaseChanged {
//!             // increment a counter, update a view, ...
//!         }
//!     }
//! }
//! ```

mod subscribe;

#[cfg(feature = "logging")]
mod log;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use subscribe::Subscribe;

use std::sync::Arc;

use tokio::sync::broadcast::{self, error::RecvError};

use crate::events::Event;

/// Spawns a worker that drives one subscriber from a bus receiver.
///
/// The worker runs until the bus is dropped. A lagged receiver skips the
/// missed events and keeps going; observability may degrade, the loop never
/// waits for it.
pub(crate) fn spawn_worker(mut rx: broadcast::Receiver<Event>, sub: Arc<dyn Subscribe>) {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(ev) => sub.on_event(&ev).await,
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
    });
}
