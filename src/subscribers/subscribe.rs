//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for plugging custom event handlers into
//! the runtime. Each attached subscriber is driven by a dedicated worker loop
//! fed from its own [`Bus`](crate::events::Bus) receiver.
//!
//! ## Contract
//! - Implementations may be slow (I/O, batching) – they never block the
//!   intersection loop nor other subscribers.
//! - A subscriber that falls behind the bus capacity skips the missed events
//!   (broadcast lag semantics); it is never a correctness problem because the
//!   coordination protocol does not run over the bus.

use async_trait::async_trait;

use crate::events::Event;

/// Contract for event subscribers.
///
/// Called from a subscriber-dedicated worker task. Implementations should
/// avoid blocking the async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handle a single event for this subscriber.
    async fn on_event(&self, event: &Event);

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
