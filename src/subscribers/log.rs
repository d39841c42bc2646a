//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints events to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [started] traffic=green pedestrian=dont-walk
//! [phase] traffic=yellow
//! [request-accepted] in=green
//! [request-ignored] in=red
//! [crossing] pedestrian=walk
//! [stopped]
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. Prints human-readable event descriptions
/// to stdout for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Subscribe`] for
/// structured logging or metrics collection.
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::Started => {
                if let (Some(phase), Some(crossing)) = (e.phase, e.crossing) {
                    println!(
                        "[started] traffic={} pedestrian={}",
                        phase.as_str(),
                        crossing.as_str()
                    );
                }
            }
            EventKind::PhaseChanged => {
                if let Some(phase) = e.phase {
                    println!("[phase] traffic={}", phase.as_str());
                }
            }
            EventKind::CrossingChanged => {
                if let Some(crossing) = e.crossing {
                    println!("[crossing] pedestrian={}", crossing.as_str());
                }
            }
            EventKind::RequestAccepted => {
                if let Some(phase) = e.phase {
                    println!("[request-accepted] in={}", phase.as_str());
                }
            }
            EventKind::RequestIgnored => {
                if let Some(phase) = e.phase {
                    println!("[request-ignored] in={}", phase.as_str());
                }
            }
            EventKind::Stopped => {
                println!("[stopped]");
            }
        }
    }

    fn name(&self) -> &'static str {
        "log_writer"
    }
}
