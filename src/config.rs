//! # Global runtime configuration.
//!
//! Provides [`Config`] centralized settings for the intersection runtime, and
//! [`Timing`] the dwell-duration table of the traffic machine.
//!
//! Config is consumed once, at [`Intersection::start`](crate::Intersection::start).
//! The defaults reproduce the reference intersection exactly:
//! green 5000 ms → yellow 2000 ms → red 6000 ms (full natural cycle 13000 ms).
//!
//! ## Notes
//! All fields are public for flexibility; tests and demos typically shorten
//! [`Timing`] rather than sit through the 13-second real-time cycle.

use std::time::Duration;

use crate::signals::TrafficPhase;

/// Dwell durations of the three traffic phases.
///
/// Each duration is measured from the instant its phase is entered. There is
/// no drift correction and no carry-over of elapsed time across a transition:
/// entering a phase always arms a fresh timer for the full dwell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Dwell in `green` before moving to `yellow` (absent a pedestrian request).
    pub green: Duration,
    /// Dwell in `yellow` before moving to `red`. `yellow` accepts no events.
    pub yellow: Duration,
    /// Dwell in `red` before moving back to `green`.
    pub red: Duration,
}

impl Timing {
    /// Returns the dwell duration of the given phase.
    #[inline]
    pub fn dwell(&self, phase: TrafficPhase) -> Duration {
        match phase {
            TrafficPhase::Green => self.green,
            TrafficPhase::Yellow => self.yellow,
            TrafficPhase::Red => self.red,
        }
    }

    /// Total duration of one natural cycle (no pedestrian requests).
    pub fn cycle(&self) -> Duration {
        self.green + self.yellow + self.red
    }
}

impl Default for Timing {
    /// Reference dwell times: green 5 s, yellow 2 s, red 6 s.
    fn default() -> Self {
        Self {
            green: Duration::from_millis(5000),
            yellow: Duration::from_millis(2000),
            red: Duration::from_millis(6000),
        }
    }
}

/// Global configuration for the intersection runtime.
///
/// ## Field semantics
/// - `timing`: dwell-duration table for the traffic machine
/// - `bus_capacity`: event bus ring buffer size (min 1; clamped by the Bus)
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Dwell durations of the traffic phases.
    pub timing: Timing,

    /// Capacity of the event bus broadcast channel ring buffer.
    ///
    /// Slow subscribers that lag behind more than `bus_capacity` events will
    /// receive `Lagged` and skip older items.
    pub bus_capacity: usize,
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `timing = Timing::default()` (5 s / 2 s / 6 s)
    /// - `bus_capacity = 1024`
    fn default() -> Self {
        Self {
            timing: Timing::default(),
            bus_capacity: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dwell_table() {
        let t = Timing::default();
        assert_eq!(t.dwell(TrafficPhase::Green), Duration::from_millis(5000));
        assert_eq!(t.dwell(TrafficPhase::Yellow), Duration::from_millis(2000));
        assert_eq!(t.dwell(TrafficPhase::Red), Duration::from_millis(6000));
    }

    #[test]
    fn test_natural_cycle_is_13s() {
        assert_eq!(Timing::default().cycle(), Duration::from_millis(13000));
    }
}
