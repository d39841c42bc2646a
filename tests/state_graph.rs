//! Exhaustive graph exploration of the pure intersection model.
//!
//! These tests treat the machines as a transition graph and walk it
//! mechanically: every `(phase, input)` edge is enumerated and compared
//! against the expected graph, and every input sequence up to a fixed depth is
//! replayed through a routed model to check the walk-iff-red invariant on all
//! reachable paths, not just the handful a scenario test happens to visit.

use std::collections::{BTreeSet, VecDeque};

use crosslight::{
    CrossingEvent, CrossingSignal, PedestrianMachine, TrafficEvent, TrafficMachine, TrafficNotice,
    TrafficPhase,
};

/// Inputs the traffic machine reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Input {
    DwellElapsed,
    PedestrianRequest,
}

const INPUTS: [Input; 2] = [Input::DwellElapsed, Input::PedestrianRequest];
const PHASES: [TrafficPhase; 3] = [TrafficPhase::Green, TrafficPhase::Yellow, TrafficPhase::Red];

/// Builds a traffic machine sitting in the given phase by driving it there.
fn machine_at(phase: TrafficPhase) -> TrafficMachine {
    let mut m = TrafficMachine::new();
    while m.phase() != phase {
        m.on_timer();
    }
    m
}

/// Applies one input; returns the new phase if the input caused a transition.
fn step(m: &mut TrafficMachine, input: Input) -> Option<TrafficPhase> {
    match input {
        Input::DwellElapsed => Some(m.on_timer().to),
        Input::PedestrianRequest => m.on_event(TrafficEvent::PedestrianRequest).map(|t| t.to),
    }
}

#[test]
fn traffic_graph_has_exactly_the_expected_edges() {
    let mut edges = BTreeSet::new();
    for phase in PHASES {
        for input in INPUTS {
            let mut m = machine_at(phase);
            if let Some(to) = step(&mut m, input) {
                edges.insert((phase.as_str(), input, to.as_str()));
            }
        }
    }

    let expected: BTreeSet<_> = [
        ("green", Input::DwellElapsed, "yellow"),
        ("green", Input::PedestrianRequest, "yellow"),
        ("yellow", Input::DwellElapsed, "red"),
        ("red", Input::DwellElapsed, "green"),
    ]
    .into_iter()
    .collect();

    assert_eq!(edges, expected);
}

#[test]
fn every_phase_is_reachable_from_green() {
    let mut seen = BTreeSet::new();
    let mut queue = VecDeque::from([TrafficPhase::Green]);
    while let Some(phase) = queue.pop_front() {
        if !seen.insert(phase.as_str()) {
            continue;
        }
        for input in INPUTS {
            let mut m = machine_at(phase);
            if let Some(to) = step(&mut m, input) {
                queue.push_back(to);
            }
        }
    }
    assert_eq!(seen.len(), PHASES.len());
}

#[test]
fn dwell_input_always_transitions_and_request_only_in_green() {
    for phase in PHASES {
        let mut m = machine_at(phase);
        assert!(step(&mut m, Input::DwellElapsed).is_some());

        let mut m = machine_at(phase);
        let moved = step(&mut m, Input::PedestrianRequest).is_some();
        assert_eq!(moved, phase == TrafficPhase::Green);
        if !moved {
            assert_eq!(m.phase(), phase, "dropped request must not change phase");
        }
    }
}

/// The routed model: both machines plus the mediator's notice mapping.
struct Routed {
    traffic: TrafficMachine,
    pedestrian: PedestrianMachine,
}

impl Routed {
    fn new() -> Self {
        let traffic = TrafficMachine::new();
        let mut pedestrian = PedestrianMachine::new();
        if let Some(notice) = traffic.phase().entry_notice() {
            pedestrian.on_event(route(notice));
        }
        Self {
            traffic,
            pedestrian,
        }
    }

    fn apply(&mut self, input: Input) {
        let transition = match input {
            Input::DwellElapsed => Some(self.traffic.on_timer()),
            Input::PedestrianRequest => self.traffic.on_event(TrafficEvent::PedestrianRequest),
        };
        if let Some(t) = transition {
            if let Some(notice) = t.notice {
                self.pedestrian.on_event(route(notice));
            }
        }
    }

    fn consistent(&self) -> bool {
        (self.pedestrian.signal() == CrossingSignal::Walk)
            == (self.traffic.phase() == TrafficPhase::Red)
    }
}

fn route(notice: TrafficNotice) -> CrossingEvent {
    match notice {
        TrafficNotice::Green => CrossingEvent::UnsafeToWalk,
        TrafficNotice::Red => CrossingEvent::SafeToWalk,
    }
}

#[test]
fn walk_iff_red_on_all_paths_up_to_depth_ten() {
    // 2^10 input sequences; each replayed from the initial state, the
    // invariant checked after every single step.
    let depth = 10;
    for path in 0u32..(1 << depth) {
        let mut model = Routed::new();
        assert!(model.consistent());
        for bit in 0..depth {
            let input = if path & (1 << bit) != 0 {
                Input::PedestrianRequest
            } else {
                Input::DwellElapsed
            };
            model.apply(input);
            assert!(
                model.consistent(),
                "inconsistent after path {path:#012b} step {bit}"
            );
        }
    }
}

#[test]
fn entry_notices_cover_exactly_green_and_red() {
    assert_eq!(
        TrafficPhase::Green.entry_notice(),
        Some(TrafficNotice::Green)
    );
    assert_eq!(TrafficPhase::Yellow.entry_notice(), None);
    assert_eq!(TrafficPhase::Red.entry_notice(), Some(TrafficNotice::Red));
}
