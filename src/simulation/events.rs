//! Events generated during a simulation run
//!
//! Every actor state change is recorded here for the end-of-run log dump,
//! and echoed through `tracing` for live output. Appends are per-call
//! atomic; no global ordering across actors is promised.

use std::sync::Mutex;

use serde::Serialize;

use crate::core::types::{ExitReason, HunterId};
use crate::evidence::{EvidenceKind, GhostKind};

/// One recorded actor state change
#[derive(Debug, Clone, Serialize)]
pub enum SimulationEvent {
    /// A hunter joined the roster and picked up a starting device
    HunterInit {
        id: HunterId,
        name: String,
        room: String,
        device: EvidenceKind,
    },
    /// A hunter moved between two rooms
    HunterMoved {
        id: HunterId,
        boredom: u32,
        fear: u32,
        from: String,
        to: String,
        device: EvidenceKind,
    },
    /// A hunter pulled a matching reading out of a room
    EvidenceGathered {
        id: HunterId,
        boredom: u32,
        fear: u32,
        room: String,
        device: EvidenceKind,
    },
    /// A hunter traded devices at the van
    DeviceSwapped {
        id: HunterId,
        boredom: u32,
        fear: u32,
        old_device: EvidenceKind,
        new_device: EvidenceKind,
    },
    /// A hunter's return-to-van intent changed
    ReturnToVan {
        id: HunterId,
        boredom: u32,
        fear: u32,
        room: String,
        device: EvidenceKind,
        returning: bool,
    },
    /// A hunter reached a terminal state
    HunterExited {
        id: HunterId,
        boredom: u32,
        fear: u32,
        room: String,
        reason: ExitReason,
    },
    /// The ghost settled into its starting room
    GhostInit { kind: GhostKind, room: String },
    /// The ghost did nothing this iteration
    GhostIdle { boredom: u32, room: String },
    /// The ghost drifted to an adjacent room
    GhostMoved { boredom: u32, from: String, to: String },
    /// The ghost left a reading behind
    GhostEvidence {
        boredom: u32,
        room: String,
        kind: EvidenceKind,
    },
    /// The ghost gave up on the house
    GhostExited { boredom: u32, room: String },
}

/// Thread-safe append-only event recorder
#[derive(Debug, Default)]
pub struct EventLog {
    entries: Mutex<Vec<SimulationEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: SimulationEvent) {
        tracing::debug!("{:?}", event);
        let mut entries = self.entries.lock().expect("event log lock poisoned");
        entries.push(event);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("event log lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of everything recorded so far
    pub fn snapshot(&self) -> Vec<SimulationEvent> {
        self.entries.lock().expect("event log lock poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_records_in_call_order() {
        let log = EventLog::new();
        log.record(SimulationEvent::GhostIdle {
            boredom: 0,
            room: "Attic".into(),
        });
        log.record(SimulationEvent::GhostExited {
            boredom: 16,
            room: "Attic".into(),
        });
        let events = log.snapshot();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], SimulationEvent::GhostIdle { .. }));
        assert!(matches!(events[1], SimulationEvent::GhostExited { .. }));
    }

    #[test]
    fn test_concurrent_appends_all_land() {
        let log = Arc::new(EventLog::new());
        thread::scope(|s| {
            for _ in 0..4 {
                let log = Arc::clone(&log);
                s.spawn(move || {
                    for i in 0..50 {
                        log.record(SimulationEvent::GhostIdle {
                            boredom: i,
                            room: "Cellar".into(),
                        });
                    }
                });
            }
        });
        assert_eq!(log.len(), 200);
    }

    #[test]
    fn test_events_serialize() {
        let event = SimulationEvent::HunterExited {
            id: HunterId(3),
            boredom: 16,
            fear: 2,
            room: "Van".into(),
            reason: ExitReason::Bored,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("HunterExited"));
        assert!(json.contains("Bored"));
    }
}
