//! The ghost actor: one thread haunting the house
//!
//! The ghost idles, drops evidence from its own profile, or drifts to an
//! adjacent room. It checks for hunters before moving in a separate
//! critical section from the move itself; a hunter entering in that
//! window is tolerated and keeps ghost and hunters from ever waiting on
//! each other.

use std::sync::Arc;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::SimConfig;
use crate::core::types::RoomId;
use crate::evidence::{EvidenceKind, GhostKind};
use crate::house::House;
use crate::simulation::events::{EventLog, SimulationEvent};

pub struct Ghost {
    kind: GhostKind,
    current: RoomId,
    boredom: u32,
    exited: bool,
    house: Arc<House>,
    events: Arc<EventLog>,
    config: SimConfig,
    rng: ChaCha8Rng,
}

impl Ghost {
    /// Materialize a random ghost in a random non-van room.
    ///
    /// Panics if the house has no room besides the van; a haunted house
    /// needs somewhere to haunt.
    pub fn new(
        house: Arc<House>,
        events: Arc<EventLog>,
        config: SimConfig,
        mut rng: ChaCha8Rng,
    ) -> Self {
        let kind = GhostKind::ALL[rng.gen_range(0..GhostKind::ALL.len())];

        let lairs: Vec<RoomId> = house
            .rooms()
            .iter()
            .filter(|r| !r.is_van())
            .map(|r| r.id())
            .collect();
        assert!(!lairs.is_empty(), "house has no room for the ghost to haunt");
        let current = lairs[rng.gen_range(0..lairs.len())];

        house.room(current).lock().set_ghost_present(true);
        events.record(SimulationEvent::GhostInit {
            kind,
            room: house.room(current).name().to_string(),
        });

        Self {
            kind,
            current,
            boredom: 0,
            exited: false,
            house,
            events,
            config,
            rng,
        }
    }

    pub fn kind(&self) -> GhostKind {
        self.kind
    }

    /// Drive the state machine until the ghost leaves out of boredom
    pub fn run(mut self) {
        while !self.exited {
            self.step();
        }
    }

    /// One full iteration of the ghost loop
    pub(crate) fn step(&mut self) {
        self.update_boredom();
        if !self.check_exit() {
            self.take_action();
        }
    }

    /// Company keeps the ghost interested; an empty room bores it
    fn update_boredom(&mut self) {
        if self.house.room_has_hunters(self.current) {
            self.boredom = 0;
        } else {
            self.boredom = self.boredom.saturating_add(1);
        }
    }

    fn check_exit(&mut self) -> bool {
        if self.boredom <= self.config.boredom_ceiling {
            return false;
        }
        self.house.room(self.current).lock().set_ghost_present(false);
        self.exited = true;
        self.events.record(SimulationEvent::GhostExited {
            boredom: self.boredom,
            room: self.house.room(self.current).name().to_string(),
        });
        true
    }

    /// Idle, haunt, or drift, chosen uniformly
    fn take_action(&mut self) {
        match self.rng.gen_range(0..3) {
            0 => self.events.record(SimulationEvent::GhostIdle {
                boredom: self.boredom,
                room: self.house.room(self.current).name().to_string(),
            }),
            1 => self.leave_evidence(),
            _ => self.try_move(),
        }
    }

    /// Drop one of the ghost's own three evidence kinds in this room
    fn leave_evidence(&mut self) {
        let kinds: Vec<EvidenceKind> = self.kind.profile().kinds().collect();
        let kind = kinds[self.rng.gen_range(0..kinds.len())];

        self.house.room(self.current).lock().add_evidence(kind);
        self.events.record(SimulationEvent::GhostEvidence {
            boredom: self.boredom,
            room: self.house.room(self.current).name().to_string(),
            kind,
        });
    }

    /// Drift to a random adjacent room.
    ///
    /// The ghost stays put while hunters share its room, and the
    /// occupancy check deliberately happens outside the move's critical
    /// section.
    fn try_move(&mut self) {
        if self.house.room_has_hunters(self.current) {
            return;
        }
        let neighbors = self.house.room(self.current).neighbors();
        if neighbors.is_empty() {
            return;
        }
        let target = neighbors[self.rng.gen_range(0..neighbors.len())];
        let from = self.current;

        {
            let (mut src, mut dst) = self.house.lock_pair(from, target);
            src.set_ghost_present(false);
            dst.set_ghost_present(true);
        }
        self.current = target;

        self.events.record(SimulationEvent::GhostMoved {
            boredom: self.boredom,
            from: self.house.room(from).name().to_string(),
            to: self.house.room(target).name().to_string(),
        });
    }

    #[cfg(test)]
    pub(crate) fn current_room(&self) -> RoomId {
        self.current
    }

    #[cfg(test)]
    pub(crate) fn has_exited(&self) -> bool {
        self.exited
    }
}
