//! The hunter actor: one thread walking the house, filling the case file
//!
//! Each iteration runs the same fixed sequence: update fear and boredom,
//! handle the van, check the exit ceilings, try to gather evidence, then
//! move. Shared state is only touched under the owning room's lock or the
//! case file's lock, and never both at once.

use std::sync::Arc;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::SimConfig;
use crate::core::types::{ExitReason, HunterId, RoomId};
use crate::evidence::EvidenceKind;
use crate::house::House;
use crate::simulation::casefile::CaseFile;
use crate::simulation::events::{EventLog, SimulationEvent};

use super::trail::Trail;

/// Terminal record a hunter thread hands back to the orchestrator
#[derive(Debug, Clone)]
pub struct HunterOutcome {
    pub id: HunterId,
    pub name: String,
    pub reason: ExitReason,
}

pub struct Hunter {
    id: HunterId,
    name: String,
    current: RoomId,
    device: EvidenceKind,
    fear: u32,
    boredom: u32,
    returning: bool,
    outcome: Option<ExitReason>,
    trail: Trail,
    house: Arc<House>,
    casefile: Arc<CaseFile>,
    events: Arc<EventLog>,
    config: SimConfig,
    rng: ChaCha8Rng,
}

impl Hunter {
    /// Create a hunter in the van with a randomly chosen device.
    ///
    /// The hunter is not registered in any room's occupant set until its
    /// first successful move; the van never counts idle hunters against
    /// its capacity.
    pub fn new(
        name: &str,
        id: HunterId,
        house: Arc<House>,
        casefile: Arc<CaseFile>,
        events: Arc<EventLog>,
        config: SimConfig,
        mut rng: ChaCha8Rng,
    ) -> Self {
        let device = EvidenceKind::ALL[rng.gen_range(0..EvidenceKind::ALL.len())];
        let van = house.van();
        events.record(SimulationEvent::HunterInit {
            id,
            name: name.to_string(),
            room: house.room(van).name().to_string(),
            device,
        });
        Self {
            id,
            name: name.to_string(),
            current: van,
            device,
            fear: 0,
            boredom: 0,
            returning: false,
            outcome: None,
            trail: Trail::new(),
            house,
            casefile,
            events,
            config,
            rng,
        }
    }

    /// Drive the state machine until a terminal state is reached
    pub fn run(mut self) -> HunterOutcome {
        loop {
            if let Some(reason) = self.outcome {
                return HunterOutcome {
                    id: self.id,
                    name: self.name,
                    reason,
                };
            }
            self.step();
        }
    }

    /// One full iteration of the hunter loop
    pub(crate) fn step(&mut self) {
        self.update_stats();
        self.check_van();
        if self.outcome.is_none() {
            self.check_exit_conditions();
        }
        if self.outcome.is_none() {
            self.gather_evidence();
            self.choose_move();
        }
    }

    /// Ghost in the room scares, an empty room bores
    fn update_stats(&mut self) {
        let ghost_present = self.house.room(self.current).lock().ghost_present();
        if ghost_present {
            self.boredom = 0;
            self.fear = self.fear.saturating_add(1);
        } else {
            self.boredom = self.boredom.saturating_add(1);
        }
    }

    /// At the van: drop the trail, try to close the case, swap devices
    fn check_van(&mut self) {
        let room = self.house.room(self.current);
        if !room.is_van() {
            return;
        }

        self.trail.clear();

        if self.returning {
            self.returning = false;
            self.events.record(SimulationEvent::ReturnToVan {
                id: self.id,
                boredom: self.boredom,
                fear: self.fear,
                room: room.name().to_string(),
                device: self.device,
                returning: false,
            });
        }

        if self.casefile.try_solve() {
            room.lock().remove_occupant(self.id);
            self.exit(ExitReason::Evidence);
            return;
        }

        // fresh lead, fresh device; the new pick may repeat the old one
        let old_device = self.device;
        self.device = EvidenceKind::ALL[self.rng.gen_range(0..EvidenceKind::ALL.len())];
        self.events.record(SimulationEvent::DeviceSwapped {
            id: self.id,
            boredom: self.boredom,
            fear: self.fear,
            old_device,
            new_device: self.device,
        });
    }

    /// Boredom is checked before fear; only one reason fires per iteration
    fn check_exit_conditions(&mut self) {
        if self.boredom > self.config.boredom_ceiling {
            self.house.room(self.current).lock().remove_occupant(self.id);
            self.exit(ExitReason::Bored);
        } else if self.fear > self.config.fear_ceiling {
            self.house.room(self.current).lock().remove_occupant(self.id);
            self.exit(ExitReason::Afraid);
        }
    }

    /// Scan the room with the current device.
    ///
    /// A hit moves the reading from the room to the case file and turns
    /// the hunter around; a miss still sends the hunter home with a small
    /// configurable probability. The room lock is released before the
    /// case file lock is taken.
    fn gather_evidence(&mut self) {
        let room = self.house.room(self.current);
        if room.is_van() {
            return;
        }

        let found = {
            let mut state = room.lock();
            if state.evidence().contains(self.device) {
                state.clear_evidence(self.device);
                true
            } else {
                false
            }
        };

        if found {
            self.casefile.add_evidence(self.device);
            self.events.record(SimulationEvent::EvidenceGathered {
                id: self.id,
                boredom: self.boredom,
                fear: self.fear,
                room: room.name().to_string(),
                device: self.device,
            });
            self.set_returning();
        } else if self.rng.gen_range(0..100) < self.config.return_chance {
            self.set_returning();
        }
    }

    fn set_returning(&mut self) {
        self.returning = true;
        self.events.record(SimulationEvent::ReturnToVan {
            id: self.id,
            boredom: self.boredom,
            fear: self.fear,
            room: self.house.room(self.current).name().to_string(),
            device: self.device,
            returning: true,
        });
    }

    /// Retrace the trail when returning, otherwise wander to a random
    /// neighbor, remembering the room just left.
    fn choose_move(&mut self) {
        let target = if self.returning {
            match self.trail.pop() {
                Some(room) => room,
                // empty trail means the hunter is effectively home already
                None => return,
            }
        } else {
            let neighbors = self.house.room(self.current).neighbors();
            if neighbors.is_empty() {
                return;
            }
            neighbors[self.rng.gen_range(0..neighbors.len())]
        };

        let from = self.current;
        if self.attempt_move(target) && !self.returning {
            self.trail.push(from);
        }
    }

    /// Atomic two-room move under both locks, taken in id order.
    ///
    /// Fails silently when the destination is full: nothing changes and
    /// the hunter stays put for this iteration.
    fn attempt_move(&mut self, target: RoomId) -> bool {
        let from = self.current;
        if target == from {
            // a failed return hop can leave a trail entry naming the room
            // the hunter is already standing in; nothing to do
            return true;
        }

        {
            let (mut src, mut dst) = self.house.lock_pair(from, target);
            if !dst.add_occupant(self.id) {
                return false;
            }
            src.remove_occupant(self.id);
        }
        self.current = target;

        self.events.record(SimulationEvent::HunterMoved {
            id: self.id,
            boredom: self.boredom,
            fear: self.fear,
            from: self.house.room(from).name().to_string(),
            to: self.house.room(target).name().to_string(),
            device: self.device,
        });
        true
    }

    fn exit(&mut self, reason: ExitReason) {
        self.outcome = Some(reason);
        self.events.record(SimulationEvent::HunterExited {
            id: self.id,
            boredom: self.boredom,
            fear: self.fear,
            room: self.house.room(self.current).name().to_string(),
            reason,
        });
    }

    #[cfg(test)]
    pub(crate) fn outcome(&self) -> Option<ExitReason> {
        self.outcome
    }

    #[cfg(test)]
    pub(crate) fn current_room(&self) -> RoomId {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::GhostKind;
    use crate::house::build_manor;
    use rand::SeedableRng;

    fn fixture(house: House) -> (Arc<House>, Arc<CaseFile>, Arc<EventLog>, SimConfig) {
        (
            Arc::new(house),
            Arc::new(CaseFile::new()),
            Arc::new(EventLog::new()),
            SimConfig::default(),
        )
    }

    fn hunter_at(
        house: &Arc<House>,
        casefile: &Arc<CaseFile>,
        events: &Arc<EventLog>,
        config: &SimConfig,
        seed: u64,
    ) -> Hunter {
        Hunter::new(
            "Sam",
            HunterId(1),
            Arc::clone(house),
            Arc::clone(casefile),
            Arc::clone(events),
            config.clone(),
            ChaCha8Rng::seed_from_u64(seed),
        )
    }

    #[test]
    fn test_idle_hunter_exits_bored_within_ceiling_plus_one() {
        // a van with no neighbors: no ghost ever shows up, no move ever
        // happens, boredom must climb one per iteration
        let house = House::builder().van("Van").finish().unwrap();
        let (house, casefile, events, config) = fixture(house);
        let mut hunter = hunter_at(&house, &casefile, &events, &config, 7);

        let mut iterations = 0;
        while hunter.outcome().is_none() {
            hunter.step();
            iterations += 1;
            assert!(iterations <= config.boredom_ceiling + 1, "hunter failed to exit in time");
        }
        assert_eq!(hunter.outcome(), Some(ExitReason::Bored));
        assert_eq!(iterations, config.boredom_ceiling + 1);
    }

    #[test]
    fn test_ghost_contact_drives_fear_exit() {
        let house = House::builder().van("Van").finish().unwrap();
        let (house, casefile, events, config) = fixture(house);
        house.room(house.van()).lock().set_ghost_present(true);
        let mut hunter = hunter_at(&house, &casefile, &events, &config, 7);

        while hunter.outcome().is_none() {
            hunter.step();
        }
        assert_eq!(hunter.outcome(), Some(ExitReason::Afraid));
    }

    #[test]
    fn test_gather_moves_reading_from_room_to_casefile() {
        let house = build_manor(&SimConfig::default()).unwrap();
        let (house, casefile, events, config) = fixture(house);
        let kitchen = house.find_room("Kitchen").unwrap();
        house.room(kitchen).lock().add_evidence(EvidenceKind::Emf);

        let mut hunter = hunter_at(&house, &casefile, &events, &config, 7);
        hunter.current = kitchen;
        hunter.device = EvidenceKind::Emf;
        hunter.gather_evidence();

        assert!(!house.room(kitchen).lock().evidence().contains(EvidenceKind::Emf));
        assert!(casefile.snapshot().collected.contains(EvidenceKind::Emf));
        assert!(hunter.returning);
    }

    #[test]
    fn test_returning_hunter_retraces_trail_in_reverse() {
        let house = House::builder()
            .van("Van")
            .room("A")
            .room("B")
            .room("C")
            .connect("Van", "A")
            .connect("A", "B")
            .connect("B", "C")
            .finish()
            .unwrap();
        let (house, casefile, events, config) = fixture(house);
        let (van, a, b, c) = (
            house.van(),
            house.find_room("A").unwrap(),
            house.find_room("B").unwrap(),
            house.find_room("C").unwrap(),
        );

        let mut hunter = hunter_at(&house, &casefile, &events, &config, 7);
        // walked Van -> A -> B -> C, trail remembers the rooms left behind
        hunter.current = c;
        hunter.trail.push(van);
        hunter.trail.push(a);
        hunter.trail.push(b);
        hunter.returning = true;

        let mut visited = Vec::new();
        for _ in 0..3 {
            hunter.choose_move();
            visited.push(hunter.current_room());
        }
        assert_eq!(visited, vec![b, a, van]);
        assert!(hunter.trail.is_empty());
        hunter.choose_move();
        assert_eq!(hunter.current_room(), van);
    }

    #[test]
    fn test_exploring_move_pushes_source_onto_trail() {
        let house = House::builder()
            .van("Van")
            .room("A")
            .connect("Van", "A")
            .finish()
            .unwrap();
        let (house, casefile, events, config) = fixture(house);
        let mut hunter = hunter_at(&house, &casefile, &events, &config, 7);

        hunter.choose_move();
        assert_eq!(hunter.current_room(), house.find_room("A").unwrap());
        assert_eq!(hunter.trail.pop(), Some(house.van()));
    }

    #[test]
    fn test_move_into_full_room_fails_cleanly() {
        let house = House::builder()
            .van("Van")
            .room("A")
            .connect("Van", "A")
            .finish()
            .unwrap();
        let (house, casefile, events, config) = fixture(house);
        let a = house.find_room("A").unwrap();
        {
            let mut state = house.room(a).lock();
            for i in 10..18 {
                assert!(state.add_occupant(HunterId(i)));
            }
        }

        let mut hunter = hunter_at(&house, &casefile, &events, &config, 7);
        hunter.choose_move();

        // stayed put, trail untouched, full room unchanged
        assert_eq!(hunter.current_room(), house.van());
        assert!(hunter.trail.is_empty());
        assert_eq!(house.room(a).lock().occupant_count(), 8);
    }

    #[test]
    fn test_van_visit_solves_ready_case() {
        let house = build_manor(&SimConfig::default()).unwrap();
        let (house, casefile, events, config) = fixture(house);
        for kind in GhostKind::Oni.profile().kinds() {
            casefile.add_evidence(kind);
        }

        let mut hunter = hunter_at(&house, &casefile, &events, &config, 7);
        hunter.step();

        assert_eq!(hunter.outcome(), Some(ExitReason::Evidence));
        assert!(casefile.snapshot().solved);
    }

    #[test]
    fn test_van_visit_swaps_device_when_case_open() {
        let house = build_manor(&SimConfig::default()).unwrap();
        let (house, casefile, events, config) = fixture(house);
        let mut hunter = hunter_at(&house, &casefile, &events, &config, 7);

        hunter.check_van();
        assert!(hunter.outcome().is_none());
        let swaps = events
            .snapshot()
            .into_iter()
            .filter(|e| matches!(e, SimulationEvent::DeviceSwapped { .. }))
            .count();
        assert_eq!(swaps, 1);
    }
}
