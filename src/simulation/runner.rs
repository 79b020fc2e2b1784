//! Run orchestration: build the cast, spawn a thread per actor, join, report
//!
//! Actors only ever coordinate through room locks and the case file lock,
//! so the orchestrator's job is just to start everyone against the same
//! shared structures and wait. Every boredom and fear counter climbs
//! toward its ceiling whenever its trigger persists, so the join always
//! completes.

use std::sync::Arc;
use std::thread;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::actors::{Ghost, Hunter, HunterOutcome};
use crate::core::config::SimConfig;
use crate::core::types::HunterId;
use crate::evidence::{EvidenceMask, GhostKind};
use crate::house::House;
use crate::simulation::casefile::CaseFile;
use crate::simulation::events::EventLog;

/// Terminal state of a finished run
#[derive(Debug)]
pub struct SimulationReport {
    /// Exit record per hunter, in roster order
    pub hunters: Vec<HunterOutcome>,
    /// Everything that made it into the shared ledger
    pub collected: EvidenceMask,
    pub solved: bool,
    /// The ghost that actually haunted the house
    pub ghost: GhostKind,
    /// What the collected evidence names, if anything
    pub suggested: Option<GhostKind>,
    pub events: Arc<EventLog>,
    /// The house, quiescent now that every actor has left
    pub house: Arc<House>,
}

/// A configured run, ready to start
pub struct Simulation {
    house: Arc<House>,
    casefile: Arc<CaseFile>,
    events: Arc<EventLog>,
    config: SimConfig,
    seed: u64,
    roster: Vec<(String, HunterId)>,
}

impl Simulation {
    pub fn new(house: House, config: SimConfig, seed: u64) -> Self {
        debug_assert!(
            GhostKind::profile_table_is_sound(),
            "ghost profile table is inconsistent"
        );
        Self {
            house: Arc::new(house),
            casefile: Arc::new(CaseFile::new()),
            events: Arc::new(EventLog::new()),
            config,
            seed,
            roster: Vec::new(),
        }
    }

    pub fn add_hunter(&mut self, name: &str, id: HunterId) {
        self.roster.push((name.to_string(), id));
    }

    pub fn hunter_count(&self) -> usize {
        self.roster.len()
    }

    pub fn house(&self) -> &House {
        &self.house
    }

    /// Spawn the ghost and every hunter, block until all of them reach a
    /// terminal state, and collect the results.
    pub fn run(self) -> SimulationReport {
        let Simulation {
            house,
            casefile,
            events,
            config,
            seed,
            roster,
        } = self;

        let ghost = Ghost::new(
            Arc::clone(&house),
            Arc::clone(&events),
            config.clone(),
            ChaCha8Rng::seed_from_u64(seed),
        );
        let ghost_kind = ghost.kind();

        let hunters: Vec<Hunter> = roster
            .iter()
            .enumerate()
            .map(|(i, (name, id))| {
                Hunter::new(
                    name,
                    *id,
                    Arc::clone(&house),
                    Arc::clone(&casefile),
                    Arc::clone(&events),
                    config.clone(),
                    // each actor gets its own decision stream off the base seed
                    ChaCha8Rng::seed_from_u64(seed.wrapping_add(i as u64 + 1)),
                )
            })
            .collect();

        tracing::info!(
            "starting hunt: {} hunters vs {} in a {}-room house",
            hunters.len(),
            ghost_kind.label(),
            house.room_count()
        );

        let outcomes = thread::scope(|scope| {
            let ghost_handle = scope.spawn(move || ghost.run());
            let hunter_handles: Vec<_> = hunters
                .into_iter()
                .map(|hunter| scope.spawn(move || hunter.run()))
                .collect();

            let outcomes: Vec<HunterOutcome> = hunter_handles
                .into_iter()
                .map(|handle| handle.join().expect("hunter thread panicked"))
                .collect();
            ghost_handle.join().expect("ghost thread panicked");
            outcomes
        });

        let case = casefile.snapshot();
        tracing::info!(
            "hunt over: solved={}, evidence: {}",
            case.solved,
            case.collected
        );

        SimulationReport {
            hunters: outcomes,
            collected: case.collected,
            solved: case.solved,
            ghost: ghost_kind,
            suggested: GhostKind::from_profile(case.collected),
            events,
            house,
        }
    }
}
