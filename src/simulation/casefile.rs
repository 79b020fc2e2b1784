//! The shared evidence ledger every hunter reports into

use std::sync::Mutex;

use crate::evidence::{EvidenceKind, EvidenceMask, GhostKind};

#[derive(Debug)]
struct CaseState {
    collected: EvidenceMask,
    solved: bool,
}

/// Point-in-time copy of the ledger, read as a unit
#[derive(Debug, Clone, Copy)]
pub struct CaseSnapshot {
    pub collected: EvidenceMask,
    pub solved: bool,
}

/// Evidence collected across all hunters, plus the solved flag.
///
/// Both fields live under one lock and are only ever read or written
/// together. Bits are added and never removed, so the collected mask is
/// monotonically non-decreasing; `solved` flips false to true at most
/// once per run and never reverts.
#[derive(Debug)]
pub struct CaseFile {
    state: Mutex<CaseState>,
}

impl CaseFile {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CaseState {
                collected: EvidenceMask::EMPTY,
                solved: false,
            }),
        }
    }

    /// Record one piece of evidence in the shared ledger
    pub fn add_evidence(&self, kind: EvidenceKind) {
        let mut state = self.state.lock().expect("case file lock poisoned");
        state.collected.set(kind);
    }

    /// Check whether the collected evidence names a ghost, flipping the
    /// solved flag on the first success.
    ///
    /// The read, the profile match, and the flip happen in one critical
    /// section, so two hunters can't both perform the flip from the same
    /// evidence state and a concurrent `add_evidence` can't interleave
    /// with the check. Returns whether the case is solved; every hunter
    /// that calls this against a winning ledger gets `true`, but only the
    /// first call transitions the flag.
    pub fn try_solve(&self) -> bool {
        let mut state = self.state.lock().expect("case file lock poisoned");
        if !state.solved
            && state.collected.has_three_unique()
            && GhostKind::from_profile(state.collected).is_some()
        {
            state.solved = true;
        }
        state.solved
    }

    pub fn snapshot(&self) -> CaseSnapshot {
        let state = self.state.lock().expect("case file lock poisoned");
        CaseSnapshot {
            collected: state.collected,
            solved: state.solved,
        }
    }
}

impl Default for CaseFile {
    fn default() -> Self {
        Self::new()
    }
}
