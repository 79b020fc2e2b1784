//! A room and the lock-guarded state every actor contends for

use std::sync::{Mutex, MutexGuard};

use crate::core::types::{HunterId, RoomId};
use crate::evidence::{EvidenceKind, EvidenceMask};

/// Mutable room contents, guarded as a unit by the room's mutex
#[derive(Debug)]
pub struct RoomState {
    occupants: Vec<HunterId>,
    capacity: usize,
    ghost_present: bool,
    evidence: EvidenceMask,
}

impl RoomState {
    fn new(capacity: usize) -> Self {
        Self {
            occupants: Vec::new(),
            capacity,
            ghost_present: false,
            evidence: EvidenceMask::EMPTY,
        }
    }

    /// Add a hunter if there is a free slot.
    ///
    /// Returns false without mutating anything when the room is full;
    /// never blocks. A failed add is a normal outcome, not an error.
    pub fn add_occupant(&mut self, hunter: HunterId) -> bool {
        if self.occupants.len() >= self.capacity {
            return false;
        }
        self.occupants.push(hunter);
        true
    }

    /// Remove a hunter, keeping the others in arrival order.
    ///
    /// Removing a hunter that is not present is a no-op (hunters are not
    /// registered anywhere until their first successful move).
    pub fn remove_occupant(&mut self, hunter: HunterId) {
        self.occupants.retain(|h| *h != hunter);
    }

    pub fn occupant_count(&self) -> usize {
        self.occupants.len()
    }

    pub fn has_hunters(&self) -> bool {
        !self.occupants.is_empty()
    }

    pub fn ghost_present(&self) -> bool {
        self.ghost_present
    }

    pub fn set_ghost_present(&mut self, present: bool) {
        self.ghost_present = present;
    }

    pub fn evidence(&self) -> EvidenceMask {
        self.evidence
    }

    pub fn add_evidence(&mut self, kind: EvidenceKind) {
        self.evidence.set(kind);
    }

    pub fn clear_evidence(&mut self, kind: EvidenceKind) {
        self.evidence.clear(kind);
    }
}

/// A node in the house graph
///
/// Identity and adjacency are fixed once the house is built; everything
/// that mutates during a run lives behind [`Room::lock`].
#[derive(Debug)]
pub struct Room {
    id: RoomId,
    name: String,
    is_van: bool,
    neighbors: Vec<RoomId>,
    state: Mutex<RoomState>,
}

impl Room {
    pub(crate) fn new(id: RoomId, name: String, is_van: bool, capacity: usize) -> Self {
        Self {
            id,
            name,
            is_van,
            neighbors: Vec::new(),
            state: Mutex::new(RoomState::new(capacity)),
        }
    }

    pub(crate) fn push_neighbor(&mut self, neighbor: RoomId) {
        self.neighbors.push(neighbor);
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_van(&self) -> bool {
        self.is_van
    }

    pub fn neighbors(&self) -> &[RoomId] {
        &self.neighbors
    }

    /// Lock this room's mutable state.
    ///
    /// Single-room critical sections only; any two-room operation must go
    /// through `House::lock_pair` so both locks are taken in id order.
    pub fn lock(&self) -> MutexGuard<'_, RoomState> {
        self.state.lock().expect("room lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_occupant_respects_capacity() {
        let room = Room::new(RoomId(0), "Parlour".into(), false, 8);
        let mut state = room.lock();

        for i in 0..8 {
            assert!(state.add_occupant(HunterId(i)), "slot {} should be free", i);
        }
        assert_eq!(state.occupant_count(), 8);

        // the ninth hunter is turned away, nothing changes
        assert!(!state.add_occupant(HunterId(8)));
        assert_eq!(state.occupant_count(), 8);
    }

    #[test]
    fn test_remove_occupant_preserves_order() {
        let room = Room::new(RoomId(0), "Parlour".into(), false, 8);
        let mut state = room.lock();
        state.add_occupant(HunterId(1));
        state.add_occupant(HunterId(2));
        state.add_occupant(HunterId(3));

        state.remove_occupant(HunterId(2));
        assert_eq!(state.occupant_count(), 2);

        // freed slot can be reused
        assert!(state.add_occupant(HunterId(4)));
    }

    #[test]
    fn test_remove_missing_occupant_is_noop() {
        let room = Room::new(RoomId(0), "Parlour".into(), false, 8);
        let mut state = room.lock();
        state.add_occupant(HunterId(1));
        state.remove_occupant(HunterId(9));
        assert_eq!(state.occupant_count(), 1);
    }

    #[test]
    fn test_evidence_mutation() {
        let room = Room::new(RoomId(0), "Cellar".into(), false, 8);
        let mut state = room.lock();
        state.add_evidence(EvidenceKind::Emf);
        assert!(state.evidence().contains(EvidenceKind::Emf));
        state.clear_evidence(EvidenceKind::Emf);
        assert!(state.evidence().is_empty());
    }
}
