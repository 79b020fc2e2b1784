//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Stable index of a room inside its house.
///
/// Doubles as the global lock-ordering key: whenever two rooms must be
/// locked together they are locked in ascending `RoomId` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub usize);

/// Unique identifier for hunters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HunterId(pub u32);

/// Why an actor left the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitReason {
    /// The case file held three matching pieces of evidence
    Evidence,
    /// Boredom passed its ceiling
    Bored,
    /// Fear passed its ceiling
    Afraid,
}

impl ExitReason {
    pub fn label(&self) -> &'static str {
        match self {
            ExitReason::Evidence => "found the evidence",
            ExitReason::Bored => "got bored",
            ExitReason::Afraid => "ran away in fear",
        }
    }
}
