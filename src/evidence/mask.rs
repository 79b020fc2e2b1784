//! Evidence kinds and the bit set a room or case file stores them in

use std::fmt;

use serde::{Deserialize, Serialize};

/// The seven kinds of evidence a ghost can leave behind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EvidenceKind {
    Emf = 0,
    Orbs = 1,
    Radio = 2,
    Temperature = 3,
    Fingerprints = 4,
    Writing = 5,
    Infrared = 6,
}

impl EvidenceKind {
    /// Every kind, in bit order
    pub const ALL: [EvidenceKind; 7] = [
        EvidenceKind::Emf,
        EvidenceKind::Orbs,
        EvidenceKind::Radio,
        EvidenceKind::Temperature,
        EvidenceKind::Fingerprints,
        EvidenceKind::Writing,
        EvidenceKind::Infrared,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            EvidenceKind::Emf => "EMF readings",
            EvidenceKind::Orbs => "ghost orbs",
            EvidenceKind::Radio => "radio chatter",
            EvidenceKind::Temperature => "freezing temperatures",
            EvidenceKind::Fingerprints => "fingerprints",
            EvidenceKind::Writing => "ghost writing",
            EvidenceKind::Infrared => "infrared sightings",
        }
    }
}

/// Bit set over [`EvidenceKind`]
///
/// Only the seven defined bits are ever set; the high bit stays clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvidenceMask(u8);

impl EvidenceMask {
    pub const EMPTY: EvidenceMask = EvidenceMask(0);

    /// Mask holding exactly three kinds, the shape of every ghost profile
    pub const fn triple(a: EvidenceKind, b: EvidenceKind, c: EvidenceKind) -> Self {
        EvidenceMask(a.bit() | b.bit() | c.bit())
    }

    pub fn set(&mut self, kind: EvidenceKind) {
        self.0 |= kind.bit();
    }

    pub fn clear(&mut self, kind: EvidenceKind) {
        self.0 &= !kind.bit();
    }

    pub fn contains(self, kind: EvidenceKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Three unique pieces of evidence are enough to name a ghost
    pub fn has_three_unique(self) -> bool {
        self.count() >= 3
    }

    /// Iterate the kinds present, in bit order
    pub fn kinds(self) -> impl Iterator<Item = EvidenceKind> {
        EvidenceKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }
}

impl fmt::Display for EvidenceMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let mut first = true;
        for kind in self.kinds() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", kind.label())?;
            first = false;
        }
        Ok(())
    }
}
