//! The closed table of ghost varieties and their evidence profiles
//!
//! Every ghost leaves exactly three kinds of evidence, and no two ghosts
//! share the same combination, so a complete case file names exactly one
//! ghost.

use serde::{Deserialize, Serialize};

use crate::evidence::mask::{EvidenceKind, EvidenceMask};

/// The 24 ghost varieties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GhostKind {
    Poltergeist,
    Mimic,
    Hantu,
    Jinn,
    Phantom,
    Banshee,
    Goryo,
    Bullies,
    Myling,
    Obake,
    Yurei,
    Oni,
    Moroi,
    Revenant,
    Shade,
    Onryo,
    Twins,
    Deogen,
    Thaye,
    Yokai,
    Wraith,
    Raiju,
    Mare,
    Spirit,
}

use self::GhostKind::*;
use crate::evidence::mask::EvidenceKind::*;

impl GhostKind {
    pub const ALL: [GhostKind; 24] = [
        Poltergeist,
        Mimic,
        Hantu,
        Jinn,
        Phantom,
        Banshee,
        Goryo,
        Bullies,
        Myling,
        Obake,
        Yurei,
        Oni,
        Moroi,
        Revenant,
        Shade,
        Onryo,
        Twins,
        Deogen,
        Thaye,
        Yokai,
        Wraith,
        Raiju,
        Mare,
        Spirit,
    ];

    /// The three evidence kinds this ghost can leave
    pub const fn profile(self) -> EvidenceMask {
        match self {
            Poltergeist => EvidenceMask::triple(Fingerprints, Temperature, Writing),
            Mimic => EvidenceMask::triple(Fingerprints, Temperature, Radio),
            Hantu => EvidenceMask::triple(Fingerprints, Temperature, Orbs),
            Jinn => EvidenceMask::triple(Fingerprints, Temperature, Emf),
            Phantom => EvidenceMask::triple(Fingerprints, Infrared, Radio),
            Banshee => EvidenceMask::triple(Fingerprints, Infrared, Orbs),
            Goryo => EvidenceMask::triple(Fingerprints, Infrared, Emf),
            Bullies => EvidenceMask::triple(Fingerprints, Writing, Radio),
            Myling => EvidenceMask::triple(Fingerprints, Writing, Emf),
            Obake => EvidenceMask::triple(Fingerprints, Orbs, Emf),
            Yurei => EvidenceMask::triple(Temperature, Infrared, Orbs),
            Oni => EvidenceMask::triple(Temperature, Infrared, Emf),
            Moroi => EvidenceMask::triple(Temperature, Writing, Radio),
            Revenant => EvidenceMask::triple(Temperature, Writing, Orbs),
            Shade => EvidenceMask::triple(Temperature, Writing, Emf),
            Onryo => EvidenceMask::triple(Temperature, Radio, Orbs),
            Twins => EvidenceMask::triple(Temperature, Radio, Emf),
            Deogen => EvidenceMask::triple(Infrared, Writing, Radio),
            Thaye => EvidenceMask::triple(Infrared, Writing, Orbs),
            Yokai => EvidenceMask::triple(Infrared, Radio, Orbs),
            Wraith => EvidenceMask::triple(Infrared, Radio, Emf),
            Raiju => EvidenceMask::triple(Infrared, Orbs, Emf),
            Mare => EvidenceMask::triple(Writing, Radio, Orbs),
            Spirit => EvidenceMask::triple(Writing, Radio, Emf),
        }
    }

    /// Table soundness: every profile holds exactly three kinds and no
    /// two ghosts share one. Asserted once at simulation startup.
    pub fn profile_table_is_sound() -> bool {
        GhostKind::ALL.iter().all(|g| g.profile().count() == 3)
            && GhostKind::ALL.iter().enumerate().all(|(i, a)| {
                GhostKind::ALL[i + 1..]
                    .iter()
                    .all(|b| a.profile() != b.profile())
            })
    }

    /// Exact-match lookup: which ghost does this evidence name?
    ///
    /// Returns `None` unless the mask equals some profile bit-for-bit; a
    /// superset or subset of a profile names nothing.
    pub fn from_profile(mask: EvidenceMask) -> Option<GhostKind> {
        GhostKind::ALL.into_iter().find(|g| g.profile() == mask)
    }

    pub fn label(self) -> &'static str {
        match self {
            Poltergeist => "Poltergeist",
            Mimic => "The Mimic",
            Hantu => "Hantu",
            Jinn => "Jinn",
            Phantom => "Phantom",
            Banshee => "Banshee",
            Goryo => "Goryo",
            Bullies => "The Bullies",
            Myling => "Myling",
            Obake => "Obake",
            Yurei => "Yurei",
            Oni => "Oni",
            Moroi => "Moroi",
            Revenant => "Revenant",
            Shade => "Shade",
            Onryo => "Onryo",
            Twins => "The Twins",
            Deogen => "Deogen",
            Thaye => "Thaye",
            Yokai => "Yokai",
            Wraith => "Wraith",
            Raiju => "Raiju",
            Mare => "The Mare",
            Spirit => "Spirit",
        }
    }
}
