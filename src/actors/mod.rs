pub mod ghost;
pub mod hunter;
pub mod trail;

pub use ghost::Ghost;
pub use hunter::{Hunter, HunterOutcome};
pub use trail::Trail;
