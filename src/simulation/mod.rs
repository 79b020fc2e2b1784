pub mod casefile;
pub mod events;
pub mod runner;

pub use casefile::{CaseFile, CaseSnapshot};
pub use events::{EventLog, SimulationEvent};
pub use runner::{Simulation, SimulationReport};
