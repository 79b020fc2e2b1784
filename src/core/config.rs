//! Simulation configuration with documented constants
//!
//! All tuning values are collected here with explanations of their purpose
//! and how they interact with each other.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, WraithwoodError};

/// Configuration for a simulation run
///
/// The defaults reproduce the classic hunt pacing; changing them mostly
/// shifts how long a run lasts before every actor gives up.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === TERMINATION ===
    /// Boredom level beyond which an actor abandons the hunt
    ///
    /// Applies to hunters and the ghost alike. Boredom rises by one per
    /// quiet iteration and resets to zero on contact, so an actor that
    /// never sees the other side exits after `boredom_ceiling + 1`
    /// iterations.
    pub boredom_ceiling: u32,

    /// Fear level beyond which a hunter flees
    ///
    /// Fear rises by one per iteration spent in the same room as the
    /// ghost and never decreases, so enough encounters always drive a
    /// hunter out.
    pub fear_ceiling: u32,

    // === HOUSE SHAPE ===
    /// Maximum hunters simultaneously inside one room
    ///
    /// A move into a full room fails and the mover stays put for that
    /// iteration. Enforced under the destination room's lock.
    pub room_capacity: usize,

    /// Upper bound on rooms per house
    pub max_rooms: usize,

    /// Upper bound on connections per room
    pub max_connections: usize,

    // === HUNTER BEHAVIOR ===
    /// Percent chance an empty-handed hunter heads back to the van
    ///
    /// Models a hunter giving up on a lead. At 10, roughly one in ten
    /// fruitless room searches turns into a retreat along the trail.
    pub return_chance: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            boredom_ceiling: 15,
            fear_ceiling: 15,
            room_capacity: 8,
            max_rooms: 24,
            max_connections: 8,
            return_chance: 10,
        }
    }
}

impl SimConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text; absent fields keep their defaults
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: SimConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.room_capacity == 0 {
            return Err(WraithwoodError::InvalidConfig(
                "room_capacity must be at least 1".into(),
            ));
        }
        if self.max_rooms == 0 {
            return Err(WraithwoodError::InvalidConfig(
                "max_rooms must be at least 1".into(),
            ));
        }
        if self.max_connections == 0 {
            return Err(WraithwoodError::InvalidConfig(
                "max_connections must be at least 1".into(),
            ));
        }
        if self.return_chance > 100 {
            return Err(WraithwoodError::InvalidConfig(format!(
                "return_chance ({}) is a percentage and must be <= 100",
                self.return_chance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let config = SimConfig {
            room_capacity: 0,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_overflowing_return_chance() {
        let config = SimConfig {
            return_chance: 101,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SimConfig::from_toml("boredom_ceiling = 3\n").unwrap();
        assert_eq!(config.boredom_ceiling, 3);
        assert_eq!(config.fear_ceiling, SimConfig::default().fear_ceiling);
        assert_eq!(config.room_capacity, 8);
    }
}
