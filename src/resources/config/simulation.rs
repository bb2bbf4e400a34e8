use serde::{Deserialize, Serialize};

use super::kite::KiteConfig;
use super::physics::{GroundConfig, PhysicsConfig, StabilizerConfig};
use super::tether::TetherConfig;
use super::wind::WindConfig;
use crate::utils::errors::SimError;

/// Aggregate configuration of one simulation instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub kite: KiteConfig,
    pub wind: WindConfig,
    pub tether: TetherConfig,
    pub stabilizer: StabilizerConfig,
    pub ground: GroundConfig,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        self.physics.validate()?;
        self.kite.validate()?;
        self.wind.validate()?;
        self.tether.validate()?;
        Ok(())
    }

    pub fn load(path: &str) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }
}
