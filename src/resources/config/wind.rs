use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::errors::SimError;
use crate::utils::math;

/// Base wind field parameters. The time-varying state lives in
/// [`crate::resources::WindState`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindConfig {
    /// Mean wind speed [m/s]
    pub base_speed: f64,
    /// Mean wind direction, unit length
    pub base_direction: Vector3<f64>,
    /// Relative amplitude of the sinusoidal gust
    pub gust_strength: f64,
    /// Gust oscillation frequency [rad/s]
    pub gust_frequency: f64,
    /// Turbulence level; samples are drawn from ±turbulence/2
    pub turbulence: f64,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            base_speed: 5.0,
            base_direction: Vector3::new(0.0, 0.0, 1.0),
            gust_strength: 0.3,
            gust_frequency: 0.5,
            turbulence: 0.15,
        }
    }
}

impl WindConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.base_speed < 0.0 {
            return Err(SimError::InvalidConfig(
                "base wind speed must be non-negative".into(),
            ));
        }
        if math::safe_normalize(&self.base_direction) == Vector3::zeros() {
            return Err(SimError::InvalidConfig(
                "base wind direction must be non-zero".into(),
            ));
        }
        if self.turbulence < 0.0 {
            return Err(SimError::InvalidConfig(
                "turbulence must be non-negative".into(),
            ));
        }
        Ok(())
    }
}
