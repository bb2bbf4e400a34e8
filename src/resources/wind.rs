use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::config::WindConfig;
use crate::utils::math;

/// Time-varying wind field state, updated once per sub-step by
/// [`crate::systems::WindSystem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindState {
    /// Instantaneous wind speed [m/s]
    pub current_speed: f64,
    /// Instantaneous wind direction, unit length
    pub current_direction: Vector3<f64>,
    /// User wind scale, clamped to [0, 1]
    pub user_scale: f64,
    /// Gust phase clock [s]; serialized so a restored run resumes the
    /// same gust phase
    pub clock: f64,
}

impl WindState {
    pub fn new(config: &WindConfig) -> Self {
        Self {
            current_speed: config.base_speed,
            current_direction: math::safe_normalize(&config.base_direction),
            user_scale: 1.0,
            clock: 0.0,
        }
    }

    /// Wind velocity vector [m/s]
    pub fn velocity(&self) -> Vector3<f64> {
        self.current_direction * self.current_speed
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.user_scale = scale.clamp(0.0, 1.0);
    }
}
