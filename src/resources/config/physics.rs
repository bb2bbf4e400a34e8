use serde::{Deserialize, Serialize};

use crate::utils::errors::SimError;

/// Integration and environment constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Fixed sub-step size [s]
    pub time_step: f64,
    /// Upper bound on sub-steps per host frame
    pub max_substeps: u32,
    /// Host frame deltas above this are clamped [s]
    pub max_frame_delta: f64,
    /// Gravitational acceleration [m/s²]
    pub gravity: f64,
    /// Air density [kg/m³]
    pub air_density: f64,
    /// Exponential smoothing factor for linear acceleration, (0, 1].
    /// 1.0 disables the filter.
    pub force_smoothing: f64,
    /// Exponential smoothing factor for angular acceleration, (0, 1]
    pub torque_smoothing: f64,
    /// Proportional velocity damping rate [1/s]
    pub linear_damping: f64,
    /// Proportional angular velocity damping rate [1/s]
    pub angular_damping: f64,
    /// Velocity magnitude cap [m/s]
    pub max_velocity: f64,
    /// Angular velocity magnitude cap, lower than the linear cap [rad/s]
    pub max_angular_velocity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0 / 120.0,
            max_substeps: 10,
            max_frame_delta: 0.1,
            gravity: 9.81,
            air_density: 1.225,
            force_smoothing: 0.15,
            torque_smoothing: 0.15,
            linear_damping: 1.5,
            angular_damping: 3.0,
            max_velocity: 40.0,
            max_angular_velocity: 6.0,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.time_step <= 0.0 {
            return Err(SimError::InvalidConfig("time step must be positive".into()));
        }
        if self.max_substeps == 0 {
            return Err(SimError::InvalidConfig(
                "at least one sub-step per frame is required".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.force_smoothing) || self.force_smoothing == 0.0 {
            return Err(SimError::InvalidConfig(
                "force smoothing must lie in (0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.torque_smoothing) || self.torque_smoothing == 0.0 {
            return Err(SimError::InvalidConfig(
                "torque smoothing must lie in (0, 1]".into(),
            ));
        }
        if self.air_density <= 0.0 {
            return Err(SimError::InvalidConfig(
                "air density must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Keeps the kite inside the playable volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilizerConfig {
    /// Horizontal distance from the operator beyond which recentering engages [m]
    pub horizontal_radius: f64,
    /// Recentering force per meter beyond the radius [N/m]
    pub horizontal_strength: f64,
    /// Altitude the kite is gently pulled toward [m]
    pub target_altitude: f64,
    /// Vertical pull per meter of altitude error [N/m]
    pub vertical_strength: f64,
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self {
            horizontal_radius: 40.0,
            horizontal_strength: 0.4,
            target_altitude: 15.0,
            vertical_strength: 0.05,
        }
    }
}

/// Ground plane collision response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundConfig {
    /// Altitude below which contact handling engages [m]
    pub buffer_height: f64,
    /// Upward repulsion per meter of penetration [N/m]
    pub repulsion_strength: f64,
    /// Horizontal velocity damping rate while in contact [1/s]
    pub horizontal_damping: f64,
    /// Leveling torque rate against pitch/roll while in contact [1/s²]
    pub leveling_gain: f64,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            buffer_height: 0.5,
            repulsion_strength: 50.0,
            horizontal_damping: 4.0,
            leveling_gain: 2.0,
        }
    }
}
