use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::errors::SimError;

/// Geometry and spring parameters of the two control lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TetherConfig {
    /// Unadjusted line length [m]
    pub base_line_length: f64,
    /// Spring constant of the line material
    pub elasticity: f64,
    /// Where the operator stands, fixed [m]
    pub operator_position: Vector3<f64>,
    /// Lateral distance between the operator's hands [m]
    pub hand_spacing: f64,
    /// Height of the hands above the ground [m]
    pub hand_height: f64,
    /// Scale from (sub-linear) tension to applied force
    pub tension_force_scale: f64,
    /// Yaw torque per unit of left/right tension difference [N⋅m]
    pub steering_sensitivity: f64,
    /// Velocity-proportional damping subtracted from the net line force [N⋅s/m]
    pub velocity_damping: f64,
    /// Net line force magnitude cap [N]
    pub max_force: f64,
}

/// Exponent of the tension-to-force response; sub-linear so large tensions
/// stay bounded.
pub const TENSION_FORCE_EXPONENT: f64 = 0.8;

impl Default for TetherConfig {
    fn default() -> Self {
        Self {
            base_line_length: 25.0,
            elasticity: 150.0,
            operator_position: Vector3::zeros(),
            hand_spacing: 0.7,
            hand_height: 1.0,
            tension_force_scale: 4.0,
            steering_sensitivity: 0.15,
            velocity_damping: 0.15,
            max_force: 60.0,
        }
    }
}

impl TetherConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.base_line_length <= 0.0 {
            return Err(SimError::InvalidConfig(
                "line length must be positive".into(),
            ));
        }
        if self.elasticity < 0.0 {
            return Err(SimError::InvalidConfig(
                "line elasticity must be non-negative".into(),
            ));
        }
        if self.max_force <= 0.0 {
            return Err(SimError::InvalidConfig(
                "line force cap must be positive".into(),
            ));
        }
        Ok(())
    }
}
