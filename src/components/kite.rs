use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::math;

/// Rigid-body state of the kite.
///
/// Positions and velocities are in the world frame (y up, operator at the
/// origin, kite downwind along +z). Rotation is stored as Euler angles:
/// x = pitch, y = yaw, z = roll [rad]. Torque is integrated per axis against
/// a diagonal inertia; there is no roll-coupled cross term in this model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KiteState {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Euler angles (pitch, yaw, roll) [rad]
    pub rotation: Vector3<f64>,

    /// Angular velocity per axis [rad/s]
    pub angular_velocity: Vector3<f64>,

    /// Low-pass filtered linear acceleration [m/s²]
    pub(crate) smoothed_acceleration: Vector3<f64>,

    /// Low-pass filtered angular acceleration [rad/s²]
    pub(crate) smoothed_angular_acceleration: Vector3<f64>,
}

impl KiteState {
    /// Canonical launch pose: at the end of a taut line of `line_length`
    /// anchored at `anchor`, raised to `elevation` above the horizon, pitched
    /// to match, at rest.
    pub fn launch(anchor: &Vector3<f64>, line_length: f64, elevation: f64) -> Self {
        let position = anchor
            + Vector3::new(
                0.0,
                line_length * elevation.sin(),
                line_length * elevation.cos(),
            );
        Self {
            position,
            velocity: Vector3::zeros(),
            rotation: Vector3::new(elevation, 0.0, 0.0),
            angular_velocity: Vector3::zeros(),
            smoothed_acceleration: Vector3::zeros(),
            smoothed_angular_acceleration: Vector3::zeros(),
        }
    }

    /// Restore this state to the canonical launch pose in place.
    pub fn reset_to_launch(&mut self, anchor: &Vector3<f64>, line_length: f64, elevation: f64) {
        *self = Self::launch(anchor, line_length, elevation);
    }

    /// Altitude above the ground plane [m]
    #[inline]
    pub fn altitude(&self) -> f64 {
        self.position.y
    }

    /// True when every field holds finite numbers.
    pub fn is_finite(&self) -> bool {
        math::is_finite(&self.position)
            && math::is_finite(&self.velocity)
            && math::is_finite(&self.rotation)
            && math::is_finite(&self.angular_velocity)
            && math::is_finite(&self.smoothed_acceleration)
            && math::is_finite(&self.smoothed_angular_acceleration)
    }
}
