use nalgebra::Vector3;

use crate::components::KiteState;
use crate::resources::config::TENSION_FORCE_EXPONENT;
use crate::resources::{KiteConfig, TetherConfig, TetherState};
use crate::systems::error::PhysicsError;
use crate::utils::math;

/// Net line force and steering torque for one sub-step.
#[derive(Debug, Clone, PartialEq)]
pub struct TetherOutput {
    /// Net force on the kite, world frame [N]
    pub force: Vector3<f64>,
    /// Torque about the bridle point [N⋅m]
    pub torque: Vector3<f64>,
    pub left_tension: f64,
    pub right_tension: f64,
}

/// World positions of the operator's hands (left, right).
pub fn hand_positions(config: &TetherConfig) -> (Vector3<f64>, Vector3<f64>) {
    let half = config.hand_spacing / 2.0;
    let lift = Vector3::new(0.0, config.hand_height, 0.0);
    (
        config.operator_position + lift + Vector3::new(-half, 0.0, 0.0),
        config.operator_position + lift + Vector3::new(half, 0.0, 0.0),
    )
}

/// World position of the bridle connection point.
pub fn bridle_point(kite: &KiteState, config: &KiteConfig) -> Vector3<f64> {
    kite.position + config.bridle_offset
}

/// Derive the effective left/right line lengths from the base length and the
/// operator's trim adjustments (±50% overall, ±20% differential split).
pub fn update_line_geometry(state: &mut TetherState, config: &TetherConfig) {
    let overall = config.base_line_length * (1.0 + 0.5 * state.overall_length_adjustment);
    state.left_line_length = overall * (1.0 - 0.2 * state.differential_length_adjustment);
    state.right_line_length = overall * (1.0 + 0.2 * state.differential_length_adjustment);
}

/// Spring tension in one line.
///
/// Pulling the input shortens the effective length by up to 30%. Lines only
/// pull: a slack line carries zero tension. The quadratic term stiffens the
/// response against runaway stretch.
pub fn line_tension(distance: f64, nominal_length: f64, input: f64, elasticity: f64) -> f64 {
    let effective = nominal_length * (1.0 - input.clamp(0.0, 1.0) * 0.3);
    let strain = (distance / effective - 1.0).max(0.0);
    elasticity * strain * (1.0 + strain)
}

fn tension_to_force(tension: f64, config: &TetherConfig) -> f64 {
    tension.powf(TENSION_FORCE_EXPONENT) * config.tension_force_scale
}

/// Resolve both line tensions into a net force and a turning torque at the
/// bridle point.
///
/// The yaw component carries the differential steering term: a tighter right
/// line yields a positive yaw torque, turning the kite toward it.
pub fn compute_force_and_torque(
    kite: &KiteState,
    state: &TetherState,
    config: &TetherConfig,
    kite_config: &KiteConfig,
) -> Result<TetherOutput, PhysicsError> {
    let (left_hand, right_hand) = hand_positions(config);
    let bridle = bridle_point(kite, kite_config);
    if !math::is_finite(&bridle) {
        return Err(PhysicsError::NonFiniteGeometry("bridle point"));
    }

    let to_left = left_hand - bridle;
    let to_right = right_hand - bridle;
    let left_distance = to_left.norm();
    let right_distance = to_right.norm();

    let left_tension = line_tension(
        left_distance,
        state.left_line_length,
        state.left_input,
        config.elasticity,
    );
    let right_tension = line_tension(
        right_distance,
        state.right_line_length,
        state.right_input,
        config.elasticity,
    );

    let left_force = math::safe_normalize(&to_left) * tension_to_force(left_tension, config);
    let right_force = math::safe_normalize(&to_right) * tension_to_force(right_tension, config);

    let damped = left_force + right_force - kite.velocity * config.velocity_damping;
    let force = math::clamp_norm(&damped, config.max_force);
    if !math::is_finite(&force) {
        return Err(PhysicsError::NonFiniteGeometry("net line force"));
    }

    let mut torque = kite_config.bridle_offset.cross(&force);
    torque.y += (right_tension - left_tension) * config.steering_sensitivity;
    if !math::is_finite(&torque) {
        return Err(PhysicsError::NonFiniteGeometry("line torque"));
    }

    Ok(TetherOutput {
        force,
        torque,
        left_tension,
        right_tension,
    })
}
