use nalgebra::Vector3;

use crate::components::KiteState;
use crate::resources::{KiteConfig, PhysicsConfig};
use crate::systems::error::PhysicsError;
use crate::utils::math;

/// Apply a net force to the kite for one fixed sub-step.
///
/// The raw acceleration is passed through an exponential low-pass filter
/// (`force_smoothing`; 1.0 disables it) before semi-implicit Euler
/// integration, suppressing single-frame force spikes. Velocity is damped
/// proportionally and capped at `max_velocity`.
///
/// A non-finite input force leaves the state untouched and returns
/// [`PhysicsError::NonFiniteForce`]; a non-finite result returns
/// [`PhysicsError::NumericalDivergence`], on which the caller must reset.
pub fn apply_force(
    kite: &mut KiteState,
    config: &KiteConfig,
    physics: &PhysicsConfig,
    force: &Vector3<f64>,
    dt: f64,
) -> Result<(), PhysicsError> {
    if !math::is_finite(force) {
        return Err(PhysicsError::NonFiniteForce);
    }

    let raw_acceleration = force / config.mass;
    let alpha = physics.force_smoothing;
    kite.smoothed_acceleration =
        kite.smoothed_acceleration * (1.0 - alpha) + raw_acceleration * alpha;

    kite.velocity += kite.smoothed_acceleration * dt;
    kite.velocity *= (1.0 - physics.linear_damping * dt).max(0.0);
    kite.velocity = math::clamp_norm(&kite.velocity, physics.max_velocity);
    kite.position += kite.velocity * dt;

    if !kite.is_finite() {
        return Err(PhysicsError::NumericalDivergence("linear state"));
    }
    Ok(())
}

/// Apply a torque to the kite for one fixed sub-step.
///
/// Mirrors [`apply_force`] per axis against the diagonal inertia: smoothing,
/// proportional damping, and a magnitude cap (`max_angular_velocity`, lower
/// than the linear cap), integrating into the Euler rotation.
pub fn apply_torque(
    kite: &mut KiteState,
    config: &KiteConfig,
    physics: &PhysicsConfig,
    torque: &Vector3<f64>,
    dt: f64,
) -> Result<(), PhysicsError> {
    if !math::is_finite(torque) {
        return Err(PhysicsError::NonFiniteTorque);
    }

    let raw_acceleration = torque.component_div(&config.moment_of_inertia);
    let alpha = physics.torque_smoothing;
    kite.smoothed_angular_acceleration =
        kite.smoothed_angular_acceleration * (1.0 - alpha) + raw_acceleration * alpha;

    kite.angular_velocity += kite.smoothed_angular_acceleration * dt;
    kite.angular_velocity *= (1.0 - physics.angular_damping * dt).max(0.0);
    kite.angular_velocity = math::clamp_norm(&kite.angular_velocity, physics.max_angular_velocity);
    kite.rotation += kite.angular_velocity * dt;

    if !kite.is_finite() {
        return Err(PhysicsError::NumericalDivergence("angular state"));
    }
    Ok(())
}
