use nalgebra::Vector3;

use crate::components::KiteState;
use crate::resources::GroundConfig;

/// Outcome of one ground contact resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundContact {
    /// Upward repulsion that was applied [N]
    pub repulsion: Vector3<f64>,
}

/// Resolve contact with the ground plane.
///
/// Below the buffer height the kite is pushed up proportionally to the
/// penetration, horizontal sliding is damped, the vertical velocity is
/// clamped non-negative, the position is clamped to the buffer, and a
/// leveling torque drives pitch and roll back to flat. Returns `None` when
/// the kite is airborne.
pub fn resolve_ground(
    kite: &mut KiteState,
    config: &GroundConfig,
    mass: f64,
    dt: f64,
) -> Option<GroundContact> {
    if kite.position.y >= config.buffer_height {
        return None;
    }

    let penetration = config.buffer_height - kite.position.y;
    let repulsion = Vector3::new(0.0, config.repulsion_strength * penetration, 0.0);
    kite.velocity += repulsion / mass * dt;

    let damping = (1.0 - config.horizontal_damping * dt).max(0.0);
    kite.velocity.x *= damping;
    kite.velocity.z *= damping;
    if kite.velocity.y < 0.0 {
        kite.velocity.y = 0.0;
    }
    kite.position.y = config.buffer_height;

    // Leveling torque against pitch and roll
    kite.angular_velocity.x -= kite.rotation.x * config.leveling_gain * dt;
    kite.angular_velocity.z -= kite.rotation.z * config.leveling_gain * dt;

    Some(GroundContact { repulsion })
}
