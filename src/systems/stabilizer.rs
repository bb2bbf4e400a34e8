use nalgebra::Vector3;

use crate::components::KiteState;
use crate::resources::StabilizerConfig;
use crate::utils::math;

/// Gentle force keeping the kite inside the playable volume: pulls back
/// toward the operator's vertical axis once the kite strays beyond the
/// configured radius, and nudges the altitude toward the target.
pub fn stabilizing_force(kite: &KiteState, config: &StabilizerConfig) -> Vector3<f64> {
    let mut force = Vector3::zeros();

    let radial = Vector3::new(kite.position.x, 0.0, kite.position.z);
    let distance = radial.norm();
    if distance > config.horizontal_radius {
        force -=
            math::safe_normalize(&radial) * ((distance - config.horizontal_radius) * config.horizontal_strength);
    }

    force.y += (config.target_altitude - kite.position.y) * config.vertical_strength;
    force
}
