use nalgebra::Vector3;
use std::f64::consts::FRAC_PI_2;

use crate::components::KiteState;
use crate::resources::{AeroCoefficients, KiteConfig, WindState};
use crate::resources::config::STALL_ONSET_RATIO;
use crate::utils::math;

/// Lift and drag acting on the kite, world frame [N].
#[derive(Debug, Clone, PartialEq)]
pub struct AeroForces {
    pub lift: Vector3<f64>,
    pub drag: Vector3<f64>,
    /// Angle of attack the forces were computed at [rad]
    pub angle_of_attack: f64,
}

impl AeroForces {
    pub fn zero() -> Self {
        Self {
            lift: Vector3::zeros(),
            drag: Vector3::zeros(),
            angle_of_attack: 0.0,
        }
    }

    pub fn total(&self) -> Vector3<f64> {
        self.lift + self.drag
    }
}

/// Kite surface normal from pitch and yaw only.
///
/// Orientation proxy, not a full rotation matrix: roll does not tilt the
/// normal in this model. At zero pitch/yaw the sail faces straight downwind
/// (+z), so the angle of attack under pure pitch equals the pitch angle.
pub fn surface_normal(rotation: &Vector3<f64>) -> Vector3<f64> {
    let (pitch, yaw) = (rotation.x, rotation.y);
    Vector3::new(
        yaw.sin() * pitch.cos(),
        pitch.sin(),
        yaw.cos() * pitch.cos(),
    )
}

/// Lift coefficient over angle of attack: a sine curve peaking at
/// `optimal_aoa`, scaled past stall onset by a factor falling linearly to
/// zero at 90°.
pub fn lift_coefficient(aoa: f64, coeffs: &AeroCoefficients) -> f64 {
    let onset = STALL_ONSET_RATIO * coeffs.optimal_aoa;
    let curve = |a: f64| coeffs.max_lift * (a * FRAC_PI_2 / coeffs.optimal_aoa).sin();

    if aoa <= onset {
        curve(aoa).max(0.0)
    } else {
        let span = (FRAC_PI_2 - onset).max(f64::EPSILON);
        let stall_factor = (1.0 - (aoa - onset) / span).clamp(0.0, 1.0);
        curve(onset).max(0.0) * stall_factor
    }
}

/// Drag coefficient over angle of attack, monotonically increasing.
pub fn drag_coefficient(aoa: f64, coeffs: &AeroCoefficients) -> f64 {
    coeffs.min_drag + coeffs.base_drag * aoa.sin()
}

/// Compute lift and drag from the relative airflow over the kite.
///
/// Below a relative speed of 1e-4 m/s there is no airflow and no force.
pub fn compute_forces(
    kite: &KiteState,
    config: &KiteConfig,
    wind: &WindState,
    air_density: f64,
) -> AeroForces {
    let relative = wind.velocity() - kite.velocity;
    let speed = relative.norm();
    if speed < math::NORMALIZE_EPSILON {
        return AeroForces::zero();
    }
    let flow_dir = relative / speed;

    let normal = surface_normal(&kite.rotation);
    let aoa = flow_dir.dot(&normal).clamp(-1.0, 1.0).acos();

    let dynamic_pressure = 0.5 * air_density * speed * speed;
    let lift_magnitude = dynamic_pressure * lift_coefficient(aoa, &config.aero) * config.area;
    let drag_magnitude = dynamic_pressure * drag_coefficient(aoa, &config.aero) * config.area;

    // Drag pushes the kite along the airflow; lift is perpendicular to the
    // flow, tilted toward the sail normal. The double cross product projects
    // the normal onto the plane perpendicular to the flow.
    let drag = flow_dir * drag_magnitude;
    let mut lift_dir = math::safe_normalize(&flow_dir.cross(&normal).cross(&flow_dir));
    if lift_dir == Vector3::zeros() {
        // Flow parallel to the normal: no preferred lateral direction
        lift_dir = Vector3::new(0.0, 1.0, 0.0);
    }
    let lift = lift_dir * lift_magnitude;

    AeroForces {
        lift,
        drag,
        angle_of_attack: aoa,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::WindConfig;
    use approx::assert_relative_eq;

    fn coeffs() -> AeroCoefficients {
        AeroCoefficients::default()
    }

    fn kite_at_rest() -> KiteState {
        KiteState::launch(&Vector3::zeros(), 25.0, 0.0)
    }

    #[test]
    fn test_lift_coefficient_zero_at_bounds() {
        let c = coeffs();
        assert_relative_eq!(lift_coefficient(0.0, &c), 0.0, epsilon = 1e-12);
        assert_relative_eq!(lift_coefficient(FRAC_PI_2, &c), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_lift_coefficient_peaks_at_optimal() {
        let c = coeffs();
        let peak = lift_coefficient(c.optimal_aoa, &c);
        assert_relative_eq!(peak, c.max_lift, epsilon = 1e-12);

        for aoa in [0.05, 0.1, 0.2, 0.4, 0.8, 1.2] {
            assert!(lift_coefficient(aoa, &c) <= peak + 1e-12);
        }
    }

    #[test]
    fn test_lift_decreases_monotonically_past_stall() {
        let c = coeffs();
        let onset = STALL_ONSET_RATIO * c.optimal_aoa;

        let mut previous = lift_coefficient(onset, &c);
        let steps = 50;
        for i in 1..=steps {
            let aoa = onset + (FRAC_PI_2 - onset) * (i as f64) / (steps as f64);
            let cl = lift_coefficient(aoa, &c);
            assert!(
                cl <= previous + 1e-12,
                "lift coefficient rose past stall: {cl} > {previous} at aoa {aoa}"
            );
            assert!(cl >= 0.0);
            previous = cl;
        }
    }

    #[test]
    fn test_drag_increases_with_aoa() {
        let c = coeffs();
        let mut previous = drag_coefficient(0.0, &c);
        assert_relative_eq!(previous, c.min_drag);
        for i in 1..=20 {
            let aoa = FRAC_PI_2 * (i as f64) / 20.0;
            let cd = drag_coefficient(aoa, &c);
            assert!(cd >= previous);
            previous = cd;
        }
    }

    #[test]
    fn test_aoa_equals_pitch_for_pure_pitch() {
        let config = KiteConfig::default();
        let wind_config = WindConfig::default();
        let mut wind = WindState::new(&wind_config);
        wind.current_speed = 6.0;
        wind.current_direction = Vector3::new(0.0, 0.0, 1.0);

        let mut kite = kite_at_rest();
        kite.velocity = Vector3::zeros();
        kite.rotation = Vector3::new(0.2, 0.0, 0.0);

        let aero = compute_forces(&kite, &config, &wind, 1.225);
        assert_relative_eq!(aero.angle_of_attack, 0.2, epsilon = 1e-9);
    }

    #[test]
    fn test_no_airflow_no_force() {
        let config = KiteConfig::default();
        let wind_config = WindConfig::default();
        let mut wind = WindState::new(&wind_config);
        wind.current_speed = 3.0;

        let mut kite = kite_at_rest();
        // Kite rides exactly with the wind
        kite.velocity = wind.velocity();

        let aero = compute_forces(&kite, &config, &wind, 1.225);
        assert_eq!(aero, AeroForces::zero());
    }

    #[test]
    fn test_drag_points_downwind() {
        let config = KiteConfig::default();
        let wind_config = WindConfig::default();
        let mut wind = WindState::new(&wind_config);
        wind.current_speed = 5.0;
        wind.current_direction = Vector3::new(0.0, 0.0, 1.0);

        let mut kite = kite_at_rest();
        kite.rotation = Vector3::new(0.3, 0.0, 0.0);

        let aero = compute_forces(&kite, &config, &wind, 1.225);
        assert!(aero.drag.z > 0.0, "drag should push the kite downwind");
        // Lift is perpendicular to the flow
        assert_relative_eq!(
            aero.lift.dot(&wind.current_direction),
            0.0,
            epsilon = 1e-9
        );
        assert!(aero.lift.y > 0.0, "pitched-up kite should lift upward");
    }

    #[test]
    fn test_degenerate_lift_direction_defaults_up() {
        let config = KiteConfig::default();
        let wind_config = WindConfig::default();
        let mut wind = WindState::new(&wind_config);
        wind.current_speed = 5.0;
        wind.current_direction = Vector3::new(0.0, 0.0, 1.0);

        // Normal exactly aligned with the flow: zero pitch/yaw
        let mut kite = kite_at_rest();
        kite.rotation = Vector3::zeros();

        let aero = compute_forces(&kite, &config, &wind, 1.225);
        // Zero lift coefficient at zero AoA, but the direction fallback must
        // still produce finite numbers
        assert!(math::is_finite(&aero.lift));
        assert!(math::is_finite(&aero.drag));
    }

    #[test]
    fn test_force_scales_with_dynamic_pressure() {
        let config = KiteConfig::default();
        let wind_config = WindConfig::default();
        let mut wind = WindState::new(&wind_config);
        wind.current_direction = Vector3::new(0.0, 0.0, 1.0);

        let mut kite = kite_at_rest();
        kite.rotation = Vector3::new(config.aero.optimal_aoa, 0.0, 0.0);

        wind.current_speed = 4.0;
        let slow = compute_forces(&kite, &config, &wind, 1.225);
        wind.current_speed = 8.0;
        let fast = compute_forces(&kite, &config, &wind, 1.225);

        // Doubling the airspeed quadruples the force
        assert_relative_eq!(fast.drag.norm() / slow.drag.norm(), 4.0, epsilon = 1e-9);
        assert_relative_eq!(fast.lift.norm() / slow.lift.norm(), 4.0, epsilon = 1e-9);
    }
}
