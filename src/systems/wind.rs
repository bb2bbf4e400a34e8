use nalgebra::Vector3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use crate::resources::{WindConfig, WindState};
use crate::utils::math;

/// Fraction of the base speed the wind never drops below, keeping the
/// aerodynamic model away from the zero-wind singularity.
pub const SPEED_FLOOR_RATIO: f64 = 0.1;

/// Advances the wind field: sinusoidal gust plus seeded uniform turbulence.
///
/// The noise source is injected so a test harness can reproduce (or, with
/// `turbulence = 0`, entirely remove) the random component.
#[derive(Debug)]
pub struct WindSystem {
    noise: ChaCha8Rng,
}

impl WindSystem {
    pub fn new(noise: ChaCha8Rng) -> Self {
        Self { noise }
    }

    /// Replace the noise stream, e.g. to replay a recorded run.
    pub fn reseed(&mut self, noise: ChaCha8Rng) {
        self.noise = noise;
    }

    pub fn update(&mut self, state: &mut WindState, config: &WindConfig, dt: f64) {
        state.clock += dt;

        let gust = (state.clock * config.gust_frequency).sin() * config.gust_strength;
        // With turbulence off the RNG stream is not consumed, so gust-only
        // runs are fully deterministic.
        let turbulence = if config.turbulence > 0.0 {
            let half = config.turbulence / 2.0;
            self.noise.gen_range(-half..=half)
        } else {
            0.0
        };

        let floor = SPEED_FLOOR_RATIO * config.base_speed;
        state.current_speed =
            (config.base_speed * (1.0 + gust + turbulence) * state.user_scale).max(floor);

        if config.turbulence > 0.0 {
            let offset = Vector3::new(
                self.noise.gen_range(-1.0..=1.0),
                self.noise.gen_range(-1.0..=1.0),
                self.noise.gen_range(-1.0..=1.0),
            ) * (config.turbulence * 0.1);
            let perturbed = math::safe_normalize(&(state.current_direction + offset));
            state.current_direction = if perturbed == Vector3::zeros() {
                math::safe_normalize(&config.base_direction)
            } else {
                perturbed
            };
        }
    }

    /// Point the wind along `direction`, as both the mean and the current
    /// direction. A degenerate vector is rejected.
    pub fn set_direction(
        state: &mut WindState,
        config: &mut WindConfig,
        direction: &Vector3<f64>,
    ) {
        let unit = math::safe_normalize(direction);
        if unit == Vector3::zeros() {
            warn!("ignoring degenerate wind direction {direction:?}");
            return;
        }
        config.base_direction = unit;
        state.current_direction = unit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::RngManager;
    use approx::assert_relative_eq;

    fn system(seed: u64) -> WindSystem {
        WindSystem::new(RngManager::new(seed).get_rng("wind"))
    }

    #[test]
    fn test_gust_is_deterministic_without_turbulence() {
        let config = WindConfig {
            turbulence: 0.0,
            ..Default::default()
        };
        let mut state = WindState::new(&config);
        let mut wind = system(1);

        let dt = 0.1;
        wind.update(&mut state, &config, dt);

        let expected = config.base_speed
            * (1.0 + (dt * config.gust_frequency).sin() * config.gust_strength);
        assert_relative_eq!(state.current_speed, expected, epsilon = 1e-12);
        // Direction untouched without turbulence
        assert_eq!(state.current_direction, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_speed_floor_at_zero_scale() {
        let config = WindConfig::default();
        let mut state = WindState::new(&config);
        state.set_scale(0.0);
        let mut wind = system(2);

        for _ in 0..200 {
            wind.update(&mut state, &config, 1.0 / 120.0);
            assert_relative_eq!(
                state.current_speed,
                SPEED_FLOOR_RATIO * config.base_speed,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_direction_stays_unit_length_under_turbulence() {
        let config = WindConfig {
            turbulence: 0.8,
            ..Default::default()
        };
        let mut state = WindState::new(&config);
        let mut wind = system(3);

        for _ in 0..500 {
            wind.update(&mut state, &config, 1.0 / 120.0);
            assert_relative_eq!(state.current_direction.norm(), 1.0, epsilon = 1e-9);
            assert!(state.current_speed >= SPEED_FLOOR_RATIO * config.base_speed);
        }
    }

    #[test]
    fn test_same_seed_same_wind() {
        let config = WindConfig::default();

        let mut state_a = WindState::new(&config);
        let mut state_b = WindState::new(&config);
        let mut wind_a = system(42);
        let mut wind_b = system(42);

        for _ in 0..100 {
            wind_a.update(&mut state_a, &config, 1.0 / 120.0);
            wind_b.update(&mut state_b, &config, 1.0 / 120.0);
        }
        assert_eq!(state_a, state_b);
    }

    #[test]
    fn test_set_direction_rejects_zero() {
        let mut config = WindConfig::default();
        let mut state = WindState::new(&config);
        let before = state.current_direction;

        WindSystem::set_direction(&mut state, &mut config, &Vector3::zeros());
        assert_eq!(state.current_direction, before);

        WindSystem::set_direction(&mut state, &mut config, &Vector3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(state.current_direction.x, 1.0);
        assert_relative_eq!(config.base_direction.x, 1.0);
    }
}
