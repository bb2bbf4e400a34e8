use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::errors::SimError;

/// Static physical parameters of the kite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KiteConfig {
    /// Mass [kg]
    pub mass: f64,
    /// Sail area [m²]
    pub area: f64,
    /// Diagonal moment of inertia, one scalar per axis [kg⋅m²]
    pub moment_of_inertia: Vector3<f64>,
    /// Bridle connection point, offset from the center of mass [m]
    pub bridle_offset: Vector3<f64>,
    /// Elevation angle of the canonical launch pose [rad]
    pub launch_elevation: f64,
    /// Lift/drag curve parameters
    pub aero: AeroCoefficients,
}

/// Parameters of the simplified lift and drag curves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AeroCoefficients {
    /// Peak lift coefficient, attained at `optimal_aoa`
    pub max_lift: f64,
    /// Drag coefficient growth with angle of attack
    pub base_drag: f64,
    /// Parasitic drag floor at zero angle of attack
    pub min_drag: f64,
    /// Angle of attack of maximum lift [rad]
    pub optimal_aoa: f64,
}

/// Stall sets in at this multiple of the optimal angle of attack.
pub const STALL_ONSET_RATIO: f64 = 1.3;

impl Default for KiteConfig {
    fn default() -> Self {
        Self {
            mass: 0.25,
            area: 0.6,
            moment_of_inertia: Vector3::new(0.08, 0.06, 0.1),
            // Below and ahead of the center of mass, toward the operator
            bridle_offset: Vector3::new(0.0, -0.2, -0.3),
            launch_elevation: 30.0_f64.to_radians(),
            aero: AeroCoefficients::default(),
        }
    }
}

impl Default for AeroCoefficients {
    fn default() -> Self {
        Self {
            max_lift: 1.2,
            base_drag: 0.8,
            min_drag: 0.1,
            // ~15 degrees
            optimal_aoa: 0.26,
        }
    }
}

impl KiteConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.mass <= 0.0 {
            return Err(SimError::InvalidConfig("kite mass must be positive".into()));
        }
        if self.area <= 0.0 {
            return Err(SimError::InvalidConfig("kite area must be positive".into()));
        }
        if self.moment_of_inertia.iter().any(|i| *i <= 0.0) {
            return Err(SimError::InvalidConfig(
                "moment of inertia must be positive on every axis".into(),
            ));
        }
        if self.aero.optimal_aoa <= 0.0 || self.aero.optimal_aoa >= std::f64::consts::FRAC_PI_2 {
            return Err(SimError::InvalidConfig(
                "optimal angle of attack must lie in (0, pi/2)".into(),
            ));
        }
        Ok(())
    }
}
