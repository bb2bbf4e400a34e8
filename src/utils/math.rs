use nalgebra::Vector3;
use std::f64::consts::PI;

/// Magnitude below which a vector is treated as zero-length.
pub const NORMALIZE_EPSILON: f64 = 1e-4;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Normalize a vector, returning the zero vector for near-zero input.
///
/// Never divides by a vanishing norm and never produces NaN components.
pub fn safe_normalize(v: &Vector3<f64>) -> Vector3<f64> {
    let norm = v.norm();
    if norm < NORMALIZE_EPSILON {
        Vector3::zeros()
    } else {
        v / norm
    }
}

/// Rescale a vector so its magnitude does not exceed `max`.
pub fn clamp_norm(v: &Vector3<f64>, max: f64) -> Vector3<f64> {
    let norm = v.norm();
    if norm > max && norm > 0.0 {
        v * (max / norm)
    } else {
        *v
    }
}

/// True when every component is a finite number.
#[inline]
pub fn is_finite(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.is_finite())
}
