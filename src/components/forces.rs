use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Sources of force acting on the kite during one sub-step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceCategory {
    Gravitational,
    Aerodynamic,
    Tether,
    Stabilizing,
    Ground,
}

/// A force contribution in the world frame [N].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    pub category: ForceCategory,
}

/// Collects the categorized forces of the current sub-step.
///
/// Cleared at the start of every sub-step; the per-category sums are kept
/// readable afterwards for telemetry and tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForceAccumulator {
    forces: Vec<Force>,
}

impl ForceAccumulator {
    pub fn new() -> Self {
        Self { forces: Vec::new() }
    }

    pub fn add(&mut self, vector: Vector3<f64>, category: ForceCategory) {
        self.forces.push(Force { vector, category });
    }

    pub fn clear(&mut self) {
        self.forces.clear();
    }

    /// Sum of all accumulated forces [N]
    pub fn net_force(&self) -> Vector3<f64> {
        self.forces.iter().map(|f| f.vector).sum()
    }

    /// Sum of the forces of one category [N]
    pub fn category_sum(&self, category: ForceCategory) -> Vector3<f64> {
        self.forces
            .iter()
            .filter(|f| f.category == category)
            .map(|f| f.vector)
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Force> {
        self.forces.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.forces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_net_force_sums_all_entries() {
        let mut acc = ForceAccumulator::new();
        acc.add(Vector3::new(1.0, 0.0, 0.0), ForceCategory::Tether);
        acc.add(Vector3::new(0.0, -2.0, 0.0), ForceCategory::Gravitational);
        acc.add(Vector3::new(0.0, 3.0, 1.0), ForceCategory::Aerodynamic);

        let net = acc.net_force();
        assert_relative_eq!(net.x, 1.0);
        assert_relative_eq!(net.y, 1.0);
        assert_relative_eq!(net.z, 1.0);
    }

    #[test]
    fn test_category_sum_filters() {
        let mut acc = ForceAccumulator::new();
        acc.add(Vector3::new(0.0, 1.0, 0.0), ForceCategory::Aerodynamic);
        acc.add(Vector3::new(0.0, 2.0, 0.0), ForceCategory::Aerodynamic);
        acc.add(Vector3::new(5.0, 0.0, 0.0), ForceCategory::Tether);

        assert_relative_eq!(acc.category_sum(ForceCategory::Aerodynamic).y, 3.0);
        assert_relative_eq!(acc.category_sum(ForceCategory::Tether).x, 5.0);
        assert_eq!(
            acc.category_sum(ForceCategory::Ground),
            Vector3::zeros()
        );
    }

    #[test]
    fn test_clear_empties_accumulator() {
        let mut acc = ForceAccumulator::new();
        acc.add(Vector3::new(1.0, 1.0, 1.0), ForceCategory::Stabilizing);
        acc.clear();
        assert!(acc.is_empty());
        assert_eq!(acc.net_force(), Vector3::zeros());
    }
}
