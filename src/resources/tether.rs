use serde::{Deserialize, Serialize};

use super::config::TetherConfig;

/// Control-line state: steering inputs written by the control layer and the
/// line lengths derived from them each sub-step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TetherState {
    /// Left line pull, clamped to [0, 1]
    pub left_input: f64,
    /// Right line pull, clamped to [0, 1]
    pub right_input: f64,
    /// Overall line length trim, clamped to [-1, 1] (±50%)
    pub overall_length_adjustment: f64,
    /// Left/right length split, clamped to [-1, 1] (±20%)
    pub differential_length_adjustment: f64,
    /// Derived left line length [m]
    pub left_line_length: f64,
    /// Derived right line length [m]
    pub right_line_length: f64,
}

impl TetherState {
    pub fn new(config: &TetherConfig) -> Self {
        Self {
            left_input: 0.0,
            right_input: 0.0,
            overall_length_adjustment: 0.0,
            differential_length_adjustment: 0.0,
            left_line_length: config.base_line_length,
            right_line_length: config.base_line_length,
        }
    }

    pub fn set_left_input(&mut self, input: f64) {
        self.left_input = input.clamp(0.0, 1.0);
    }

    pub fn set_right_input(&mut self, input: f64) {
        self.right_input = input.clamp(0.0, 1.0);
    }

    pub fn set_overall_length_adjustment(&mut self, adjustment: f64) {
        self.overall_length_adjustment = adjustment.clamp(-1.0, 1.0);
    }

    pub fn set_differential_length_adjustment(&mut self, adjustment: f64) {
        self.differential_length_adjustment = adjustment.clamp(-1.0, 1.0);
    }
}
