mod kite;
mod physics;
mod simulation;
mod tether;
mod wind;

pub use kite::{AeroCoefficients, KiteConfig, STALL_ONSET_RATIO};
pub use physics::{GroundConfig, PhysicsConfig, StabilizerConfig};
pub use simulation::SimulationConfig;
pub use tether::{TetherConfig, TENSION_FORCE_EXPONENT};
pub use wind::WindConfig;
