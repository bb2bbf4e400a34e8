pub mod components;
pub mod diagnostics;
pub mod resources;
mod simulation;
pub mod systems;
pub mod utils;

pub use components::{Force, ForceAccumulator, ForceCategory, KiteState};
pub use diagnostics::{DiagnosticEvent, ResetReason};
pub use resources::{
    AeroCoefficients, GroundConfig, KiteConfig, PhysicsConfig, SimulationConfig, StabilizerConfig,
    TetherConfig, TetherState, WindConfig, WindState,
};
pub use simulation::{
    ForceToggles, KiteSimulation, SimulationSnapshot, TetherEndpoints,
};
pub use utils::{RngManager, SimError};
