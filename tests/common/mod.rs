use kitesim::{KiteSimulation, SimulationConfig, SimulationSnapshot};
use nalgebra::Vector3;

/// Default config with turbulence removed, for deterministic scenarios.
pub fn quiet_config() -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.wind.turbulence = 0.0;
    config
}

/// A simulation with every force source enabled and no turbulence.
pub fn quiet_sim() -> KiteSimulation {
    KiteSimulation::new(quiet_config()).expect("quiet config is valid")
}

/// Place the kite at `position`, at rest, keeping everything else as-is.
pub fn place_kite(sim: &mut KiteSimulation, position: Vector3<f64>) {
    let mut snapshot: SimulationSnapshot = sim.snapshot();
    snapshot.kite.position = position;
    snapshot.kite.velocity = Vector3::zeros();
    snapshot.kite.angular_velocity = Vector3::zeros();
    sim.restore(snapshot);
}

/// Step `sim` through `frames` host frames of 1/120 s each.
pub fn run_frames(sim: &mut KiteSimulation, frames: usize) {
    for _ in 0..frames {
        sim.update(1.0 / 120.0);
    }
}
