use kitesim::{KiteSimulation, SimulationConfig};

/// Drives the simulation at a fixed frame rate and prints telemetry, the way
/// a rendering host would.
fn main() {
    let config = SimulationConfig::default();
    let mut sim = KiteSimulation::with_seed(config, 42).expect("default config is valid");

    // Gentle left turn with a bit of wind backed off
    sim.set_left_input(0.4);
    sim.set_wind_speed_scale(0.8);

    let frame = 1.0 / 60.0;
    for i in 0..600 {
        sim.update(frame);

        if i % 60 == 0 {
            let kite = sim.kite();
            let (left, right) = sim.line_tensions();
            println!(
                "t={:5.2}s  pos=({:6.2}, {:6.2}, {:6.2})  yaw={:5.2}  wind={:4.2} m/s  tension L/R = {:5.1}/{:5.1}",
                sim.elapsed_seconds(),
                kite.position.x,
                kite.position.y,
                kite.position.z,
                kite.rotation.y,
                sim.wind().current_speed,
                left,
                right,
            );
        }
    }

    for event in sim.drain_diagnostics() {
        println!("diagnostic: {event:?}");
    }
}
