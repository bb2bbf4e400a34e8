use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::components::{ForceAccumulator, ForceCategory, KiteState};
use crate::diagnostics::{DiagnosticEvent, DiagnosticQueue, ResetReason};
use crate::resources::{SimClock, SimulationConfig, TetherState, WindState};
use crate::systems::{
    aerodynamics, collision, integrator, stabilizer, tether, PhysicsError, WindSystem,
};
use crate::utils::{RngManager, SimError};

/// Per-category force enable flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceToggles {
    pub gravity: bool,
    pub aerodynamics: bool,
    pub tether: bool,
    pub ground_collision: bool,
}

impl Default for ForceToggles {
    fn default() -> Self {
        Self {
            gravity: true,
            aerodynamics: true,
            tether: true,
            ground_collision: true,
        }
    }
}

/// Line endpoints for the rendering boundary, world frame [m].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TetherEndpoints {
    pub left_hand: Vector3<f64>,
    pub right_hand: Vector3<f64>,
    pub bridle_point: Vector3<f64>,
}

/// Serializable copy of the full mutable simulation state.
///
/// Restoring a snapshot and reseeding the noise source on both sides resumes
/// a bit-identical trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub kite: KiteState,
    pub wind: WindState,
    pub tether: TetherState,
    pub clock: SimClock,
    pub toggles: ForceToggles,
    pub running: bool,
}

/// The kite simulation: owns all state and is its sole mutator.
///
/// The host calls [`update`](Self::update) once per frame with the elapsed
/// wall-clock seconds; the banked time is drained in fixed sub-steps. The
/// control layer writes steering inputs through the setters between frames.
pub struct KiteSimulation {
    config: SimulationConfig,
    kite: KiteState,
    wind: WindState,
    tether: TetherState,
    clock: SimClock,
    toggles: ForceToggles,
    wind_system: WindSystem,
    rng: RngManager,
    forces: ForceAccumulator,
    diagnostics: DiagnosticQueue,
    last_tensions: (f64, f64),
    running: bool,
}

impl KiteSimulation {
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        Self::with_seed(config, 0)
    }

    /// Build a simulation whose turbulence stream derives from `seed`.
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Result<Self, SimError> {
        config.validate()?;

        let rng = RngManager::new(seed);
        let kite = KiteState::launch(
            &config.tether.operator_position,
            config.tether.base_line_length,
            config.kite.launch_elevation,
        );
        let wind = WindState::new(&config.wind);
        let tether = TetherState::new(&config.tether);
        let wind_system = WindSystem::new(rng.get_rng("wind"));

        Ok(Self {
            config,
            kite,
            wind,
            tether,
            clock: SimClock::new(),
            toggles: ForceToggles::default(),
            wind_system,
            rng,
            forces: ForceAccumulator::new(),
            diagnostics: DiagnosticQueue::default(),
            last_tensions: (0.0, 0.0),
            running: true,
        })
    }

    /// Advance the simulation by one host frame of `delta_time` seconds.
    ///
    /// Returns the number of fixed sub-steps executed. Idle simulations
    /// ignore ticks entirely. The sub-step count is bounded by
    /// `max_substeps`; when the bound is hit, remaining banked time is
    /// dropped and a [`DiagnosticEvent::AccumulatorOverload`] is queued.
    pub fn update(&mut self, delta_time: f64) -> u32 {
        if !self.running {
            return 0;
        }

        self.clock
            .begin_frame(delta_time, self.config.physics.max_frame_delta);
        let frame_delta = delta_time.clamp(0.0, self.config.physics.max_frame_delta)
            * self.clock.time_scale();
        self.wind_system
            .update(&mut self.wind, &self.config.wind, frame_delta);

        let step = self.config.physics.time_step;
        let mut substeps = 0;
        while substeps < self.config.physics.max_substeps && self.clock.try_consume(step) {
            self.step_fixed(step);
            substeps += 1;
        }

        if self.clock.accumulator() >= step {
            let dropped = self.clock.drain();
            warn!(dropped, "sub-step bound hit, dropping banked time");
            self.diagnostics.push(DiagnosticEvent::AccumulatorOverload {
                dropped_seconds: dropped,
            });
        }
        substeps
    }

    /// One fixed physics sub-step. Force order is part of the model:
    /// gravity → aerodynamics → tether → stabilizer → integration →
    /// ground collision → finite check.
    fn step_fixed(&mut self, dt: f64) {
        tether::update_line_geometry(&mut self.tether, &self.config.tether);

        self.forces.clear();
        self.last_tensions = (0.0, 0.0);

        if self.toggles.gravity {
            self.forces.add(
                Vector3::new(0.0, -self.config.kite.mass * self.config.physics.gravity, 0.0),
                ForceCategory::Gravitational,
            );
        }

        if self.toggles.aerodynamics {
            let aero = aerodynamics::compute_forces(
                &self.kite,
                &self.config.kite,
                &self.wind,
                self.config.physics.air_density,
            );
            self.forces.add(aero.lift, ForceCategory::Aerodynamic);
            self.forces.add(aero.drag, ForceCategory::Aerodynamic);
        }

        let mut line_torque = Vector3::zeros();
        if self.toggles.tether {
            match tether::compute_force_and_torque(
                &self.kite,
                &self.tether,
                &self.config.tether,
                &self.config.kite,
            ) {
                Ok(output) => {
                    self.forces.add(output.force, ForceCategory::Tether);
                    line_torque = output.torque;
                    self.last_tensions = (output.left_tension, output.right_tension);
                }
                Err(err) => {
                    debug!(%err, "tether geometry degenerated, using zero line force");
                    self.diagnostics
                        .push(DiagnosticEvent::TetherGeometryDegenerate);
                }
            }
        }

        self.forces.add(
            stabilizer::stabilizing_force(&self.kite, &self.config.stabilizer),
            ForceCategory::Stabilizing,
        );

        let net = self.forces.net_force();
        match integrator::apply_force(
            &mut self.kite,
            &self.config.kite,
            &self.config.physics,
            &net,
            dt,
        ) {
            Ok(()) => {}
            Err(PhysicsError::NonFiniteForce) => {
                warn!("discarding non-finite net force");
                self.diagnostics.push(DiagnosticEvent::NonFiniteForceRejected);
            }
            Err(_) => {
                self.reset_with_reason(ResetReason::NumericalDivergence);
                return;
            }
        }

        match integrator::apply_torque(
            &mut self.kite,
            &self.config.kite,
            &self.config.physics,
            &line_torque,
            dt,
        ) {
            Ok(()) => {}
            Err(PhysicsError::NonFiniteTorque) => {
                warn!("discarding non-finite torque");
                self.diagnostics
                    .push(DiagnosticEvent::NonFiniteTorqueRejected);
            }
            Err(_) => {
                self.reset_with_reason(ResetReason::NumericalDivergence);
                return;
            }
        }

        if self.toggles.ground_collision {
            if let Some(contact) = collision::resolve_ground(
                &mut self.kite,
                &self.config.ground,
                self.config.kite.mass,
                dt,
            ) {
                self.forces.add(contact.repulsion, ForceCategory::Ground);
            }
        }

        if !self.kite.is_finite() {
            self.reset_with_reason(ResetReason::NumericalDivergence);
        }
    }

    fn reset_with_reason(&mut self, reason: ResetReason) {
        self.kite.reset_to_launch(
            &self.config.tether.operator_position,
            self.config.tether.base_line_length,
            self.config.kite.launch_elevation,
        );
        self.last_tensions = (0.0, 0.0);
        if reason == ResetReason::NumericalDivergence {
            warn!("kite state diverged, resetting to launch pose");
        }
        self.diagnostics
            .push(DiagnosticEvent::StateReset { reason });
    }

    // ---- control boundary ------------------------------------------------

    pub fn set_left_input(&mut self, input: f64) {
        self.tether.set_left_input(input);
    }

    pub fn set_right_input(&mut self, input: f64) {
        self.tether.set_right_input(input);
    }

    pub fn set_overall_line_length(&mut self, adjustment: f64) {
        self.tether.set_overall_length_adjustment(adjustment);
    }

    pub fn set_differential_line_length(&mut self, adjustment: f64) {
        self.tether.set_differential_length_adjustment(adjustment);
    }

    pub fn set_wind_speed_scale(&mut self, scale: f64) {
        self.wind.set_scale(scale);
    }

    pub fn set_wind_direction(&mut self, direction: Vector3<f64>) {
        WindSystem::set_direction(&mut self.wind, &mut self.config.wind, &direction);
    }

    pub fn set_time_scale(&mut self, scale: f64) {
        self.clock.set_time_scale(scale);
    }

    pub fn set_physics_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Reset the kite to its canonical launch pose. Inputs, wind phase and
    /// banked time are left untouched.
    pub fn reset(&mut self) {
        self.reset_with_reason(ResetReason::HostRequest);
    }

    pub fn toggles(&self) -> ForceToggles {
        self.toggles
    }

    pub fn toggles_mut(&mut self) -> &mut ForceToggles {
        &mut self.toggles
    }

    /// Re-derive the turbulence stream from `seed`, e.g. to replay a
    /// restored snapshot deterministically.
    pub fn reseed_noise(&mut self, seed: u64) {
        self.rng = RngManager::new(seed);
        self.wind_system.reseed(self.rng.get_rng("wind"));
    }

    // ---- read boundary ---------------------------------------------------

    pub fn kite(&self) -> &KiteState {
        &self.kite
    }

    pub fn wind(&self) -> &WindState {
        &self.wind
    }

    pub fn tether(&self) -> &TetherState {
        &self.tether
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Simulated seconds consumed by sub-steps so far
    pub fn elapsed_seconds(&self) -> f64 {
        self.clock.elapsed_seconds()
    }

    /// Left/right line tensions of the last sub-step
    pub fn line_tensions(&self) -> (f64, f64) {
        self.last_tensions
    }

    /// Forces gathered during the last sub-step, by category
    pub fn forces(&self) -> &ForceAccumulator {
        &self.forces
    }

    /// Line endpoints for drawing
    pub fn tether_endpoints(&self) -> TetherEndpoints {
        let (left_hand, right_hand) = tether::hand_positions(&self.config.tether);
        TetherEndpoints {
            left_hand,
            right_hand,
            bridle_point: tether::bridle_point(&self.kite, &self.config.kite),
        }
    }

    /// Remove and return all pending diagnostics, oldest first.
    pub fn drain_diagnostics(&mut self) -> Vec<DiagnosticEvent> {
        self.diagnostics.drain()
    }

    // ---- persistence -----------------------------------------------------

    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            kite: self.kite.clone(),
            wind: self.wind.clone(),
            tether: self.tether.clone(),
            clock: self.clock.clone(),
            toggles: self.toggles,
            running: self.running,
        }
    }

    pub fn restore(&mut self, snapshot: SimulationSnapshot) {
        self.kite = snapshot.kite;
        self.wind = snapshot.wind;
        self.tether = snapshot.tether;
        self.clock = snapshot.clock;
        self.toggles = snapshot.toggles;
        self.running = snapshot.running;
        self.last_tensions = (0.0, 0.0);
    }

    pub fn snapshot_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    pub fn restore_json(&mut self, json: &str) -> Result<(), SimError> {
        let snapshot: SimulationSnapshot = serde_json::from_str(json)?;
        self.restore(snapshot);
        Ok(())
    }
}
