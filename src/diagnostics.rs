use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Why the kite state was reset to the launch pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetReason {
    /// The host asked for a reset
    HostRequest,
    /// A non-finite value appeared in the kite state
    NumericalDivergence,
}

/// Recoverable incidents surfaced to the host.
///
/// None of these is fatal; the simulation has already recovered (discarded
/// the update, drained the accumulator, or reset the kite) by the time the
/// event is visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DiagnosticEvent {
    /// A non-finite net force was discarded before integration
    NonFiniteForceRejected,
    /// A non-finite torque was discarded before integration
    NonFiniteTorqueRejected,
    /// Tether geometry degenerated; the sub-step ran with zero line force
    TetherGeometryDegenerate,
    /// The kite state was reset to the canonical launch pose
    StateReset { reason: ResetReason },
    /// The sub-step bound was hit and banked time was dropped
    AccumulatorOverload { dropped_seconds: f64 },
}

/// Bounded queue of diagnostic events, drained by the host.
///
/// When full, the oldest event is dropped; a slow host can never make the
/// queue grow without bound.
#[derive(Debug, Clone)]
pub struct DiagnosticQueue {
    events: VecDeque<DiagnosticEvent>,
    capacity: usize,
}

impl Default for DiagnosticQueue {
    fn default() -> Self {
        Self::with_capacity(64)
    }
}

impl DiagnosticQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, event: DiagnosticEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Remove and return all pending events, oldest first.
    pub fn drain(&mut self) -> Vec<DiagnosticEvent> {
        self.events.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
