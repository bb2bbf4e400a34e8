use thiserror::Error;

/// Per-step numeric failures. These are recoverable: the stepper converts
/// them into diagnostics and either discards the offending update or resets
/// the kite to its launch pose.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("non-finite force input")]
    NonFiniteForce,

    #[error("non-finite torque input")]
    NonFiniteTorque,

    #[error("non-finite tether geometry: {0}")]
    NonFiniteGeometry(&'static str),

    #[error("numerical divergence in {0}")]
    NumericalDivergence(&'static str),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
