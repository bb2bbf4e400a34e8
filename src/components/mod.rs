mod forces;
mod kite;

pub use forces::{Force, ForceAccumulator, ForceCategory};
pub use kite::KiteState;
