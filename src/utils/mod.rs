pub mod errors;
pub mod math;
pub mod rng;

pub use errors::SimError;
pub use rng::RngManager;
