pub mod config;
pub mod error;
pub mod result;

pub use config::SimulationParameters;
pub use error::{Result, SimulationError};
pub use result::SimulationResult;
