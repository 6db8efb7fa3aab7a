pub mod engine;
pub mod return_process;
pub mod stats;
pub mod summary;

pub use engine::{simulate, simulate_path, SimulationEngine};
pub use return_process::{FixedReturns, NormalReturns, ReturnSource};
pub use summary::{percentiles, probability_below, probability_of_loss, summarize, Summary};
