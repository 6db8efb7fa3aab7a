#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("insufficient samples for rank percentile {fraction} over {len} values")]
    InsufficientSamples { fraction: f64, len: usize },
}

pub type Result<T> = std::result::Result<T, SimulationError>;
