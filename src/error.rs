use thiserror::Error;

/// Errors raised at the edges of the simulation: status files and arguments.
/// Simulation steps themselves never fail.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("gas value {gas} is over the tank capacity of {capacity}")]
    GasOverCapacity { gas: usize, capacity: usize },

    #[error("unknown direction '{0}'")]
    BadDirection(String),

    #[error("bad argument: {0}")]
    BadArgument(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
