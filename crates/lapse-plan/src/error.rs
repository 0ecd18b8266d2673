use thiserror::Error;

use lapse_core::LapseError;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Core(#[from] LapseError),

    #[error("plan parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
