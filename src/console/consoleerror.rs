use thiserror::Error;

use crate::math::interval::IntervalError;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("cannot write to output: {0}")]
    WriteError(std::io::Error),
    #[error("cannot read input: {0}")]
    ReadError(std::io::Error),
    #[error("cannot read left border")]
    InvalidLeftBorder,
    #[error("cannot read right border")]
    InvalidRightBorder,
    #[error(transparent)]
    DomainError(#[from] IntervalError),
}
