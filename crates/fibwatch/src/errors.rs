use fibwatch_core::NumberRange;
use thiserror::Error;

/// Errors that can occur while reading the index to compute.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended before a number was entered")]
    Eof,

    #[error("the number must be on range {range}, got {value}")]
    OutOfRange { value: i32, range: NumberRange },

    #[error("invalid range: min ({min}) is greater than max ({max})")]
    InvalidRange { min: i32, max: i32 },
}
