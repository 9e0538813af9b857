use std::time::Duration;

use thiserror::Error;

/// Which motor a magnitude was meant for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Motor {
    Strong,
    Weak,
}

impl std::fmt::Display for Motor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Motor::Strong => "strong",
            Motor::Weak => "weak",
        })
    }
}

/// Rejected rumble parameters. Raised before the device is touched.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{motor} magnitude {value} out of range [0, 1]")]
    OutOfRange { motor: Motor, value: f32 },
    #[error("duration {0:?} is shorter than one millisecond")]
    DurationTooShort(Duration),
    #[error("duration {0:?} exceeds 32767 milliseconds")]
    DurationTooLong(Duration),
}

/// Publicly visible errors which can be returned from this crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid rumble parameters: {0}")]
    Validation(#[from] ValidationError),
    #[error("standard i/o error: {0}")]
    Io(#[from] std::io::Error),
}
