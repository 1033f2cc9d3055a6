use thiserror::Error;

use tincture::{EvaluationError, InterpolationError, ParseError};

#[derive(Debug, Error)]
pub enum TinctureError {
    #[error("Could not parse color '{0}'")]
    ColorParseError(String),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Interpolation(#[from] InterpolationError),

    #[error("{0}")]
    Evaluation(#[from] EvaluationError),

    #[error("Missing required argument '{0}'")]
    MissingArgument(&'static str),

    #[error("The number of colors in a gradient must be at least 2, got {0}")]
    GradientNumberMustBeLargerThanOne(usize),

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Output stream closed")]
    StdoutClosed,

    #[error("I/O error: {0}")]
    IoError(std::io::Error),
}

impl From<std::io::Error> for TinctureError {
    fn from(err: std::io::Error) -> TinctureError {
        match err.kind() {
            std::io::ErrorKind::BrokenPipe => TinctureError::StdoutClosed,
            _ => TinctureError::IoError(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, TinctureError>;
