use thiserror::Error;

/// A value handed to a signal does not match any accepted input shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("could not parse '{0}'")]
    InvalidString(String),

    #[error("{0} is not a valid numeric value")]
    InvalidNumber(f64),

    #[error("component '{name}' is out of range: {value}")]
    InvalidComponent { name: &'static str, value: f64 },
}

/// Reading a computed signal failed. The cell stays dirty, so the read may be retried.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("the expression produced an invalid value: {0}")]
    Parse(#[from] ParseError),

    #[error("cyclic dependency: the signal was read while it was being evaluated")]
    Cycle,

    #[error("evaluation failed: {0}")]
    Failed(Box<dyn std::error::Error + Send + Sync>),
}

impl EvaluationError {
    pub fn failed<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        EvaluationError::Failed(error.into())
    }
}

/// An interpolation strategy was configured with invalid options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpolationError {
    #[error("unknown working space '{0}' (expected one of rgb, lrgb, hsl, lab, lch, hcl, oklab, oklch)")]
    UnknownWorkingSpace(String),
}
