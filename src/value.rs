use std::fmt;

use crate::error::ParseError;
use crate::helper::interpolate;
use crate::interpolation::{default_interpolation, InterpolationFunction};
use crate::types::Scalar;

/// A type that can live inside a [`SignalCell`](crate::SignalCell).
///
/// Implementors describe how loosely typed input is normalized ([`Signalable::parse`]), how a
/// value is exported ([`Signalable::serialize`]) and how two values are blended during an
/// interpolation ([`Signalable::blend`], [`Signalable::neutral`]).
pub trait Signalable: Clone + PartialEq + fmt::Debug + 'static {
    /// The structured literal form of the value, e.g. named color channels.
    type Components: Clone + fmt::Debug;

    /// Normalize any accepted input shape into a value. Never coerces invalid input to a
    /// default.
    fn parse(value: PossibleValue<Self>) -> Result<Self, ParseError>;

    /// The canonical string form. Must be deterministic, and `parse` must map it back to an
    /// equal value.
    fn serialize(&self) -> String;

    /// Substitute for a missing interpolation endpoint. `other` is the endpoint that is present,
    /// if any.
    fn neutral(other: Option<&Self>) -> Self;

    /// Blend two values. `progress` is not clamped.
    fn blend(from: &Self, to: &Self, progress: Scalar) -> Self;

    /// The interpolation function signals of this type use unless told otherwise.
    fn default_interpolation() -> InterpolationFunction<Self> {
        default_interpolation::<Self>()
    }
}

/// Every input shape a signal accepts at its write boundary.
#[derive(Debug, Clone)]
pub enum PossibleValue<T: Signalable> {
    Value(T),
    Text(String),
    Number(f64),
    Components(T::Components),
}

impl<T: Signalable> PossibleValue<T> {
    pub fn parse(self) -> Result<T, ParseError> {
        T::parse(self)
    }
}

impl<T: Signalable> From<&str> for PossibleValue<T> {
    fn from(text: &str) -> Self {
        PossibleValue::Text(text.to_string())
    }
}

impl<T: Signalable> From<String> for PossibleValue<T> {
    fn from(text: String) -> Self {
        PossibleValue::Text(text)
    }
}

fn finite(value: f64) -> Result<f64, ParseError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseError::InvalidNumber(value))
    }
}

/// Plain numbers. The canonical form is the shortest string that parses back to the same
/// `f64`, a missing interpolation endpoint is treated as `0.0`.
impl Signalable for f64 {
    type Components = f64;

    fn parse(value: PossibleValue<Self>) -> Result<Self, ParseError> {
        match value {
            PossibleValue::Value(v) | PossibleValue::Number(v) | PossibleValue::Components(v) => {
                finite(v)
            }
            PossibleValue::Text(text) => {
                let v = text
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidString(text.clone()))?;
                finite(v)
            }
        }
    }

    fn serialize(&self) -> String {
        self.to_string()
    }

    fn neutral(_other: Option<&Self>) -> Self {
        0.0
    }

    fn blend(from: &Self, to: &Self, progress: Scalar) -> Self {
        interpolate(*from, *to, progress)
    }
}

impl From<f64> for PossibleValue<f64> {
    fn from(value: f64) -> Self {
        PossibleValue::Value(value)
    }
}
