use std::rc::Rc;

use crate::error::{EvaluationError, ParseError};
use crate::interpolation::InterpolationFunction;
use crate::signal::SignalCell;
use crate::types::Scalar;
use crate::value::{PossibleValue, Signalable};

/// Creates signals of one family, all bound to the same interpolation function. The parser is
/// the one of `T`.
pub struct SignalContext<T: Signalable> {
    interpolation: InterpolationFunction<T>,
}

impl<T: Signalable> SignalContext<T> {
    /// A context using `T`'s default interpolation.
    pub fn new() -> Self {
        Self::with_interpolation(T::default_interpolation())
    }

    pub fn with_interpolation(interpolation: InterpolationFunction<T>) -> Self {
        Self { interpolation }
    }

    /// Create a signal holding `initial`. Fails if `initial` does not parse.
    pub fn create_signal(
        &self,
        initial: impl Into<PossibleValue<T>>,
    ) -> Result<SignalCell<T>, ParseError> {
        let initial = T::parse(initial.into())?;
        Ok(SignalCell::new(initial, Rc::clone(&self.interpolation)))
    }

    /// Create a signal holding the neutral value of `T`.
    pub fn create_neutral_signal(&self) -> SignalCell<T> {
        SignalCell::new(T::neutral(None), Rc::clone(&self.interpolation))
    }

    pub fn parse(&self, value: impl Into<PossibleValue<T>>) -> Result<T, ParseError> {
        T::parse(value.into())
    }

    /// Read both signals and blend their values at `progress`. Neither signal is written.
    pub fn interpolate(
        &self,
        from: &SignalCell<T>,
        to: &SignalCell<T>,
        progress: Scalar,
    ) -> Result<T, EvaluationError> {
        let from = from.get()?;
        let to = to.get()?;

        Ok((self.interpolation)(Some(&from), Some(&to), progress))
    }

    pub fn interpolation(&self) -> InterpolationFunction<T> {
        Rc::clone(&self.interpolation)
    }
}

impl<T: Signalable> Default for SignalContext<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Signalable> Clone for SignalContext<T> {
    fn clone(&self) -> Self {
        Self::with_interpolation(Rc::clone(&self.interpolation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn create_signal_parses_initial_value() {
        let context = SignalContext::<f64>::new();

        let signal = context.create_signal("0.5").unwrap();
        assert_relative_eq!(0.5, signal.get().unwrap());
        assert!(signal.is_initial());

        assert!(context.create_signal("half").is_err());
    }

    #[test]
    fn neutral_signal() {
        let context = SignalContext::<f64>::default();
        assert_eq!(0.0, context.create_neutral_signal().get().unwrap());
    }

    #[test]
    fn interpolate_does_not_write() {
        let context = SignalContext::<f64>::new();
        let from = context.create_signal(2.0).unwrap();
        let to = context.create_signal(4.0).unwrap();
        let (v_from, v_to) = (from.version(), to.version());

        assert_relative_eq!(3.0, context.interpolate(&from, &to, 0.5).unwrap());
        assert_relative_eq!(6.0, context.interpolate(&from, &to, 2.0).unwrap());

        assert_eq!(v_from, from.version());
        assert_eq!(v_to, to.version());
        assert_relative_eq!(2.0, from.get().unwrap());
    }

    #[test]
    fn custom_interpolation() {
        let step: InterpolationFunction<f64> =
            Rc::new(|from: Option<&f64>, to: Option<&f64>, progress: Scalar| {
                let from = from.copied().unwrap_or(0.0);
                let to = to.copied().unwrap_or(0.0);
                if progress < 0.5 {
                    from
                } else {
                    to
                }
            });
        let context = SignalContext::with_interpolation(step);

        let from = context.create_signal(1.0).unwrap();
        let to = context.create_signal(9.0).unwrap();
        assert_eq!(1.0, context.interpolate(&from, &to, 0.2).unwrap());
        assert_eq!(9.0, context.interpolate(&from, &to, 0.7).unwrap());

        let bound = from.interpolation();
        assert_eq!(9.0, bound(None, Some(&9.0), 0.9));
    }

    #[test]
    fn parse_uses_value_parser() {
        let context = SignalContext::<f64>::new();
        assert_eq!(Ok(3.0), context.parse(" 3 "));
        assert!(matches!(
            context.parse(f64::NAN),
            Err(ParseError::InvalidNumber(_))
        ));
    }
}
