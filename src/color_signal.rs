use std::rc::Rc;

use crate::context::SignalContext;
use crate::error::{InterpolationError, ParseError};
use crate::interpolation::{lerp, InterpolationFunction, WorkingSpace};
use crate::signal::SignalCell;
use crate::types::Scalar;
use crate::value::{PossibleValue, Signalable};
use crate::{Color, Format};

/// A signal holding a [`Color`].
pub type ColorSignal = SignalCell<Color>;

/// Structured color literal. The RGB channels are between 0 and 255, alpha between 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorComponents {
    pub r: Scalar,
    pub g: Scalar,
    pub b: Scalar,
    pub a: Scalar,
}

impl ColorComponents {
    pub fn new(r: Scalar, g: Scalar, b: Scalar) -> Self {
        Self::with_alpha(r, g, b, 1.0)
    }

    pub fn with_alpha(r: Scalar, g: Scalar, b: Scalar, a: Scalar) -> Self {
        ColorComponents { r, g, b, a }
    }

    fn to_color(self) -> Result<Color, ParseError> {
        let channel = |name: &'static str, value: Scalar, max: Scalar| {
            if value.is_finite() && (0.0..=max).contains(&value) {
                Ok(value / max)
            } else {
                Err(ParseError::InvalidComponent { name, value })
            }
        };

        Ok(Color::from_rgba_float(
            channel("r", self.r, 255.0)?,
            channel("g", self.g, 255.0)?,
            channel("b", self.b, 255.0)?,
            channel("a", self.a, 1.0)?,
        ))
    }
}

fn color_from_number(number: f64) -> Result<Color, ParseError> {
    let in_range = (0.0..=f64::from(0xffffff)).contains(&number);
    if in_range && number.fract() == 0.0 {
        Ok(Color::from_u32(number as u32))
    } else {
        Err(ParseError::InvalidNumber(number))
    }
}

impl Signalable for Color {
    type Components = ColorComponents;

    fn parse(value: PossibleValue<Self>) -> Result<Self, ParseError> {
        match value {
            PossibleValue::Value(color) => Ok(color),
            PossibleValue::Text(text) => text.parse(),
            PossibleValue::Number(number) => color_from_number(number),
            PossibleValue::Components(components) => components.to_color(),
        }
    }

    /// `rgb(r,g,b)` or `rgba(r,g,b,a)`, without spaces.
    fn serialize(&self) -> String {
        self.to_rgb_string(Format::NoSpaces)
    }

    /// The present endpoint made fully transparent, so missing endpoints fade in or out.
    fn neutral(other: Option<&Self>) -> Self {
        match other {
            Some(color) => color.with_alpha(0.0),
            None => Color::transparent(),
        }
    }

    fn blend(from: &Self, to: &Self, progress: Scalar) -> Self {
        WorkingSpace::default().mix(from, to, progress)
    }
}

impl From<Color> for PossibleValue<Color> {
    fn from(color: Color) -> Self {
        PossibleValue::Value(color)
    }
}

impl From<&Color> for PossibleValue<Color> {
    fn from(color: &Color) -> Self {
        PossibleValue::Value(color.clone())
    }
}

impl From<ColorComponents> for PossibleValue<Color> {
    fn from(components: ColorComponents) -> Self {
        PossibleValue::Components(components)
    }
}

/// Numeric shorthand, `0xRRGGBB`.
impl From<u32> for PossibleValue<Color> {
    fn from(rgb: u32) -> Self {
        PossibleValue::Number(f64::from(rgb))
    }
}

impl Color {
    /// Interpolate between two colors in `space`. A missing endpoint is replaced by the other
    /// one made fully transparent. With both missing the result is `rgba(0,0,0,0)`.
    pub fn lerp(
        from: Option<&Color>,
        to: Option<&Color>,
        progress: Scalar,
        space: WorkingSpace,
    ) -> Color {
        lerp(from, to, progress, |from, to, progress| {
            space.mix(from, to, progress)
        })
    }

    /// Build an interpolation function for the working space called `space`, e.g. `"oklch"`.
    pub fn create_lerp(space: &str) -> Result<InterpolationFunction<Color>, InterpolationError> {
        Ok(Self::create_lerp_in(space.parse()?))
    }

    pub fn create_lerp_in(space: WorkingSpace) -> InterpolationFunction<Color> {
        Rc::new(
            move |from: Option<&Color>, to: Option<&Color>, progress: Scalar| {
                Color::lerp(from, to, progress, space)
            },
        )
    }

    pub fn lerp_to(&self, to: &Color, progress: Scalar, space: WorkingSpace) -> Color {
        Color::lerp(Some(self), Some(to), progress, space)
    }

    /// Create a color signal. Without an `initial` value the signal starts out transparent,
    /// without an explicit `interpolation` it blends in LCh.
    pub fn create_signal(
        initial: Option<PossibleValue<Color>>,
        interpolation: Option<InterpolationFunction<Color>>,
    ) -> Result<ColorSignal, ParseError> {
        let context = match interpolation {
            Some(interpolation) => SignalContext::with_interpolation(interpolation),
            None => SignalContext::new(),
        };

        match initial {
            Some(initial) => context.create_signal(initial),
            None => Ok(context.create_neutral_signal()),
        }
    }

    pub fn to_components(&self) -> ColorComponents {
        let rgba = self.to_rgba();
        ColorComponents::with_alpha(
            Scalar::from(rgba.r),
            Scalar::from(rgba.g),
            Scalar::from(rgba.b),
            rgba.alpha,
        )
    }
}
