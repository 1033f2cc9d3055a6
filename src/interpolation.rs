use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::error::{InterpolationError, ParseError};
use crate::types::Scalar;
use crate::value::{PossibleValue, Signalable};
use crate::{Color, Hsla, LCh, Lab, LinearRgba, OkLab, OkLch, Srgba};

/// A blend between two optional endpoints at a progress value. Implementations must be total:
/// missing endpoints are substituted, never rejected.
pub type InterpolationFunction<T> = Rc<dyn Fn(Option<&T>, Option<&T>, Scalar) -> T>;

/// Interpolate between two endpoints with `blend`.
///
/// A missing endpoint is replaced by the neutral value derived from the endpoint that is
/// present, so the result fades instead of jumping. If both are missing, the neutral constant
/// is returned for every `progress`.
pub fn lerp<T, F>(from: Option<&T>, to: Option<&T>, progress: Scalar, blend: F) -> T
where
    T: Signalable,
    F: FnOnce(&T, &T, Scalar) -> T,
{
    match (from, to) {
        (Some(from), Some(to)) => blend(from, to, progress),
        (None, Some(to)) => blend(&T::neutral(Some(to)), to, progress),
        (Some(from), None) => blend(from, &T::neutral(Some(from)), progress),
        (None, None) => T::neutral(None),
    }
}

/// Like [`lerp`], but with endpoints in any accepted input shape. Endpoints are parsed before
/// blending, an unparsable endpoint is an error rather than a missing one.
pub fn lerp_possible<T: Signalable>(
    from: Option<PossibleValue<T>>,
    to: Option<PossibleValue<T>>,
    progress: Scalar,
    interpolation: &InterpolationFunction<T>,
) -> Result<T, ParseError> {
    let from = from.map(T::parse).transpose()?;
    let to = to.map(T::parse).transpose()?;

    Ok(interpolation(from.as_ref(), to.as_ref(), progress))
}

/// The interpolation function built from the type's own blend.
pub fn default_interpolation<T: Signalable>() -> InterpolationFunction<T> {
    Rc::new(|from: Option<&T>, to: Option<&T>, progress: Scalar| {
        lerp(from, to, progress, T::blend)
    })
}

/// The representation in which two colors are blended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkingSpace {
    /// Gamma-encoded sRGB channels.
    Rgb,
    /// Linear-light sRGB channels.
    LinearRgb,
    Hsl,
    Lab,
    /// Cylindrical CIELAB. Perceptually even and hue preserving.
    #[default]
    Lch,
    OkLab,
    OkLch,
}

impl WorkingSpace {
    pub const ALL: [WorkingSpace; 7] = [
        WorkingSpace::Rgb,
        WorkingSpace::LinearRgb,
        WorkingSpace::Hsl,
        WorkingSpace::Lab,
        WorkingSpace::Lch,
        WorkingSpace::OkLab,
        WorkingSpace::OkLch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WorkingSpace::Rgb => "rgb",
            WorkingSpace::LinearRgb => "lrgb",
            WorkingSpace::Hsl => "hsl",
            WorkingSpace::Lab => "lab",
            WorkingSpace::Lch => "lch",
            WorkingSpace::OkLab => "oklab",
            WorkingSpace::OkLch => "oklch",
        }
    }

    /// Blend two colors in this space. Hue angles follow the shortest arc.
    pub fn mix(self, from: &Color, to: &Color, progress: Scalar) -> Color {
        match self {
            WorkingSpace::Rgb => from.mix::<Srgba<Scalar>>(to, progress),
            WorkingSpace::LinearRgb => from.mix::<LinearRgba>(to, progress),
            WorkingSpace::Hsl => from.mix::<Hsla>(to, progress),
            WorkingSpace::Lab => from.mix::<Lab>(to, progress),
            WorkingSpace::Lch => from.mix::<LCh>(to, progress),
            WorkingSpace::OkLab => from.mix::<OkLab>(to, progress),
            WorkingSpace::OkLch => from.mix::<OkLch>(to, progress),
        }
    }
}

impl FromStr for WorkingSpace {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if name == "hcl" {
            return Ok(WorkingSpace::Lch);
        }

        WorkingSpace::ALL
            .into_iter()
            .find(|space| space.name() == name)
            .ok_or_else(|| InterpolationError::UnknownWorkingSpace(s.to_string()))
    }
}

impl fmt::Display for WorkingSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
