//! Reactive, lazily evaluated signals whose values can be interpolated between two endpoints.
//!
//! The signal core ([`SignalCell`], [`SignalContext`]) is generic over any [`Signalable`] type.
//! [`Color`] is its main client and `f64` a second one.

pub mod color_signal;
pub mod colorspace;
pub mod context;
pub mod convert;
pub mod error;
mod helper;
pub mod hsl;
pub mod interpolation;
pub mod lab;
pub mod lch;
pub mod named;
pub mod oklab;
pub mod parser;
pub mod rgb;
pub mod serialize;
pub mod signal;
mod types;
pub mod value;

#[cfg(test)]
mod test_helper;

use std::{fmt, str::FromStr};

// Re-export color space types
pub use hsl::Hsla;
pub use lab::Lab;
pub use lch::LCh;
pub use oklab::{OkLab, OkLch};
pub use rgb::{LinearRgba, Srgba};

// Re-export the signal core
pub use color_signal::{ColorComponents, ColorSignal};
pub use context::SignalContext;
pub use error::{EvaluationError, InterpolationError, ParseError};
pub use interpolation::{InterpolationFunction, WorkingSpace};
pub use signal::SignalCell;
pub use value::{PossibleValue, Signalable};

use colorspace::ColorSpace;
use convert::lin_srgb;
use helper::{clamp, MaxPrecision};
pub use types::Scalar;
use types::Vec3;

/// The representation of a color.
///
/// Note:
/// - Colors are stored as gamma-encoded sRGB channels. Colors outside the sRGB gamut can not
///   be represented by `Color`, out-of-gamut results of conversions are clamped.
/// - The `PartialEq` instance compares the integer RGB values and the alpha channel rounded to
///   three decimals, which is exactly the precision of the canonical string form.
#[derive(Clone)]
pub struct Color {
    red: Scalar,
    green: Scalar,
    blue: Scalar,
    alpha: Scalar,
}

pub(crate) fn format_css_alpha(alpha: Scalar, format: Format) -> String {
    if alpha == 1.0 {
        String::from("")
    } else {
        format!(
            "{space}/{space}{alpha}",
            alpha = MaxPrecision::wrap(3, alpha),
            space = if format == Format::Spaces { " " } else { "" }
        )
    }
}

impl Color {
    /// Create a `Color` from integer RGB values between 0 and 255 and a floating
    /// point alpha value between 0.0 and 1.0.
    #[inline]
    pub fn from_rgba(r: u8, g: u8, b: u8, alpha: Scalar) -> Color {
        Self::from_rgba_float(
            Scalar::from(r) / 255.0,
            Scalar::from(g) / 255.0,
            Scalar::from(b) / 255.0,
            alpha,
        )
    }

    /// Create a `Color` from integer RGB values between 0 and 255.
    #[inline]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Color {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// Create a `Color` from RGB and alpha values between 0.0 and 1.0. Values outside this
    /// range are clamped.
    pub fn from_rgba_float(r: Scalar, g: Scalar, b: Scalar, alpha: Scalar) -> Color {
        Color {
            red: clamp(0.0, 1.0, r),
            green: clamp(0.0, 1.0, g),
            blue: clamp(0.0, 1.0, b),
            alpha: clamp(0.0, 1.0, alpha),
        }
    }

    #[inline]
    pub fn from_rgb_float(r: Scalar, g: Scalar, b: Scalar) -> Color {
        Self::from_rgba_float(r, g, b, 1.0)
    }

    /// Create a `Color` from an integer in RGB representation (`0xRRGGBB`). Bits above the
    /// lowest 24 are ignored.
    pub fn from_u32(rgb: u32) -> Color {
        let [_, r, g, b] = rgb.to_be_bytes();
        Self::from_rgb(r, g, b)
    }

    #[inline]
    pub fn from_hsla(hue: Scalar, saturation: Scalar, lightness: Scalar, alpha: Scalar) -> Color {
        let [r, g, b] = Hsla::with_alpha(hue, saturation, lightness, alpha).to_rgb_channels();
        Self::from_rgba_float(r, g, b, alpha)
    }

    #[inline]
    pub fn from_hsl(hue: Scalar, saturation: Scalar, lightness: Scalar) -> Color {
        Self::from_hsla(hue, saturation, lightness, 1.0)
    }

    /// Create a `Color` from CIELAB coordinates (D65 white point).
    #[inline]
    pub fn from_lab(l: Scalar, a: Scalar, b: Scalar, alpha: Scalar) -> Color {
        Self::from(&Lab::with_alpha(l, a, b, alpha))
    }

    /// Create a `Color` from lightness, chroma and hue coordinates in the CIE LCh color space.
    /// This is a cylindrical transform of the Lab color space.
    #[inline]
    pub fn from_lch(l: Scalar, c: Scalar, h: Scalar, alpha: Scalar) -> Color {
        Self::from(&LCh::with_alpha(l, c, h, alpha))
    }

    #[inline]
    pub fn from_oklab(l: Scalar, a: Scalar, b: Scalar, alpha: Scalar) -> Color {
        Self::from(&OkLab { l, a, b, alpha })
    }

    #[inline]
    pub fn from_oklch(l: Scalar, c: Scalar, h: Scalar, alpha: Scalar) -> Color {
        Self::from(&OkLch { l, c, h, alpha })
    }

    pub fn to_rgba(&self) -> Srgba<u8> {
        Srgba::from(self)
    }

    pub fn to_rgba_float(&self) -> Srgba<Scalar> {
        Srgba::with_alpha(self.red, self.green, self.blue, self.alpha)
    }

    pub fn to_linear_rgba(&self) -> LinearRgba {
        LinearRgba::from(self)
    }

    /// Linear-light RGB channels, without alpha.
    pub(crate) fn linear_channels(&self) -> Vec3 {
        lin_srgb([self.red, self.green, self.blue])
    }

    pub fn to_hsla(&self) -> Hsla {
        Hsla::from(self)
    }

    pub fn to_lab(&self) -> Lab {
        Lab::from(self)
    }

    pub fn to_lch(&self) -> LCh {
        LCh::from(self)
    }

    pub fn to_oklab(&self) -> OkLab {
        OkLab::from(self)
    }

    pub fn to_oklch(&self) -> OkLch {
        OkLch::from(self)
    }

    /// Return the color as an integer in RGB representation (`0xRRGGBB`). The alpha channel
    /// is dropped.
    pub fn to_u32(&self) -> u32 {
        self.to_rgba().to_u32()
    }

    /// Format the color as a RGB-representation string (`rgba(255, 127, 0, 0.5)`). If the alpha
    /// channel is `1.0`, the simplified `rgb()` format will be used instead.
    pub fn to_rgb_string(&self, format: Format) -> String {
        self.to_rgba().to_color_string(format)
    }

    /// Format the color as a RGB-representation string (`#fc0070`).
    pub fn to_rgb_hex_string(&self, leading_hash: bool) -> String {
        self.to_rgba().to_hex_string(leading_hash)
    }

    pub fn to_hsl_string(&self, format: Format) -> String {
        self.to_hsla().to_color_string(format)
    }

    pub fn to_lab_string(&self, format: Format) -> String {
        self.to_lab().to_color_string(format)
    }

    pub fn to_lch_string(&self, format: Format) -> String {
        self.to_lch().to_color_string(format)
    }

    pub fn to_oklab_string(&self, format: Format) -> String {
        self.to_oklab().to_color_string(format)
    }

    pub fn to_oklch_string(&self, format: Format) -> String {
        self.to_oklch().to_color_string(format)
    }

    #[inline]
    pub fn alpha(&self) -> Scalar {
        self.alpha
    }

    /// Return a copy of this color with the alpha channel replaced.
    pub fn with_alpha(&self, alpha: Scalar) -> Color {
        Color {
            alpha: clamp(0.0, 1.0, alpha),
            ..self.clone()
        }
    }

    /// Mix two colors in the color space `C`. A `progress` of 0.0 yields `self`, 1.0 yields
    /// `other`. Values outside of [0, 1] extrapolate and the result is clamped to the sRGB
    /// gamut.
    pub fn mix<C: ColorSpace>(&self, other: &Color, progress: Scalar) -> Color {
        let from = C::from_color(self);
        let to = C::from_color(other);

        from.mix(&to, progress).into_color()
    }

    /// Fully transparent black, `rgba(0,0,0,0)`.
    pub fn transparent() -> Color {
        Color::from_rgba(0, 0, 0, 0.0)
    }

    pub fn black() -> Color {
        Color::from_rgb(0, 0, 0)
    }

    pub fn white() -> Color {
        Color::from_rgb(255, 255, 255)
    }

    pub fn red() -> Color {
        Color::from_rgb(255, 0, 0)
    }

    /// CSS `green`, which is darker than the pure green primary (see [`Color::lime`]).
    pub fn green() -> Color {
        Color::from_rgb(0, 128, 0)
    }

    pub fn lime() -> Color {
        Color::from_rgb(0, 255, 0)
    }

    pub fn blue() -> Color {
        Color::from_rgb(0, 0, 255)
    }

    pub fn purple() -> Color {
        Color::from_rgb(128, 0, 128)
    }
}

fn quantized_alpha(alpha: Scalar) -> i64 {
    (alpha * 1000.0).round() as i64
}

// Colors are printed in their canonical CSS form
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rgb_string(Format::NoSpaces))
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::from_{}", self.to_rgb_string(Format::NoSpaces))
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        let c1 = self.to_rgba();
        let c2 = other.to_rgba();

        (c1.r, c1.g, c1.b) == (c2.r, c2.g, c2.b)
            && quantized_alpha(c1.alpha) == quantized_alpha(c2.alpha)
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_color(s).ok_or_else(|| ParseError::InvalidString(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Format {
    Spaces,
    NoSpaces,
}
