use crate::{types::Scalar, Color};

/// A representation of colors in which two colors can be mixed.
///
/// `mix` interpolates every component linearly (angle-like components along the shortest arc)
/// and does not clamp `progress`, so values outside of [0, 1] extrapolate. Results that fall
/// outside of the sRGB gamut are clamped when converted back into a `Color`.
pub trait ColorSpace {
    fn from_color(c: &Color) -> Self;
    fn into_color(self) -> Color;

    fn mix(&self, other: &Self, progress: Scalar) -> Self;
}
