use crate::{
    colorspace::ColorSpace,
    convert::{gam_srgb, lin_srgb},
    helper::{interpolate, MaxPrecision},
    types::Scalar,
    Color, Format,
};

/// Gamma-encoded sRGB channels. `Srgba<u8>` holds integer channels between 0 and 255,
/// `Srgba<f64>` holds floating point channels between 0.0 and 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgba<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub alpha: Scalar,
}

impl<T> Srgba<T> {
    #[inline]
    pub fn new(r: T, g: T, b: T) -> Self {
        Self::with_alpha(r, g, b, 1.0)
    }

    #[inline]
    pub fn with_alpha(r: T, g: T, b: T, alpha: Scalar) -> Self {
        Srgba { r, g, b, alpha }
    }
}

impl ColorSpace for Srgba<f64> {
    fn from_color(c: &Color) -> Self {
        c.to_rgba_float()
    }

    fn into_color(self) -> Color {
        Color::from_rgba_float(self.r, self.g, self.b, self.alpha)
    }

    fn mix(&self, other: &Self, progress: Scalar) -> Self {
        Self {
            r: interpolate(self.r, other.r, progress),
            g: interpolate(self.g, other.g, progress),
            b: interpolate(self.b, other.b, progress),
            alpha: interpolate(self.alpha, other.alpha, progress),
        }
    }
}

impl From<&Color> for Srgba<u8> {
    fn from(color: &Color) -> Self {
        let c = color.to_rgba_float();
        // Tiny rounding errors in `f64` floating point calculations can cause effectively equal
        // values to round to different integers. We expect `f64` rounding errors to be less than
        // the precision of an `f32` in most cases, so we can eliminate many of these rounding
        // anomalies by first converting the values to `f32` before rounding.
        let r = f32::round((255.0 * c.r) as f32) as u8;
        let g = f32::round((255.0 * c.g) as f32) as u8;
        let b = f32::round((255.0 * c.b) as f32) as u8;

        Srgba::with_alpha(r, g, b, c.alpha)
    }
}

impl Srgba<u8> {
    /// Return the color as an integer in RGB representation (`0xRRGGBB`)
    #[inline]
    pub fn to_u32(&self) -> u32 {
        u32::from(self.r).wrapping_shl(16) + u32::from(self.g).wrapping_shl(8) + u32::from(self.b)
    }

    /// Format the color as a RGB-representation string (`rgba(255, 127, 0, 0.5)`). If the alpha
    /// channel is `1.0`, the simplified `rgb()` format will be used instead.
    pub fn to_color_string(&self, format: Format) -> String {
        let space = if format == Format::Spaces { " " } else { "" };
        let (a_prefix, a) = if self.alpha == 1.0 {
            ("", "".to_string())
        } else {
            (
                "a",
                format!(
                    ",{space}{alpha}",
                    alpha = MaxPrecision::wrap(3, self.alpha),
                ),
            )
        };
        format!(
            "rgb{a_prefix}({r},{space}{g},{space}{b}{a})",
            r = self.r,
            g = self.g,
            b = self.b,
        )
    }

    /// Format the color as a RGB-representation string (`#fc0070`). The output will contain 6 hex
    /// digits if the alpha channel is `1.0`, or 8 hex digits otherwise.
    pub fn to_hex_string(&self, leading_hash: bool) -> String {
        format!(
            "{}{:02x}{:02x}{:02x}{}",
            if leading_hash { "#" } else { "" },
            self.r,
            self.g,
            self.b,
            if self.alpha == 1.0 {
                "".to_string()
            } else {
                format!("{:02x}", (self.alpha * 255.).round() as u8)
            }
        )
    }
}

/// Linear-light sRGB channels, used to mix colors the way light adds up physically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgba {
    pub r: Scalar,
    pub g: Scalar,
    pub b: Scalar,
    pub alpha: Scalar,
}

impl ColorSpace for LinearRgba {
    fn from_color(c: &Color) -> Self {
        c.to_linear_rgba()
    }

    fn into_color(self) -> Color {
        let [r, g, b] = gam_srgb([self.r, self.g, self.b]);
        Color::from_rgba_float(r, g, b, self.alpha)
    }

    fn mix(&self, other: &Self, progress: Scalar) -> Self {
        Self {
            r: interpolate(self.r, other.r, progress),
            g: interpolate(self.g, other.g, progress),
            b: interpolate(self.b, other.b, progress),
            alpha: interpolate(self.alpha, other.alpha, progress),
        }
    }
}

impl From<&Color> for LinearRgba {
    fn from(color: &Color) -> Self {
        let c = color.to_rgba_float();
        let [r, g, b] = lin_srgb([c.r, c.g, c.b]);

        LinearRgba {
            r,
            g,
            b,
            alpha: c.alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rgb_u8_roundtrip_conversion() {
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(51) {
                let color = Color::from_rgb(r, g, 7);
                let rgba = color.to_rgba();
                assert_eq!((r, g, 7), (rgba.r, rgba.g, rgba.b));
            }
        }
    }

    #[test]
    fn rgb_to_u32_conversion() {
        assert_eq!(0, Color::black().to_rgba().to_u32());
        assert_eq!(0xff0000, Color::red().to_rgba().to_u32());
        assert_eq!(0x0000ff, Color::blue().to_rgba().to_u32());
        assert_eq!(0xffffff, Color::white().to_rgba().to_u32());
    }

    #[test]
    fn to_color_string() {
        let c = Srgba::<u8>::new(255, 127, 4);
        assert_eq!("rgb(255, 127, 4)", c.to_color_string(Format::Spaces));
        assert_eq!("rgb(255,127,4)", c.to_color_string(Format::NoSpaces));

        let c = Srgba::<u8>::with_alpha(255, 127, 4, 0.25);
        assert_eq!("rgba(255, 127, 4, 0.25)", c.to_color_string(Format::Spaces));
        assert_eq!("rgba(255,127,4,0.25)", c.to_color_string(Format::NoSpaces));
    }

    #[test]
    fn to_hex_string() {
        assert_eq!("#ff7f04", Srgba::<u8>::new(255, 127, 4).to_hex_string(true));
        assert_eq!("ff7f04", Srgba::<u8>::new(255, 127, 4).to_hex_string(false));
        assert_eq!(
            "#ff7f0480",
            Srgba::<u8>::with_alpha(255, 127, 4, 0.5).to_hex_string(true)
        );
    }

    #[test]
    fn mix_extrapolates_and_clamps() {
        let a = Srgba::<f64>::new(0.2, 0.4, 0.6);
        let b = Srgba::<f64>::new(0.4, 0.4, 0.2);

        let beyond = a.mix(&b, 2.0);
        assert_relative_eq!(0.6, beyond.r);
        assert_relative_eq!(-0.2, beyond.b);

        let color = beyond.into_color();
        assert_eq!(0.0, color.to_rgba_float().b);
    }

    #[test]
    fn linear_mix_is_brighter_than_gamma_mix() {
        let linear = Color::black().mix::<LinearRgba>(&Color::white(), 0.5);
        let gamma = Color::black().mix::<Srgba<f64>>(&Color::white(), 0.5);

        assert!(linear.to_rgba_float().r > gamma.to_rgba_float().r);
        assert_eq!(Color::from_rgb(188, 188, 188), linear);
    }
}
