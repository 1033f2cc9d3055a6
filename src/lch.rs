use crate::{
    colorspace::ColorSpace,
    convert::{lab_to_lch, lch_to_lab},
    helper::{interpolate, interpolate_angle, MaxPrecision},
    lab::Lab,
    types::Scalar,
    Color, Format,
};

/// Cylindrical form of CIELAB: lightness, chroma and hue (in degrees).
#[derive(Debug, Clone, PartialEq)]
pub struct LCh {
    pub l: Scalar,
    pub c: Scalar,
    pub h: Scalar,
    pub alpha: Scalar,
}

impl ColorSpace for LCh {
    fn from_color(c: &Color) -> Self {
        c.to_lch()
    }

    fn into_color(self) -> Color {
        Color::from_lch(self.l, self.c, self.h, self.alpha)
    }

    fn mix(&self, other: &Self, progress: Scalar) -> Self {
        // make sure that the hue is preserved when mixing with gray colors
        let self_hue = if self.c < 0.1 { other.h } else { self.h };
        let other_hue = if other.c < 0.1 { self.h } else { other.h };

        Self {
            l: interpolate(self.l, other.l, progress),
            c: interpolate(self.c, other.c, progress),
            h: interpolate_angle(self_hue, other_hue, progress),
            alpha: interpolate(self.alpha, other.alpha, progress),
        }
    }
}

impl From<&Color> for LCh {
    fn from(color: &Color) -> Self {
        let Lab { l, a, b, alpha } = Lab::from(color);
        let [l, c, h] = lab_to_lch([l, a, b]);

        LCh::with_alpha(l, c, h, alpha)
    }
}

impl From<&LCh> for Color {
    fn from(color: &LCh) -> Self {
        let [l, a, b] = lch_to_lab([color.l, color.c, color.h]);
        Self::from(&Lab::with_alpha(l, a, b, color.alpha))
    }
}

impl LCh {
    #[inline]
    pub fn new(l: Scalar, c: Scalar, h: Scalar) -> Self {
        Self::with_alpha(l, c, h, 1.0)
    }

    #[inline]
    pub fn with_alpha(l: Scalar, c: Scalar, h: Scalar, alpha: Scalar) -> Self {
        LCh { l, c, h, alpha }
    }

    /// Format the color as a LCh-representation string (`LCh(52, 44, 271, 0.5)`). If the alpha
    /// channel is `1.0`, it won't be included in the output.
    pub fn to_color_string(&self, format: Format) -> String {
        let space = if format == Format::Spaces { " " } else { "" };
        format!(
            "LCh({l:.0},{space}{c:.0},{space}{h:.0}{alpha})",
            l = self.l,
            c = self.c,
            h = self.h,
            alpha = if self.alpha == 1.0 {
                "".to_string()
            } else {
                format!(",{space}{}", MaxPrecision::wrap(3, self.alpha))
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::assert_almost_equal;

    #[test]
    fn lch_conversion() {
        let roundtrip = |h, s, l| {
            let color1 = Color::from_hsl(h, s, l);
            let lch1 = color1.to_lch();
            let color2 = Color::from_lch(lch1.l, lch1.c, lch1.h, 1.0);
            assert_almost_equal(&color1, &color2);
        };

        for hue in 0..360 {
            roundtrip(Scalar::from(hue), 0.2, 0.8);
        }
    }

    #[test]
    fn mixing_with_gray_keeps_hue() {
        let red = Color::red().to_lch();
        let gray = Color::from_rgb(128, 128, 128).to_lch();

        let mixed = red.mix(&gray, 0.5);
        assert!((mixed.h - red.h).abs() < 1e-9);
    }

    #[test]
    fn to_color_string() {
        let c = LCh::new(52.0, 44.0, 271.0);
        assert_eq!("LCh(52, 44, 271)", c.to_color_string(Format::Spaces));
        assert_eq!("LCh(52,44,271)", c.to_color_string(Format::NoSpaces));
    }
}
