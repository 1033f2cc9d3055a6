use crate::{
    colorspace::ColorSpace,
    helper::{interpolate, interpolate_angle, mod_positive, MaxPrecision},
    types::Scalar,
    Color, Format,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Hsla {
    pub h: Scalar,
    pub s: Scalar,
    pub l: Scalar,
    pub alpha: Scalar,
}

impl ColorSpace for Hsla {
    fn from_color(c: &Color) -> Self {
        c.to_hsla()
    }

    fn into_color(self) -> Color {
        Color::from_hsla(self.h, self.s, self.l, self.alpha)
    }

    fn mix(&self, other: &Self, progress: Scalar) -> Self {
        // make sure that the hue is preserved when mixing with gray colors
        let self_hue = if self.s < 0.0001 { other.h } else { self.h };
        let other_hue = if other.s < 0.0001 { self.h } else { other.h };

        Self {
            h: interpolate_angle(self_hue, other_hue, progress),
            s: interpolate(self.s, other.s, progress),
            l: interpolate(self.l, other.l, progress),
            alpha: interpolate(self.alpha, other.alpha, progress),
        }
    }
}

impl From<&Color> for Hsla {
    fn from(color: &Color) -> Self {
        const EPS: f64 = f64::EPSILON * 2.0;

        let c = color.to_rgba_float();
        let (r, g, b) = (c.r, c.g, c.b);
        let max_chroma = f64::max(f64::max(r, g), b);
        let min_chroma = f64::min(f64::min(r, g), b);

        let chroma = max_chroma - min_chroma;

        let hue = 60.0
            * (if chroma.abs() < EPS {
                0.0
            } else if r == max_chroma {
                mod_positive((g - b) / chroma, 6.0)
            } else if g == max_chroma {
                (b - r) / chroma + 2.0
            } else {
                (r - g) / chroma + 4.0
            });

        let lightness = (max_chroma + min_chroma) / 2.0;
        let saturation = if chroma.abs() < EPS {
            0.0
        } else {
            chroma / (1.0 - Scalar::abs(2.0 * lightness - 1.0))
        };

        Hsla::with_alpha(hue, saturation, lightness, c.alpha)
    }
}

impl Hsla {
    #[inline]
    pub fn new(h: Scalar, s: Scalar, l: Scalar) -> Self {
        Self::with_alpha(h, s, l, 1.0)
    }

    #[inline]
    pub fn with_alpha(h: Scalar, s: Scalar, l: Scalar, alpha: Scalar) -> Self {
        Hsla { h, s, l, alpha }
    }

    /// Convert to gamma-encoded sRGB channels. Saturation and lightness are expected to be
    /// between 0.0 and 1.0, the hue may be any angle in degrees.
    pub fn to_rgb_channels(&self) -> [Scalar; 3] {
        let h_s = mod_positive(self.h, 360.0) / 60.0;
        let chr = (1.0 - Scalar::abs(2.0 * self.l - 1.0)) * self.s;
        let m = self.l - chr / 2.0;
        let x = chr * (1.0 - Scalar::abs(h_s % 2.0 - 1.0));

        let (r, g, b) = if h_s < 1.0 {
            (chr, x, 0.0)
        } else if (1.0..2.0).contains(&h_s) {
            (x, chr, 0.0)
        } else if (2.0..3.0).contains(&h_s) {
            (0.0, chr, x)
        } else if (3.0..4.0).contains(&h_s) {
            (0.0, x, chr)
        } else if (4.0..5.0).contains(&h_s) {
            (x, 0.0, chr)
        } else {
            (chr, 0.0, x)
        };

        [r + m, g + m, b + m]
    }

    /// Format the color as a HSL-representation string (`hsla(123, 50.3%, 80.1%, 0.4)`). If the
    /// alpha channel is `1.0`, the simplified `hsl()` format will be used instead.
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
            "hsl{a_prefix}({h:.0},{space}{s:.1}%,{space}{l:.1}%{a})",
            h = self.h,
            s = 100.0 * self.s,
            l = 100.0 * self.l,
        )
    }
}
