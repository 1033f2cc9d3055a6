use crate::{
    colorspace::ColorSpace,
    convert::{
        gam_srgb, lab_to_lch, lch_to_lab, lin_srgb_to_xyz, oklab_to_xyz, xyz_to_lin_srgb,
        xyz_to_oklab,
    },
    helper::{interpolate, interpolate_angle, MaxPrecision},
    types::Scalar,
    Color, Format,
};

/// Björn Ottosson's perceptual Oklab space (https://bottosson.github.io/posts/oklab/).
#[derive(Debug, Clone, PartialEq)]
pub struct OkLab {
    pub l: Scalar,
    pub a: Scalar,
    pub b: Scalar,
    pub alpha: Scalar,
}

/// Cylindrical form of Oklab.
#[derive(Debug, Clone, PartialEq)]
pub struct OkLch {
    pub l: Scalar,
    pub c: Scalar,
    pub h: Scalar,
    pub alpha: Scalar,
}

impl ColorSpace for OkLab {
    fn from_color(c: &Color) -> Self {
        c.to_oklab()
    }

    fn into_color(self) -> Color {
        Color::from_oklab(self.l, self.a, self.b, self.alpha)
    }

    fn mix(&self, other: &Self, progress: Scalar) -> Self {
        Self {
            l: interpolate(self.l, other.l, progress),
            a: interpolate(self.a, other.a, progress),
            b: interpolate(self.b, other.b, progress),
            alpha: interpolate(self.alpha, other.alpha, progress),
        }
    }
}

impl ColorSpace for OkLch {
    fn from_color(c: &Color) -> Self {
        c.to_oklch()
    }

    fn into_color(self) -> Color {
        Color::from_oklch(self.l, self.c, self.h, self.alpha)
    }

    fn mix(&self, other: &Self, progress: Scalar) -> Self {
        // Oklab chroma is roughly 1/250 of CIELAB chroma, the gray threshold scales with it
        let self_hue = if self.c < 0.0004 { other.h } else { self.h };
        let other_hue = if other.c < 0.0004 { self.h } else { other.h };

        Self {
            l: interpolate(self.l, other.l, progress),
            c: interpolate(self.c, other.c, progress),
            h: interpolate_angle(self_hue, other_hue, progress),
            alpha: interpolate(self.alpha, other.alpha, progress),
        }
    }
}

impl From<&Color> for OkLab {
    fn from(color: &Color) -> Self {
        let [l, a, b] = xyz_to_oklab(lin_srgb_to_xyz(color.linear_channels()));
        OkLab {
            l,
            a,
            b,
            alpha: color.alpha(),
        }
    }
}

impl From<&OkLab> for Color {
    fn from(lab: &OkLab) -> Self {
        let [r, g, b] = gam_srgb(xyz_to_lin_srgb(oklab_to_xyz([lab.l, lab.a, lab.b])));
        Color::from_rgba_float(r, g, b, lab.alpha)
    }
}

impl From<&Color> for OkLch {
    fn from(color: &Color) -> Self {
        let OkLab { l, a, b, alpha } = OkLab::from(color);
        let [l, c, h] = lab_to_lch([l, a, b]);
        OkLch { l, c, h, alpha }
    }
}

impl From<&OkLch> for Color {
    fn from(lch: &OkLch) -> Self {
        let [l, a, b] = lch_to_lab([lch.l, lch.c, lch.h]);
        Self::from(&OkLab {
            l,
            a,
            b,
            alpha: lch.alpha,
        })
    }
}

impl OkLab {
    /// Format the color as an Oklab-representation string (`oklab(0.628 0.225 0.126)`), following
    /// the CSS Color 4 syntax.
    pub fn to_color_string(&self, format: Format) -> String {
        format!(
            "oklab({l} {a} {b}{alpha})",
            l = MaxPrecision::wrap(3, self.l),
            a = MaxPrecision::wrap(3, self.a),
            b = MaxPrecision::wrap(3, self.b),
            alpha = crate::format_css_alpha(self.alpha, format),
        )
    }
}

impl OkLch {
    /// Format the color as an Oklch-representation string (`oklch(0.628 0.258 29.2)`), following
    /// the CSS Color 4 syntax.
    pub fn to_color_string(&self, format: Format) -> String {
        format!(
            "oklch({l} {c} {h}{alpha})",
            l = MaxPrecision::wrap(3, self.l),
            c = MaxPrecision::wrap(3, self.c),
            h = MaxPrecision::wrap(1, self.h),
            alpha = crate::format_css_alpha(self.alpha, format),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::assert_almost_equal;

    #[test]
    fn oklab_of_red() {
        let lab = Color::red().to_oklab();
        assert!((lab.l - 0.628).abs() < 1e-3);
        assert!((lab.a - 0.225).abs() < 1e-3);
        assert!((lab.b - 0.126).abs() < 1e-3);
    }

    #[test]
    fn oklab_roundtrip() {
        for v in (0..=255).step_by(15) {
            let color = Color::from_rgb(v, 40, 255 - v);
            let lab = color.to_oklab();
            assert_almost_equal(&color, &Color::from_oklab(lab.l, lab.a, lab.b, 1.0));

            let lch = color.to_oklch();
            assert_almost_equal(&color, &Color::from_oklch(lch.l, lch.c, lch.h, 1.0));
        }
    }

    #[test]
    fn to_color_string() {
        assert_eq!(
            "oklab(0.628 0.225 0.126)",
            Color::red().to_oklab().to_color_string(Format::Spaces)
        );
        assert_eq!(
            "oklch(0.628 0.258 29.2 / 0.5)",
            Color::red()
                .with_alpha(0.5)
                .to_oklch()
                .to_color_string(Format::Spaces)
        );
    }
}
