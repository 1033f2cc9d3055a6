use crate::{
    colorspace::ColorSpace,
    convert::{gam_srgb, lab_to_xyz, lin_srgb_to_xyz, xyz_to_lab, xyz_to_lin_srgb},
    helper::{interpolate, MaxPrecision},
    types::Scalar,
    Color, Format,
};

/// CIELAB coordinates relative to the D65 white point.
#[derive(Debug, Clone, PartialEq)]
pub struct Lab {
    pub l: Scalar,
    pub a: Scalar,
    pub b: Scalar,
    pub alpha: Scalar,
}

impl ColorSpace for Lab {
    fn from_color(c: &Color) -> Self {
        c.to_lab()
    }

    fn into_color(self) -> Color {
        Color::from_lab(self.l, self.a, self.b, self.alpha)
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

impl From<&Color> for Lab {
    fn from(color: &Color) -> Self {
        let [l, a, b] = xyz_to_lab(lin_srgb_to_xyz(color.linear_channels()));
        Lab::with_alpha(l, a, b, color.alpha())
    }
}

impl From<&Lab> for Color {
    fn from(lab: &Lab) -> Self {
        let [r, g, b] = gam_srgb(xyz_to_lin_srgb(lab_to_xyz([lab.l, lab.a, lab.b])));
        Color::from_rgba_float(r, g, b, lab.alpha)
    }
}

impl Lab {
    #[inline]
    pub fn new(l: Scalar, a: Scalar, b: Scalar) -> Self {
        Self::with_alpha(l, a, b, 1.0)
    }

    #[inline]
    pub fn with_alpha(l: Scalar, a: Scalar, b: Scalar, alpha: Scalar) -> Self {
        Lab { l, a, b, alpha }
    }

    /// Format the color as a Lab-representation string (`Lab(41, 83, -93, 0.5)`). If the alpha channel
    /// is `1.0`, it won't be included in the output.
    pub fn to_color_string(&self, format: Format) -> String {
        let space = if format == Format::Spaces { " " } else { "" };
        format!(
            "Lab({l:.0},{space}{a:.0},{space}{b:.0}{alpha})",
            l = self.l,
            a = self.a,
            b = self.b,
            alpha = if self.alpha == 1.0 {
                "".to_string()
            } else {
                format!(",{space}{}", MaxPrecision::wrap(3, self.alpha))
            }
        )
    }
}
