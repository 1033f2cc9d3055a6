//! Color conversion functions between gamma-encoded sRGB, linear-light sRGB, CIE XYZ (D65),
//! CIELAB (D65), Oklab and their polar forms. The matrices follow the sample code of the W3C
//! CSS Color 4 draft.

use std::f64::consts::PI;

use crate::types::{Mat3, Scalar, Vec3};

/// D65 reference white, defined by 4-figure CIE x,y chromaticities.
pub const D65: Vec3 = [0.3127 / 0.3290, 1.00000, (1.0 - 0.3127 - 0.3290) / 0.3290];

/// Calculates the dot-product of 3x3 matrix m with the 3-element vector v.
#[inline]
fn mat3_dot(m: Mat3, v: Vec3) -> Vec3 {
    let [m00, m01, m02, m10, m11, m12, m20, m21, m22] = m;
    let [v0, v1, v2] = v;

    // Dot-products implemented with FMADD to minimize loss of precision.
    [
        m00.mul_add(v0, m01.mul_add(v1, m02 * v2)),
        m10.mul_add(v0, m11.mul_add(v1, m12 * v2)),
        m20.mul_add(v0, m21.mul_add(v1, m22 * v2)),
    ]
}

// sRGB-related functions

/// Converts an array of sRGB values where in-gamut values are in the range
/// [0 - 1] to linear light (un-companded) form.
/// (https://en.wikipedia.org/wiki/SRGB)
///
/// Extended transfer function:
/// For negative values, linear portion is extended on reflection of axis,
/// then reflected power function is used.
pub fn lin_srgb(rgb: Vec3) -> Vec3 {
    let finv = |val: Scalar| {
        let abs = val.abs();

        if abs < 0.04045 {
            val / 12.92
        } else {
            val.signum() * Scalar::powf((abs + 0.055) / 1.055, 2.4)
        }
    };

    let [r, g, b] = rgb;
    [finv(r), finv(g), finv(b)]
}

/// Converts an array of linear-light sRGB values in the range 0.0-1.0
/// to gamma corrected form.
pub fn gam_srgb(rgb: Vec3) -> Vec3 {
    let f = |val: Scalar| {
        let abs = val.abs();

        if abs > 0.0031308 {
            val.signum() * (1.055 * Scalar::powf(abs, 1.0 / 2.4) - 0.055)
        } else {
            12.92 * val
        }
    };

    let [r, g, b] = rgb;
    [f(r), f(g), f(b)]
}

/// Converts an array of linear-light sRGB values to D65-adapted CIE XYZ.
pub fn lin_srgb_to_xyz(rgb: Vec3) -> Vec3 {
    #[rustfmt::skip]
    const M: Mat3 = [
        0.41239079926595934, 0.357584339383878,   0.1804807884018343,
        0.21263900587151027, 0.715168678767756,   0.07219231536073371,
        0.01933081871559182, 0.11919477979462598, 0.9505321522496607,
    ];

    mat3_dot(M, rgb)
}

/// Converts an array of D65-adapted CIE XYZ values to linear-light sRGB.
pub fn xyz_to_lin_srgb(xyz: Vec3) -> Vec3 {
    #[rustfmt::skip]
    const M_: Mat3 = [
         3.2409699419045226,  -1.537383177570094,   -0.4986107602930034,
        -0.9692436362808796,   1.8759675015077202,   0.04155505740717559,
         0.05563007969699366, -0.20397695888897652,  1.0569715142428786,
    ];

    mat3_dot(M_, xyz)
}

// CIE Lab and LCH

// from CIE standard, which now defines these as a rational fraction
const LAB_EPSILON: Scalar = 216. / 24389.; // 6^3/29^3
const LAB_KAPPA: Scalar = 24389. / 27.; // 29^3/3^3

/// Converts an array of D65-adapted XYZ values to CIE Lab relative to the same white point.
pub fn xyz_to_lab(xyz: Vec3) -> Vec3 {
    let f = |v: Scalar| {
        if v > LAB_EPSILON {
            v.cbrt()
        } else {
            (LAB_KAPPA * v + 16.) / 116.
        }
    };

    let [x, y, z] = xyz;
    let fx = f(x / D65[0]);
    let fy = f(y / D65[1]);
    let fz = f(z / D65[2]);

    [116. * fy - 16., 500. * (fx - fy), 200. * (fy - fz)]
}

/// Converts an array of D65-relative Lab channel values to XYZ.
/// (http://www.brucelindbloom.com/index.html?Eqn_Lab_to_XYZ.html)
pub fn lab_to_xyz(lab: Vec3) -> Vec3 {
    let [l, a, b] = lab;
    let fy = (l + 16.) / 116.;
    let fx = (a / 500.) + fy;
    let fz = fy - (b / 200.);

    let xr = if fx.powi(3) > LAB_EPSILON {
        fx.powi(3)
    } else {
        (116. * fx - 16.) / LAB_KAPPA
    };
    let yr = if l > LAB_KAPPA * LAB_EPSILON {
        fy.powi(3)
    } else {
        l / LAB_KAPPA
    };
    let zr = if fz.powi(3) > LAB_EPSILON {
        fz.powi(3)
    } else {
        (116. * fz - 16.) / LAB_KAPPA
    };

    [xr * D65[0], yr * D65[1], zr * D65[2]]
}

/// Converts an array of Cartesian Lab coordinates to polar LCh form. This is a simple coordinate
/// system conversion that can be used with either CIELAB or Oklab color values.
pub fn lab_to_lch(lab: Vec3) -> Vec3 {
    let [l, a, b] = lab;
    let c = Scalar::sqrt(a.powi(2) + b.powi(2));
    let h = Scalar::atan2(b, a) * 180.0 / PI;

    [l, c, normalize_hue(h)]
}

/// Converts an array of polar LCh coordinates to Cartesian Lab form.
pub fn lch_to_lab(lch: Vec3) -> Vec3 {
    let [l, c, h] = lch;
    let a = c * Scalar::cos(h * PI / 180.0);
    let b = c * Scalar::sin(h * PI / 180.0);

    [l, a, b]
}

/// Ensures that hue, in degrees, is in the range [0..360)
fn normalize_hue(hue: Scalar) -> Scalar {
    hue - 360.0 * (hue / 360.0).floor()
}

// OKLab and OKLCH
// https://bottosson.github.io/posts/oklab/

/// Converts an array of D65-adapted XYZ values to Oklab.
#[allow(clippy::excessive_precision)]
pub fn xyz_to_oklab(xyz: Vec3) -> Vec3 {
    #[rustfmt::skip]
    const M1: Mat3 = [
        0.8190224432164319,   0.3619062562801221,  -0.12887378261216414,
        0.0329836671980271,   0.9292868468965546,   0.03614466816999844,
        0.048177199566046255, 0.26423952494422764,  0.6335478258136937
    ];
    #[rustfmt::skip]
    const M2: Mat3 = [
        0.2104542553,  0.7936177850, -0.0040720468,
        1.9779984951, -2.4285922050,  0.4505937099,
        0.0259040371,  0.7827717662, -0.8086757660
    ];

    let [l, m, s] = mat3_dot(M1, xyz);
    mat3_dot(M2, [l.cbrt(), m.cbrt(), s.cbrt()])
}

/// Converts an array of Oklab channel values to D65-adapted XYZ.
#[allow(clippy::excessive_precision)]
pub fn oklab_to_xyz(lab: Vec3) -> Vec3 {
    #[rustfmt::skip]
    const M2_: Mat3 = [
        0.99999999845051981432,  0.39633779217376785678,   0.21580375806075880339,
        1.0000000088817607767,  -0.1055613423236563494,   -0.063854174771705903402,
        1.0000000546724109177,  -0.089484182094965759684, -1.2914855378640917399
    ];
    #[rustfmt::skip]
    const M1_: Mat3 = [
         1.2268798733741557,  -0.5578149965554813,  0.28139105017721583,
        -0.04057576262431372,  1.1122868293970594, -0.07171106666151701,
        -0.07637294974672142, -0.4214933239627914,  1.5869240244272418
    ];

    let [l_, m_, s_] = mat3_dot(M2_, lab);
    mat3_dot(M1_, [l_.powi(3), m_.powi(3), s_.powi(3)])
}
