use crate::Color;

/// Colors match if every 8-bit channel differs by at most one step.
pub fn assert_almost_equal(c1: &Color, c2: &Color) {
    let (a, b) = (c1.to_rgba(), c2.to_rgba());
    let close = |x: u8, y: u8| x.abs_diff(y) <= 1;

    assert!(
        close(a.r, b.r) && close(a.g, b.g) && close(a.b, b.b),
        "{c1} is not almost equal to {c2}"
    );
    assert!((a.alpha - b.alpha).abs() < 1e-3, "{c1} and {c2} differ in alpha");
}
