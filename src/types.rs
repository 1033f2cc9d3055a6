pub type Scalar = f64;

/// A 3x3 matrix in row-major order.
pub type Mat3 = [Scalar; 9];

pub type Vec3 = [Scalar; 3];
