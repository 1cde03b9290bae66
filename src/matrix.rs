//! Fixed-size 2x2 linear maps.

use crate::geom::Point;

/// A 2x2 matrix stored row-major.
///
/// Points are treated as column vectors, so `m.mul_point(p)` computes `M * p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2 {
    /// Matrix rows: `[[m00, m01], [m10, m11]]`.
    pub rows: [[f64; 2]; 2],
}

impl Mat2 {
    /// The identity map.
    pub const IDENTITY: Self = Self::new([[1.0, 0.0], [0.0, 1.0]]);

    /// Create a matrix from rows.
    pub const fn new(rows: [[f64; 2]; 2]) -> Self {
        Self { rows }
    }

    /// Counterclockwise rotation about the origin by `degrees`.
    pub fn rotation_degrees(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new([[cos, -sin], [sin, cos]])
    }

    /// Uniform scale about the origin.
    pub const fn scale(factor: f64) -> Self {
        Self::new([[factor, 0.0], [0.0, factor]])
    }

    /// Apply the matrix to a point.
    pub fn mul_point(&self, point: Point) -> Point {
        let [[a, b], [c, d]] = self.rows;
        Point::new(a * point.x + b * point.y, c * point.x + d * point.y)
    }

    /// Compose two maps: the result applies `self` first, then `next`.
    pub fn then(&self, next: &Self) -> Self {
        let [[a, b], [c, d]] = next.rows;
        let [[e, f], [g, h]] = self.rows;
        Self::new([
            [a * e + b * g, a * f + b * h],
            [c * e + d * g, c * f + d * h],
        ])
    }

    /// Matrix determinant.
    pub fn determinant(&self) -> f64 {
        let [[a, b], [c, d]] = self.rows;
        a * d - b * c
    }

    /// Compare two matrices entry-wise within an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_quarter_turn() {
        let m = Mat2::rotation_degrees(90.0);
        let p = m.mul_point(Point::new(1.0, 0.0));
        assert!(p.approx_eq(Point::new(0.0, 1.0), 1e-9));
    }

    #[test]
    fn then_applies_left_to_right() {
        let scale = Mat2::scale(2.0);
        let swap = Mat2::new([[0.0, 1.0], [1.0, 0.0]]);
        let p = Point::new(1.0, 3.0);
        let composed = scale.then(&swap).mul_point(p);
        assert_eq!(composed, swap.mul_point(scale.mul_point(p)));
    }

    #[test]
    fn rotation_preserves_area() {
        let m = Mat2::rotation_degrees(33.0);
        assert!((m.determinant() - 1.0).abs() < 1e-9);
        assert!((Mat2::scale(3.0).determinant() - 9.0).abs() < 1e-9);
    }
}
