//! The four transformation operators.
//!
//! Every operator takes a closed outline and returns a new one; inputs are
//! never modified. Rotation, dilation and reflection are linear maps centered
//! on the origin.

use std::fmt;
use std::str::FromStr;

use crate::error::LabError;
use crate::geom::Point;
use crate::matrix::Mat2;
use crate::polygon::ClosedPolygon;

/// Mirror line through the origin used by a reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReflectionAxis {
    /// The X axis, `y = 0`.
    #[default]
    XAxis,
    /// The Y axis, `x = 0`.
    YAxis,
    /// The diagonal `y = x`.
    LineYEqX,
    /// The anti-diagonal `y = -x`.
    LineYEqNegX,
}

impl ReflectionAxis {
    /// All axes in display order.
    pub const ALL: [Self; 4] = [Self::XAxis, Self::YAxis, Self::LineYEqX, Self::LineYEqNegX];

    /// Reflection matrix for this axis.
    pub const fn matrix(self) -> Mat2 {
        match self {
            Self::XAxis => Mat2::new([[1.0, 0.0], [0.0, -1.0]]),
            Self::YAxis => Mat2::new([[-1.0, 0.0], [0.0, 1.0]]),
            Self::LineYEqX => Mat2::new([[0.0, 1.0], [1.0, 0.0]]),
            Self::LineYEqNegX => Mat2::new([[0.0, -1.0], [-1.0, 0.0]]),
        }
    }

    /// Human-readable label, as offered to the user.
    pub const fn label(self) -> &'static str {
        match self {
            Self::XAxis => "X axis (y=0)",
            Self::YAxis => "Y axis (x=0)",
            Self::LineYEqX => "Line y=x",
            Self::LineYEqNegX => "Line y=-x",
        }
    }

    /// Match a label or a short alias (`x`, `y`, `y=x`, `y=-x`, ...).
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized: String = label
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|axis| {
                axis.label()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect::<String>()
                    .eq_ignore_ascii_case(&normalized)
            })
            .or(match normalized.as_str() {
                "x" | "xaxis" | "x_axis" | "y=0" => Some(Self::XAxis),
                "y" | "yaxis" | "y_axis" | "x=0" => Some(Self::YAxis),
                "y=x" | "line_y_eq_x" => Some(Self::LineYEqX),
                "y=-x" | "line_y_eq_neg_x" => Some(Self::LineYEqNegX),
                _ => None,
            })
    }
}

impl fmt::Display for ReflectionAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReflectionAxis {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| LabError::UnknownAxis(s.to_string()))
    }
}

/// Reflection matrix for an optional axis; no axis means identity.
pub fn reflection_matrix(axis: Option<ReflectionAxis>) -> Mat2 {
    axis.map_or(Mat2::IDENTITY, ReflectionAxis::matrix)
}

/// Apply a linear map to every outline point.
pub fn apply_matrix(polygon: &ClosedPolygon, matrix: &Mat2) -> ClosedPolygon {
    polygon.map(|p| matrix.mul_point(p))
}

/// Shift every point by `offset`.
pub fn translate(polygon: &ClosedPolygon, offset: Point) -> ClosedPolygon {
    polygon.map(|p| p + offset)
}

/// Rotate counterclockwise about the origin by `degrees`.
///
/// Negative angles rotate clockwise. Any finite angle is accepted.
pub fn rotate(polygon: &ClosedPolygon, degrees: f64) -> ClosedPolygon {
    apply_matrix(polygon, &Mat2::rotation_degrees(degrees))
}

/// Scale uniformly about the origin by `factor`.
///
/// Negative factors also invert the shape through the origin.
pub fn dilate(polygon: &ClosedPolygon, factor: f64) -> ClosedPolygon {
    apply_matrix(polygon, &Mat2::scale(factor))
}

/// Mirror across `axis`; `None` leaves the shape unchanged.
pub fn reflect(polygon: &ClosedPolygon, axis: Option<ReflectionAxis>) -> ClosedPolygon {
    apply_matrix(polygon, &reflection_matrix(axis))
}
