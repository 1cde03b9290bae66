//! Transformation parameters and their presentation.

use std::fmt;

use crate::geom::Point;
use crate::matrix::Mat2;
use crate::ops::{self, ReflectionAxis};
use crate::polygon::ClosedPolygon;

/// The four kinds of transformation, one per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransformKind {
    /// Shift by a vector.
    #[default]
    Translation,
    /// Turn about the origin.
    Rotation,
    /// Uniform scale about the origin.
    Dilation,
    /// Mirror across a line through the origin.
    Reflection,
}

impl TransformKind {
    /// All kinds in view order.
    pub const ALL: [Self; 4] = [
        Self::Translation,
        Self::Rotation,
        Self::Dilation,
        Self::Reflection,
    ];

    /// View label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Translation => "Translation",
            Self::Rotation => "Rotation",
            Self::Dilation => "Dilation",
            Self::Reflection => "Reflection",
        }
    }

    /// The following view, wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// The preceding view, wrapping around.
    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single transformation with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transformation {
    /// Shift every point by `(tx, ty)`.
    Translation {
        /// X component of the shift.
        tx: f64,
        /// Y component of the shift.
        ty: f64,
    },
    /// Counterclockwise rotation about the origin.
    Rotation {
        /// Angle in degrees; negative turns clockwise.
        degrees: f64,
    },
    /// Uniform scale about the origin.
    Dilation {
        /// Scale factor `k`.
        factor: f64,
    },
    /// Mirror across an axis; `None` is the identity.
    Reflection {
        /// Mirror line.
        axis: Option<ReflectionAxis>,
    },
}

impl Transformation {
    /// The kind of this transformation.
    pub fn kind(&self) -> TransformKind {
        match self {
            Self::Translation { .. } => TransformKind::Translation,
            Self::Rotation { .. } => TransformKind::Rotation,
            Self::Dilation { .. } => TransformKind::Dilation,
            Self::Reflection { .. } => TransformKind::Reflection,
        }
    }

    /// Apply to a closed outline.
    pub fn apply(&self, polygon: &ClosedPolygon) -> ClosedPolygon {
        match *self {
            Self::Translation { tx, ty } => ops::translate(polygon, Point::new(tx, ty)),
            Self::Rotation { degrees } => ops::rotate(polygon, degrees),
            Self::Dilation { factor } => ops::dilate(polygon, factor),
            Self::Reflection { axis } => ops::reflect(polygon, axis),
        }
    }

    /// Apply to a single point.
    pub fn apply_point(&self, point: Point) -> Point {
        match (self, self.matrix()) {
            (Self::Translation { tx, ty }, _) => point + Point::new(*tx, *ty),
            (_, Some(matrix)) => matrix.mul_point(point),
            (_, None) => point,
        }
    }

    /// Linear map for origin-centered transformations; `None` for translation.
    pub fn matrix(&self) -> Option<Mat2> {
        match *self {
            Self::Translation { .. } => None,
            Self::Rotation { degrees } => Some(Mat2::rotation_degrees(degrees)),
            Self::Dilation { factor } => Some(Mat2::scale(factor)),
            Self::Reflection { axis } => Some(ops::reflection_matrix(axis)),
        }
    }

    /// Plot title naming the transformation and its parameter.
    pub fn title(&self) -> String {
        match self {
            Self::Translation { tx, ty } => format!("Translation by ({tx}, {ty})"),
            Self::Rotation { degrees } => format!("Rotation {degrees}°"),
            Self::Dilation { factor } => format!("Dilation with k={factor}"),
            Self::Reflection { axis: Some(axis) } => format!("Reflection across {axis}"),
            Self::Reflection { axis: None } => "Reflection (identity)".to_string(),
        }
    }

    /// LaTeX for the equation relating a point to its image.
    pub fn formula(&self) -> String {
        const IMAGE: &str = r"\begin{pmatrix} x' \\ y' \end{pmatrix}";
        const SOURCE: &str = r"\begin{pmatrix} x \\ y \end{pmatrix}";
        match self {
            Self::Translation { tx, ty } => {
                format!(r"P'(x', y') = P(x, y) + T({tx}, {ty})")
            }
            Self::Rotation { .. } => format!(
                r"{IMAGE} = \begin{{pmatrix}} \cos\theta & -\sin\theta \\ \sin\theta & \cos\theta \end{{pmatrix}} {SOURCE}"
            ),
            Self::Dilation { .. } => {
                format!(r"{IMAGE} = \begin{{pmatrix}} k & 0 \\ 0 & k \end{{pmatrix}} {SOURCE}")
            }
            Self::Reflection { axis } => {
                let matrix = latex_matrix(&ops::reflection_matrix(*axis));
                format!("{IMAGE} = {matrix} {SOURCE}")
            }
        }
    }

    /// Describe where a single vertex lands, e.g. `P(1, 1) -> P'(1+2, 1+1) = (3, 2)`.
    pub fn describe_vertex(&self, point: Point) -> String {
        let image = self.apply_point(point);
        match self {
            Self::Translation { tx, ty } => format!(
                "P({}, {}) -> P'({}+{tx}, {}+{ty}) = ({}, {})",
                point.x, point.y, point.x, point.y, image.x, image.y
            ),
            _ => format!(
                "P({}, {}) -> P'({:.3}, {:.3})",
                point.x, point.y, image.x, image.y
            ),
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title())
    }
}

fn latex_matrix(matrix: &Mat2) -> String {
    let [[a, b], [c, d]] = matrix.rows;
    format!(r"\begin{{pmatrix}} {a} & {b} \\ {c} & {d} \end{{pmatrix}}")
}
