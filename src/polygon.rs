//! Polygon construction and the closed outline form used for rendering.

use crate::error::{LabError, Result};
use crate::geom::Point;

/// Minimum vertex count for a non-degenerate polygon.
pub const MIN_VERTICES: usize = 3;

/// An ordered list of polygon vertices, stored without closure.
///
/// Degenerate shapes (collinear or repeated vertices, fewer than three
/// vertices) are allowed; use [`Polygon::try_new`] to require a proper one.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from vertices in input order.
    pub fn new<I, P>(vertices: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self {
            vertices: vertices.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a polygon, rejecting fewer than three vertices or non-finite
    /// coordinates.
    pub fn try_new<I, P>(vertices: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let polygon = Self::new(vertices);
        if polygon.len() < MIN_VERTICES {
            return Err(LabError::TooFewVertices {
                found: polygon.len(),
            });
        }
        if let Some(index) = polygon.vertices.iter().position(|p| !p.is_finite()) {
            return Err(LabError::NonFiniteCoordinate { index });
        }
        Ok(polygon)
    }

    /// Access the vertices.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of distinct vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check whether the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Derive the closed outline.
    pub fn closed(&self) -> ClosedPolygon {
        ClosedPolygon::from_vertices(&self.vertices)
    }
}

impl<P: Into<Point>> FromIterator<P> for Polygon {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// A polygon outline whose last point repeats the first.
///
/// An empty vertex list produces an empty outline; otherwise the outline has
/// one more point than there are vertices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClosedPolygon {
    points: Vec<Point>,
}

impl ClosedPolygon {
    /// Close a vertex list by appending a copy of its first vertex.
    pub fn from_vertices(vertices: &[Point]) -> Self {
        let mut points = Vec::with_capacity(vertices.len() + 1);
        points.extend_from_slice(vertices);
        if let Some(first) = vertices.first() {
            points.push(*first);
        }
        Self { points }
    }

    /// All outline points, including the closing point.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The distinct vertices (the outline without its closing point).
    pub fn vertices(&self) -> &[Point] {
        let end = self.points.len().saturating_sub(1);
        &self.points[..end]
    }

    /// Number of outline points, including the closing point.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the outline is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Recover the open polygon.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.vertices().iter().copied())
    }

    /// Largest absolute coordinate over all outline points.
    pub fn max_abs(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.max_abs())
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }

    /// Map every point; the closing point stays equal to the first because
    /// both go through the same map.
    pub(crate) fn map(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            points: self.points.iter().map(|p| f(*p)).collect(),
        }
    }

    /// Compare outlines point-wise within an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(&other.points)
                .all(|(a, b)| a.approx_eq(*b, tolerance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_repeats_first_vertex() {
        let polygon = Polygon::new([(1.0, 1.0), (3.0, 4.0), (5.0, 1.0)]);
        let closed = polygon.closed();
        assert_eq!(closed.len(), 4);
        assert_eq!(closed.points().first(), closed.points().last());
        assert_eq!(closed.vertices(), polygon.vertices());
    }

    #[test]
    fn single_vertex_closes() {
        let closed = Polygon::new([(2.0, 2.0)]).closed();
        assert_eq!(closed.points(), &[Point::new(2.0, 2.0), Point::new(2.0, 2.0)]);
    }

    #[test]
    fn empty_outline_stays_empty() {
        let closed = Polygon::default().closed();
        assert!(closed.is_empty());
        assert!(closed.vertices().is_empty());
        assert_eq!(closed.max_abs(), 0.0);
    }

    #[test]
    fn try_new_rejects_degenerate_input() {
        assert_eq!(
            Polygon::try_new([(0.0, 0.0), (1.0, 1.0)]),
            Err(LabError::TooFewVertices { found: 2 })
        );
        assert_eq!(
            Polygon::try_new([(0.0, 0.0), (1.0, f64::NAN), (2.0, 0.0)]),
            Err(LabError::NonFiniteCoordinate { index: 1 })
        );
        assert!(Polygon::try_new([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).is_ok());
    }

    #[test]
    fn round_trips_to_polygon() {
        let polygon = Polygon::new([(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
        assert_eq!(polygon.closed().to_polygon(), polygon);
    }
}
