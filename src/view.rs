//! Data ranges and the symmetric viewport that frames both shapes.

use crate::polygon::ClosedPolygon;

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Range `[-half, +half]`.
    pub fn symmetric(half: f64) -> Self {
        Self::new(-half, half)
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether the range has positive span and finite bounds.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.span() > 0.0
    }

    /// Clamp a value into the range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Ensure the range has at least the given span.
    pub fn with_min_span(&self, min_span: f64) -> Self {
        let span = self.span();
        if span >= min_span {
            return *self;
        }
        let center = (self.min + self.max) * 0.5;
        let half = min_span * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }
}

/// Visible data ranges on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// X axis range.
    pub x: Range,
    /// Y axis range.
    pub y: Range,
}

impl Viewport {
    /// Create a viewport from X and Y ranges.
    pub fn new(x: Range, y: Range) -> Self {
        Self { x, y }
    }

    /// Square viewport `[-half, +half]` on both axes, centered on the origin.
    pub fn symmetric(half: f64) -> Self {
        Self::new(Range::symmetric(half), Range::symmetric(half))
    }

    /// Check whether both axes are valid.
    pub fn is_valid(&self) -> bool {
        self.x.is_valid() && self.y.is_valid()
    }
}

/// Framing parameters for [`viewport_range`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportConfig {
    /// Multiplier applied to the largest absolute coordinate.
    pub margin: f64,
    /// Smallest half-range returned, so all-zero shapes still get a usable frame.
    pub min_range: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            margin: 1.5,
            min_range: 1.0,
        }
    }
}

/// Largest half-range [`viewport_range`] returns; the full span `2 * MAX_RANGE`
/// stays finite.
pub const MAX_RANGE: f64 = f64::MAX / 4.0;

/// Symmetric half-range that frames both outlines.
///
/// The result is the largest absolute coordinate across both outlines times
/// `config.margin`, raised to `config.min_range` when smaller and capped at
/// [`MAX_RANGE`]. Non-finite coordinates cannot be framed; they are left out
/// with a warning.
pub fn viewport_range(
    original: &ClosedPolygon,
    transformed: &ClosedPolygon,
    config: &ViewportConfig,
) -> f64 {
    let dropped = original
        .points()
        .iter()
        .chain(transformed.points())
        .filter(|p| !p.is_finite())
        .count();
    if dropped > 0 {
        tracing::warn!(dropped, "non-finite points left out of the viewport");
    }
    let extent = original.max_abs().max(transformed.max_abs());
    let range = extent * config.margin;
    if range.is_nan() || range > MAX_RANGE {
        tracing::warn!(extent, max_range = MAX_RANGE, "viewport overflow, capping range");
        return MAX_RANGE;
    }
    if range < config.min_range {
        tracing::warn!(
            extent,
            min_range = config.min_range,
            "degenerate viewport, using minimum range"
        );
        return config.min_range;
    }
    range
}
