//! Lab configuration: initial input, parameter limits and framing.

use crate::geom::Point;
use crate::ops::ReflectionAxis;
use crate::transformation::Transformation;
use crate::view::{Range, ViewportConfig};

/// How an unrecognized reflection axis label is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisPolicy {
    /// Fall back to the identity transform and log a warning.
    #[default]
    Lenient,
    /// Reject the label with [`LabError::UnknownAxis`](crate::LabError::UnknownAxis).
    Strict,
}

/// Input ranges offered by the parameter controls.
///
/// Operators accept any value; these limits only bound what the controls
/// offer and are applied with [`ParameterLimits::clamp`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterLimits {
    /// Range for each translation component.
    pub translation: Range,
    /// Range for the rotation angle in degrees.
    pub rotation: Range,
    /// Range for the dilation factor.
    pub dilation: Range,
    /// Slider step for the dilation factor.
    pub dilation_step: f64,
}

impl ParameterLimits {
    /// Clamp a transformation's parameters into the control ranges.
    pub fn clamp(&self, transformation: Transformation) -> Transformation {
        match transformation {
            Transformation::Translation { tx, ty } => Transformation::Translation {
                tx: self.translation.clamp(tx),
                ty: self.translation.clamp(ty),
            },
            Transformation::Rotation { degrees } => Transformation::Rotation {
                degrees: self.rotation.clamp(degrees),
            },
            Transformation::Dilation { factor } => {
                let steps = ((factor - self.dilation.min) / self.dilation_step).round();
                let snapped = self.dilation.min + steps * self.dilation_step;
                Transformation::Dilation {
                    factor: self.dilation.clamp(snapped),
                }
            }
            reflection @ Transformation::Reflection { .. } => reflection,
        }
    }
}

impl Default for ParameterLimits {
    fn default() -> Self {
        Self {
            translation: Range::new(-5.0, 5.0),
            rotation: Range::new(-180.0, 180.0),
            dilation: Range::new(0.1, 3.0),
            dilation_step: 0.1,
        }
    }
}

/// Configuration for a [`TransformationSession`](crate::TransformationSession).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabConfig {
    /// Initial polygon vertices.
    pub vertices: Vec<Point>,
    /// Initial translation vector.
    pub translation: Point,
    /// Initial rotation angle in degrees.
    pub rotation_degrees: f64,
    /// Initial dilation factor.
    pub dilation_factor: f64,
    /// Initial reflection axis.
    pub reflection_axis: ReflectionAxis,
    /// Viewport framing.
    pub viewport: ViewportConfig,
    /// Handling of unknown reflection axis labels.
    pub axis_policy: AxisPolicy,
    /// Control ranges.
    pub limits: ParameterLimits,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            vertices: vec![
                Point::new(1.0, 1.0),
                Point::new(3.0, 4.0),
                Point::new(5.0, 1.0),
            ],
            translation: Point::new(2.0, 1.0),
            rotation_degrees: 45.0,
            dilation_factor: 1.5,
            reflection_axis: ReflectionAxis::XAxis,
            viewport: ViewportConfig::default(),
            axis_policy: AxisPolicy::default(),
            limits: ParameterLimits::default(),
        }
    }
}

impl LabConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> LabConfigBuilder {
        LabConfigBuilder::default()
    }
}

/// Builder for [`LabConfig`].
#[derive(Debug, Clone, Default)]
pub struct LabConfigBuilder {
    config: LabConfig,
}

impl LabConfigBuilder {
    /// Set the initial polygon vertices.
    pub fn vertices<P: Into<Point>>(mut self, vertices: impl IntoIterator<Item = P>) -> Self {
        self.config.vertices = vertices.into_iter().map(Into::into).collect();
        self
    }

    /// Set the initial translation vector.
    pub fn translation(mut self, tx: f64, ty: f64) -> Self {
        self.config.translation = Point::new(tx, ty);
        self
    }

    /// Set the initial rotation angle in degrees.
    pub fn rotation_degrees(mut self, degrees: f64) -> Self {
        self.config.rotation_degrees = degrees;
        self
    }

    /// Set the initial dilation factor.
    pub fn dilation_factor(mut self, factor: f64) -> Self {
        self.config.dilation_factor = factor;
        self
    }

    /// Set the initial reflection axis.
    pub fn reflection_axis(mut self, axis: ReflectionAxis) -> Self {
        self.config.reflection_axis = axis;
        self
    }

    /// Set the viewport framing.
    pub fn viewport(mut self, viewport: ViewportConfig) -> Self {
        self.config.viewport = viewport;
        self
    }

    /// Set how unknown reflection axis labels are handled.
    pub fn axis_policy(mut self, policy: AxisPolicy) -> Self {
        self.config.axis_policy = policy;
        self
    }

    /// Set the control ranges.
    pub fn limits(mut self, limits: ParameterLimits) -> Self {
        self.config.limits = limits;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> LabConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_controls() {
        let config = LabConfig::default();
        assert_eq!(config.vertices.len(), 3);
        assert_eq!(config.translation, Point::new(2.0, 1.0));
        assert_eq!(config.rotation_degrees, 45.0);
        assert_eq!(config.dilation_factor, 1.5);
        assert_eq!(config.reflection_axis, ReflectionAxis::XAxis);
        assert_eq!(config.axis_policy, AxisPolicy::Lenient);
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = LabConfig::builder()
            .vertices([(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])
            .translation(-1.0, 3.0)
            .rotation_degrees(90.0)
            .dilation_factor(2.0)
            .reflection_axis(ReflectionAxis::LineYEqNegX)
            .viewport(ViewportConfig {
                margin: 2.0,
                min_range: 0.5,
            })
            .axis_policy(AxisPolicy::Strict)
            .build();
        assert_eq!(config.vertices.len(), 4);
        assert_eq!(config.vertices[2], Point::new(2.0, 2.0));
        assert_eq!(config.translation, Point::new(-1.0, 3.0));
        assert_eq!(config.rotation_degrees, 90.0);
        assert_eq!(config.dilation_factor, 2.0);
        assert_eq!(config.reflection_axis, ReflectionAxis::LineYEqNegX);
        assert_eq!(config.viewport.margin, 2.0);
        assert_eq!(config.axis_policy, AxisPolicy::Strict);
        assert_eq!(config.limits, ParameterLimits::default());
    }

    #[test]
    fn empty_builder_matches_default() {
        assert_eq!(LabConfig::builder().build(), LabConfig::default());
    }

    #[test]
    fn clamp_bounds_each_parameter() {
        let limits = ParameterLimits::default();
        assert_eq!(
            limits.clamp(Transformation::Translation { tx: 9.0, ty: -7.0 }),
            Transformation::Translation { tx: 5.0, ty: -5.0 }
        );
        assert_eq!(
            limits.clamp(Transformation::Rotation { degrees: 270.0 }),
            Transformation::Rotation { degrees: 180.0 }
        );
        let Transformation::Dilation { factor } =
            limits.clamp(Transformation::Dilation { factor: -2.0 })
        else {
            panic!("expected dilation");
        };
        assert!((factor - 0.1).abs() < 1e-9);
    }

    #[test]
    fn clamp_snaps_dilation_to_step() {
        let limits = ParameterLimits::default();
        let Transformation::Dilation { factor } =
            limits.clamp(Transformation::Dilation { factor: 1.46 })
        else {
            panic!("expected dilation");
        };
        assert!((factor - 1.5).abs() < 1e-9);
    }
}
