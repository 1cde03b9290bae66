//! Event-driven orchestration of the transformation pipeline.
//!
//! A [`TransformationSession`] holds the current control values. Each
//! [`SessionEvent`] updates those values and re-runs the pure pipeline
//! (polygon, transformation, viewport) for the active view.

use tracing::{debug, trace, warn};

use crate::config::{AxisPolicy, LabConfig};
use crate::error::{LabError, Result};
use crate::geom::Point;
use crate::ops::ReflectionAxis;
use crate::polygon::{ClosedPolygon, Polygon};
use crate::transformation::{TransformKind, Transformation};
use crate::view::{Viewport, ViewportConfig, viewport_range};

/// Output of one pipeline run, ready for plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformResult {
    /// The transformation that was applied.
    pub transformation: Transformation,
    /// Closed outline before the transformation.
    pub original: ClosedPolygon,
    /// Closed outline after the transformation.
    pub transformed: ClosedPolygon,
    /// Symmetric half-range for both axes.
    pub viewport_range: f64,
}

impl TransformResult {
    /// Run the pipeline for one polygon and one transformation.
    pub fn compute(
        polygon: &Polygon,
        transformation: Transformation,
        viewport: &ViewportConfig,
    ) -> Self {
        let original = polygon.closed();
        let transformed = transformation.apply(&original);
        let viewport_range = viewport_range(&original, &transformed, viewport);
        trace!(
            kind = %transformation.kind(),
            vertices = polygon.len(),
            viewport_range,
            "computed transform result"
        );
        Self {
            transformation,
            original,
            transformed,
            viewport_range,
        }
    }

    /// Square viewport centered on the origin.
    pub fn viewport(&self) -> Viewport {
        Viewport::symmetric(self.viewport_range)
    }

    /// Plot title.
    pub fn title(&self) -> String {
        self.transformation.title()
    }
}

/// A change coming from the parameter controls.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Replace one vertex.
    SetVertex {
        /// Vertex index.
        index: usize,
        /// New position.
        point: Point,
    },
    /// Replace the translation vector.
    SetTranslation {
        /// X component.
        tx: f64,
        /// Y component.
        ty: f64,
    },
    /// Replace the rotation angle.
    SetRotation {
        /// Angle in degrees.
        degrees: f64,
    },
    /// Replace the dilation factor.
    SetDilation {
        /// Scale factor.
        factor: f64,
    },
    /// Select a reflection axis directly.
    SetReflectionAxis(Option<ReflectionAxis>),
    /// Select a reflection axis by its label.
    SelectReflectionLabel(String),
    /// Set a view's parameters from a control; values are clamped to the
    /// configured [`ParameterLimits`](crate::ParameterLimits).
    ControlInput(Transformation),
    /// Switch the active view.
    SelectView(TransformKind),
}

/// Current control values and the active view.
#[derive(Debug, Clone)]
pub struct TransformationSession {
    config: LabConfig,
    vertices: Vec<Point>,
    translation: Point,
    rotation_degrees: f64,
    dilation_factor: f64,
    reflection_axis: Option<ReflectionAxis>,
    active: TransformKind,
}

impl TransformationSession {
    /// Create a session with initial values taken from `config`.
    pub fn new(config: LabConfig) -> Self {
        Self {
            vertices: config.vertices.clone(),
            translation: config.translation,
            rotation_degrees: config.rotation_degrees,
            dilation_factor: config.dilation_factor,
            reflection_axis: Some(config.reflection_axis),
            active: TransformKind::default(),
            config,
        }
    }

    /// Access the configuration.
    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    /// The currently active view.
    pub fn active(&self) -> TransformKind {
        self.active
    }

    /// The polygon built from the current vertices.
    pub fn polygon(&self) -> Polygon {
        Polygon::new(self.vertices.iter().copied())
    }

    /// Current parameters for a view.
    pub fn parameters(&self, kind: TransformKind) -> Transformation {
        match kind {
            TransformKind::Translation => Transformation::Translation {
                tx: self.translation.x,
                ty: self.translation.y,
            },
            TransformKind::Rotation => Transformation::Rotation {
                degrees: self.rotation_degrees,
            },
            TransformKind::Dilation => Transformation::Dilation {
                factor: self.dilation_factor,
            },
            TransformKind::Reflection => Transformation::Reflection {
                axis: self.reflection_axis,
            },
        }
    }

    /// Replace the parameters of the view matching `transformation`'s kind.
    pub fn set_parameters(&mut self, transformation: Transformation) {
        match transformation {
            Transformation::Translation { tx, ty } => self.translation = Point::new(tx, ty),
            Transformation::Rotation { degrees } => self.rotation_degrees = degrees,
            Transformation::Dilation { factor } => self.dilation_factor = factor,
            Transformation::Reflection { axis } => self.reflection_axis = axis,
        }
    }

    /// Replace one vertex.
    pub fn set_vertex(&mut self, index: usize, point: Point) -> Result<()> {
        let len = self.vertices.len();
        let slot = self
            .vertices
            .get_mut(index)
            .ok_or(LabError::VertexIndex { index, len })?;
        if !point.is_finite() {
            return Err(LabError::NonFiniteCoordinate { index });
        }
        *slot = point;
        Ok(())
    }

    /// Select a reflection axis by label, following the configured policy.
    pub fn select_reflection_label(&mut self, label: &str) -> Result<()> {
        match label.parse::<ReflectionAxis>() {
            Ok(axis) => {
                self.reflection_axis = Some(axis);
                Ok(())
            }
            Err(err) => match self.config.axis_policy {
                AxisPolicy::Strict => Err(err),
                AxisPolicy::Lenient => {
                    warn!(label, "unknown reflection axis, using identity");
                    self.reflection_axis = None;
                    Ok(())
                }
            },
        }
    }

    /// Apply an event and recompute the active view.
    ///
    /// A rejected event leaves the session unchanged.
    pub fn handle(&mut self, event: SessionEvent) -> Result<TransformResult> {
        debug!(?event, "session event");
        match event {
            SessionEvent::SetVertex { index, point } => self.set_vertex(index, point)?,
            SessionEvent::SetTranslation { tx, ty } => self.translation = Point::new(tx, ty),
            SessionEvent::SetRotation { degrees } => self.rotation_degrees = degrees,
            SessionEvent::SetDilation { factor } => self.dilation_factor = factor,
            SessionEvent::SetReflectionAxis(axis) => self.reflection_axis = axis,
            SessionEvent::SelectReflectionLabel(label) => self.select_reflection_label(&label)?,
            SessionEvent::ControlInput(transformation) => {
                self.set_parameters(self.config.limits.clamp(transformation));
            }
            SessionEvent::SelectView(kind) => self.active = kind,
        }
        Ok(self.active_result())
    }

    /// Pipeline output for a view.
    pub fn result(&self, kind: TransformKind) -> TransformResult {
        TransformResult::compute(
            &self.polygon(),
            self.parameters(kind),
            &self.config.viewport,
        )
    }

    /// Pipeline output for the active view.
    pub fn active_result(&self) -> TransformResult {
        self.result(self.active)
    }

    /// Pipeline output for every view, in view order.
    pub fn results(&self) -> Vec<TransformResult> {
        TransformKind::ALL
            .into_iter()
            .map(|kind| self.result(kind))
            .collect()
    }
}

impl Default for TransformationSession {
    fn default() -> Self {
        Self::new(LabConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_translates_triangle() {
        let session = TransformationSession::default();
        let result = session.active_result();
        assert_eq!(result.transformation.kind(), TransformKind::Translation);
        assert_eq!(
            result.transformed.vertices(),
            &[Point::new(3.0, 2.0), Point::new(5.0, 5.0), Point::new(7.0, 2.0)]
        );
        assert!((result.viewport_range - 10.5).abs() < 1e-9);
    }

    #[test]
    fn rejected_vertex_leaves_state() {
        let mut session = TransformationSession::default();
        let before = session.polygon();
        let err = session
            .handle(SessionEvent::SetVertex {
                index: 3,
                point: Point::new(0.0, 0.0),
            })
            .unwrap_err();
        assert_eq!(err, LabError::VertexIndex { index: 3, len: 3 });
        let err = session
            .handle(SessionEvent::SetVertex {
                index: 0,
                point: Point::new(f64::INFINITY, 0.0),
            })
            .unwrap_err();
        assert_eq!(err, LabError::NonFiniteCoordinate { index: 0 });
        assert_eq!(session.polygon(), before);
    }

    #[test]
    fn lenient_label_falls_back_to_identity() {
        let mut session = TransformationSession::default();
        session
            .handle(SessionEvent::SelectView(TransformKind::Reflection))
            .unwrap();
        let result = session
            .handle(SessionEvent::SelectReflectionLabel("diagonal".into()))
            .unwrap();
        assert_eq!(result.transformed, result.original);
    }

    #[test]
    fn strict_label_is_rejected() {
        let config = LabConfig {
            axis_policy: AxisPolicy::Strict,
            ..LabConfig::default()
        };
        let mut session = TransformationSession::new(config);
        let err = session.select_reflection_label("diagonal").unwrap_err();
        assert_eq!(err, LabError::UnknownAxis("diagonal".into()));
        assert_eq!(
            session.parameters(TransformKind::Reflection),
            Transformation::Reflection {
                axis: Some(ReflectionAxis::XAxis)
            }
        );
    }

    #[test]
    fn control_input_is_clamped_to_limits() {
        let mut session = TransformationSession::default();
        session
            .handle(SessionEvent::ControlInput(Transformation::Dilation {
                factor: 4.2,
            }))
            .unwrap();
        session
            .handle(SessionEvent::ControlInput(Transformation::Translation {
                tx: -9.0,
                ty: 0.5,
            }))
            .unwrap();
        assert_eq!(
            session.parameters(TransformKind::Dilation),
            Transformation::Dilation { factor: 3.0 }
        );
        assert_eq!(
            session.parameters(TransformKind::Translation),
            Transformation::Translation { tx: -5.0, ty: 0.5 }
        );

        // Direct setters bypass the control ranges.
        session
            .handle(SessionEvent::SetDilation { factor: 4.2 })
            .unwrap();
        assert_eq!(
            session.parameters(TransformKind::Dilation),
            Transformation::Dilation { factor: 4.2 }
        );
    }

    #[test]
    fn results_cover_every_view() {
        let results = TransformationSession::default().results();
        let kinds: Vec<_> = results.iter().map(|r| r.transformation.kind()).collect();
        assert_eq!(kinds, TransformKind::ALL);
        for result in &results {
            assert_eq!(result.original, results[0].original);
        }
    }
}
