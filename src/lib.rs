//! transform_lab applies 2D geometric transformations to a polygon and lays out
//! the original and transformed shapes on one coordinate plane.
//!
//! The core is a pure pipeline: a [`Polygon`] is closed into a
//! [`ClosedPolygon`], one [`Transformation`] is applied, and
//! [`viewport_range`] frames both outlines. [`TransformationSession`] wires that
//! pipeline to control events, and [`build_figure`] turns a
//! [`TransformResult`] into backend-agnostic draw commands.

#![forbid(unsafe_code)]

pub mod axis;
pub mod config;
pub mod error;
pub mod geom;
pub mod matrix;
pub mod ops;
pub mod polygon;
pub mod render;
pub mod session;
pub mod style;
pub mod transformation;
pub mod view;

mod transform;

#[cfg(feature = "gpui")]
pub mod gpui_backend;

pub use axis::AxisFormatter;
pub use config::{AxisPolicy, LabConfig, LabConfigBuilder, ParameterLimits};
pub use error::{LabError, Result};
pub use geom::{Point, ScreenPoint, ScreenRect};
pub use matrix::Mat2;
pub use ops::{ReflectionAxis, dilate, reflect, rotate, translate};
pub use polygon::{ClosedPolygon, Polygon};
pub use render::{
    Color, Dash, LineSegment, LineStyle, MarkerShape, MarkerStyle, RectStyle, RenderCommand,
    RenderList, TextStyle, build_figure,
};
pub use session::{SessionEvent, TransformResult, TransformationSession};
pub use style::{ShapeStyle, Theme};
pub use transformation::{TransformKind, Transformation};
pub use view::{MAX_RANGE, Range, Viewport, ViewportConfig, viewport_range};

#[cfg(feature = "gpui")]
pub use gpui_backend::TransformationView;
