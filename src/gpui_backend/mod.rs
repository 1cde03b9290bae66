//! GPUI integration for transform_lab.
//!
//! This module provides a GPUI view that paints the before/after figure for
//! the active view of a [`TransformationSession`](crate::TransformationSession).

mod paint;
mod view;

pub use view::TransformationView;
