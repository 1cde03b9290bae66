//! Colours and strokes for the before/after figure.

use crate::render::{Color, Dash, LineStyle, MarkerShape, MarkerStyle};

/// Styling for one plotted shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    /// Outline stroke.
    pub stroke: LineStyle,
    /// Interior fill.
    pub fill: Color,
    /// Vertex markers.
    pub marker: MarkerStyle,
}

/// Visual theme for the figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Figure background.
    pub background: Color,
    /// Plot frame and tick label colour.
    pub foreground: Color,
    /// Grid lines.
    pub grid: LineStyle,
    /// Axis lines through the origin.
    pub axis: LineStyle,
    /// The shape before transformation.
    pub original: ShapeStyle,
    /// The shape after transformation.
    pub transformed: ShapeStyle,
    /// Title font size in pixels.
    pub title_size: f32,
    /// Tick and legend font size in pixels.
    pub label_size: f32,
}

impl Theme {
    /// Create the default light theme.
    pub fn new() -> Self {
        Self::light()
    }

    /// Light theme: blue solid original, red dashed result.
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            foreground: Color::BLACK,
            grid: LineStyle {
                color: Color::new(0.5, 0.5, 0.5, 0.6),
                width: 0.5,
                dash: Some(Dash::new(4.0, 4.0)),
            },
            axis: LineStyle {
                color: Color::new(0.5, 0.5, 0.5, 1.0),
                width: 1.0,
                dash: None,
            },
            original: ShapeStyle {
                stroke: LineStyle {
                    color: Color::new(0.0, 0.0, 1.0, 1.0),
                    width: 1.5,
                    dash: None,
                },
                fill: Color::new(0.678, 0.847, 0.902, 0.5),
                marker: MarkerStyle {
                    color: Color::new(0.0, 0.0, 1.0, 1.0),
                    size: 6.0,
                    shape: MarkerShape::Circle,
                },
            },
            transformed: ShapeStyle {
                stroke: LineStyle {
                    color: Color::new(1.0, 0.0, 0.0, 1.0),
                    width: 1.5,
                    dash: Some(Dash::new(6.0, 4.0)),
                },
                fill: Color::new(0.980, 0.502, 0.447, 0.5),
                marker: MarkerStyle {
                    color: Color::new(1.0, 0.0, 0.0, 1.0),
                    size: 7.0,
                    shape: MarkerShape::Cross,
                },
            },
            title_size: 16.0,
            label_size: 11.0,
        }
    }

    /// Dark theme with the same shape colours on a dark background.
    pub fn dark() -> Self {
        let light = Self::light();
        Self {
            background: Color::new(0.08, 0.09, 0.11, 1.0),
            foreground: Color::new(0.85, 0.87, 0.9, 1.0),
            original: ShapeStyle {
                stroke: LineStyle {
                    color: Color::new(0.35, 0.6, 1.0, 1.0),
                    ..light.original.stroke
                },
                marker: MarkerStyle {
                    color: Color::new(0.35, 0.6, 1.0, 1.0),
                    ..light.original.marker
                },
                ..light.original
            },
            ..light
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
