//! Rendering primitives and the before/after figure builder.
//!
//! These types are backend-agnostic. [`build_figure`] lays out a
//! [`TransformResult`] as a list of screen-space draw commands; a backend
//! (such as the GPUI one) only has to paint them in order.

use crate::axis::{AxisFormatter, DEFAULT_TICK_TARGET, ticks};
use crate::geom::{Point, ScreenPoint, ScreenRect};
use crate::polygon::ClosedPolygon;
use crate::session::TransformResult;
use crate::style::{ShapeStyle, Theme};
use crate::transform::Transform;
use crate::view::Viewport;

const FIGURE_PADDING: f32 = 12.0;
const TICK_LABEL_GAP: f32 = 4.0;
const LEGEND_PADDING: f32 = 8.0;
const LEGEND_SWATCH: f32 = 18.0;
/// Rough glyph advance relative to the font size, used for layout only.
const GLYPH_WIDTH_RATIO: f32 = 0.6;

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

/// Dash pattern in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dash {
    /// Length of each drawn stretch.
    pub on: f32,
    /// Length of each gap.
    pub off: f32,
}

impl Dash {
    /// Create a dash pattern.
    pub const fn new(on: f32, off: f32) -> Self {
        Self { on, off }
    }
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
    /// Dash pattern; `None` draws a solid line.
    pub dash: Option<Dash>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            dash: None,
        }
    }
}

/// Marker shape for vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    /// Circle marker.
    Circle,
    /// Cross marker.
    Cross,
}

/// Marker styling.
///
/// Marker sizes are expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Marker color.
    pub color: Color,
    /// Marker size in pixels.
    pub size: f32,
    /// Marker shape.
    pub shape: MarkerShape,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 4.0,
            shape: MarkerShape::Circle,
        }
    }
}

/// Rectangle styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    /// Fill color.
    pub fill: Color,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width.
    pub stroke_width: f32,
}

impl Default for RectStyle {
    fn default() -> Self {
        Self {
            fill: Color::TRANSPARENT,
            stroke: Color::BLACK,
            stroke_width: 1.0,
        }
    }
}

/// Text styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
        }
    }
}

/// A line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Segment start.
    pub start: ScreenPoint,
    /// Segment end.
    pub end: ScreenPoint,
}

impl LineSegment {
    /// Create a new line segment.
    pub fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self { start, end }
    }

    /// Segment length in pixels.
    pub fn length(&self) -> f32 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

/// A single draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Start clipping to a rectangle.
    ClipRect(ScreenRect),
    /// End clipping.
    ClipEnd,
    /// Draw line segments.
    LineSegments {
        /// Segments to draw; dashes are already split into pieces.
        segments: Vec<LineSegment>,
        /// Styling for the segments.
        style: LineStyle,
    },
    /// Fill a closed polygon.
    Polygon {
        /// Outline points; the last point repeats the first.
        points: Vec<ScreenPoint>,
        /// Fill color.
        fill: Color,
    },
    /// Draw vertex markers.
    Points {
        /// Points to draw.
        points: Vec<ScreenPoint>,
        /// Marker styling.
        style: MarkerStyle,
    },
    /// Draw a rectangle.
    Rect {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Rectangle styling.
        style: RectStyle,
    },
    /// Draw text; `position` is the top-left corner of the line box.
    Text {
        /// Text position.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

/// Aggregated render commands.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Check whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Lay out the before/after figure for `result` inside `bounds`.
///
/// The plot area is square so both axes share one scale. Returns an empty list
/// when `bounds` is too small to draw into.
pub fn build_figure(result: &TransformResult, theme: &Theme, bounds: ScreenRect) -> RenderList {
    let mut render = RenderList::new();
    if !bounds.is_valid() {
        return render;
    }

    render.push(RenderCommand::Rect {
        rect: bounds,
        style: RectStyle {
            fill: theme.background,
            stroke: Color::TRANSPARENT,
            stroke_width: 0.0,
        },
    });

    let title = result.title();
    let title_height = theme.title_size * 1.4;
    render.push(RenderCommand::Text {
        position: ScreenPoint::new(
            bounds.center().x - text_width(&title, theme.title_size) * 0.5,
            bounds.min.y + FIGURE_PADDING,
        ),
        text: title,
        style: TextStyle {
            color: theme.foreground,
            size: theme.title_size,
        },
    });

    let label_height = theme.label_size * 1.4;
    let label_width = text_width("-00.0", theme.label_size);
    let area = ScreenRect::new(
        ScreenPoint::new(
            bounds.min.x + FIGURE_PADDING + label_width + TICK_LABEL_GAP,
            bounds.min.y + FIGURE_PADDING + title_height,
        ),
        ScreenPoint::new(
            bounds.max.x - FIGURE_PADDING,
            bounds.max.y - FIGURE_PADDING - label_height - TICK_LABEL_GAP,
        ),
    );
    let plot_rect = area.centered_square();
    let Some(transform) = Transform::new(result.viewport(), plot_rect) else {
        return render;
    };

    render.push(RenderCommand::ClipRect(plot_rect));
    push_grid(&mut render, &transform, result.viewport(), theme);
    push_axes(&mut render, &transform, result.viewport(), theme);
    push_shape(&mut render, &transform, &result.original, &theme.original);
    push_shape(&mut render, &transform, &result.transformed, &theme.transformed);
    render.push(RenderCommand::ClipEnd);

    render.push(RenderCommand::Rect {
        rect: plot_rect,
        style: RectStyle {
            fill: Color::TRANSPARENT,
            stroke: theme.foreground,
            stroke_width: 1.0,
        },
    });
    push_tick_labels(&mut render, &transform, result.viewport(), theme);
    push_legend(&mut render, plot_rect, theme);
    render
}

fn push_grid(render: &mut RenderList, transform: &Transform, viewport: Viewport, theme: &Theme) {
    let clip = transform.screen();
    let mut lines = Vec::new();
    for x in ticks(viewport.x, DEFAULT_TICK_TARGET) {
        lines.push([Point::new(x, viewport.y.min), Point::new(x, viewport.y.max)]);
    }
    for y in ticks(viewport.y, DEFAULT_TICK_TARGET) {
        lines.push([Point::new(viewport.x.min, y), Point::new(viewport.x.max, y)]);
    }
    let mut segments = Vec::new();
    let mut scratch = Vec::new();
    for line in lines {
        build_line_segments(&line, transform, clip, theme.grid.dash, &mut scratch);
        segments.append(&mut scratch);
    }
    if !segments.is_empty() {
        render.push(RenderCommand::LineSegments {
            segments,
            style: theme.grid,
        });
    }
}

fn push_axes(render: &mut RenderList, transform: &Transform, viewport: Viewport, theme: &Theme) {
    let clip = transform.screen();
    let mut segments = Vec::new();
    let mut scratch = Vec::new();
    let axes = [
        [Point::new(viewport.x.min, 0.0), Point::new(viewport.x.max, 0.0)],
        [Point::new(0.0, viewport.y.min), Point::new(0.0, viewport.y.max)],
    ];
    for axis in axes {
        build_line_segments(&axis, transform, clip, theme.axis.dash, &mut scratch);
        segments.append(&mut scratch);
    }
    render.push(RenderCommand::LineSegments {
        segments,
        style: theme.axis,
    });
}

fn push_shape(
    render: &mut RenderList,
    transform: &Transform,
    polygon: &ClosedPolygon,
    style: &ShapeStyle,
) {
    let clip = transform.screen();
    let outline: Vec<ScreenPoint> = polygon
        .points()
        .iter()
        .filter_map(|p| transform.data_to_screen(*p))
        .collect();
    if outline.len() >= 4 {
        render.push(RenderCommand::Polygon {
            points: outline,
            fill: style.fill,
        });
    }

    let mut segments = Vec::new();
    build_line_segments(polygon.points(), transform, clip, style.stroke.dash, &mut segments);
    if !segments.is_empty() {
        render.push(RenderCommand::LineSegments {
            segments,
            style: style.stroke,
        });
    }

    let mut markers = Vec::new();
    build_scatter_points(polygon.vertices(), transform, clip, &mut markers);
    if !markers.is_empty() {
        render.push(RenderCommand::Points {
            points: markers,
            style: style.marker,
        });
    }
}

fn push_tick_labels(
    render: &mut RenderList,
    transform: &Transform,
    viewport: Viewport,
    theme: &Theme,
) {
    let formatter = AxisFormatter::default();
    let plot = transform.screen();
    let style = TextStyle {
        color: theme.foreground,
        size: theme.label_size,
    };
    for x in ticks(viewport.x, DEFAULT_TICK_TARGET) {
        let Some(at) = transform.data_to_screen(Point::new(x, viewport.y.min)) else {
            continue;
        };
        let text = formatter.format(x);
        render.push(RenderCommand::Text {
            position: ScreenPoint::new(
                at.x - text_width(&text, theme.label_size) * 0.5,
                plot.max.y + TICK_LABEL_GAP,
            ),
            text,
            style: style.clone(),
        });
    }
    for y in ticks(viewport.y, DEFAULT_TICK_TARGET) {
        let Some(at) = transform.data_to_screen(Point::new(viewport.x.min, y)) else {
            continue;
        };
        let text = formatter.format(y);
        render.push(RenderCommand::Text {
            position: ScreenPoint::new(
                plot.min.x - TICK_LABEL_GAP - text_width(&text, theme.label_size),
                at.y - theme.label_size * 0.7,
            ),
            text,
            style: style.clone(),
        });
    }
}

fn push_legend(render: &mut RenderList, plot: ScreenRect, theme: &Theme) {
    let entries = [("Original", &theme.original), ("Transformed", &theme.transformed)];
    let row_height = theme.label_size * 1.6;
    let text_w = entries
        .iter()
        .map(|(label, _)| text_width(label, theme.label_size))
        .fold(0.0_f32, f32::max);
    let width = LEGEND_PADDING * 3.0 + LEGEND_SWATCH + text_w;
    let height = LEGEND_PADDING * 2.0 + row_height * entries.len() as f32;
    let origin = ScreenPoint::new(
        plot.max.x - width - LEGEND_PADDING,
        plot.min.y + LEGEND_PADDING,
    );
    let rect = ScreenRect::from_origin_size(origin, width, height);
    render.push(RenderCommand::Rect {
        rect,
        style: RectStyle {
            fill: Color::new(
                theme.background.r,
                theme.background.g,
                theme.background.b,
                0.85,
            ),
            stroke: theme.foreground,
            stroke_width: 0.5,
        },
    });

    for (row, (label, style)) in entries.into_iter().enumerate() {
        let mid_y = origin.y + LEGEND_PADDING + row_height * (row as f32 + 0.5);
        let start = ScreenPoint::new(origin.x + LEGEND_PADDING, mid_y);
        let end = ScreenPoint::new(start.x + LEGEND_SWATCH, mid_y);
        let mut segments = Vec::new();
        dash_segment(LineSegment::new(start, end), style.stroke.dash, &mut segments);
        render.push(RenderCommand::LineSegments {
            segments,
            style: style.stroke,
        });
        render.push(RenderCommand::Points {
            points: vec![ScreenPoint::new((start.x + end.x) * 0.5, mid_y)],
            style: style.marker,
        });
        render.push(RenderCommand::Text {
            position: ScreenPoint::new(
                end.x + LEGEND_PADDING,
                mid_y - theme.label_size * 0.7,
            ),
            text: label.to_string(),
            style: TextStyle {
                color: theme.foreground,
                size: theme.label_size,
            },
        });
    }
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * GLYPH_WIDTH_RATIO
}

/// Build clipped line segments from data points, split into dashes if requested.
pub(crate) fn build_line_segments(
    points: &[Point],
    transform: &Transform,
    clip: ScreenRect,
    dash: Option<Dash>,
    out: &mut Vec<LineSegment>,
) {
    out.clear();
    if points.len() < 2 {
        return;
    }
    for window in points.windows(2) {
        let Some(start) = transform.data_to_screen(window[0]) else {
            continue;
        };
        let Some(end) = transform.data_to_screen(window[1]) else {
            continue;
        };
        if let Some((clipped_start, clipped_end)) = clip_segment(start, end, clip) {
            dash_segment(LineSegment::new(clipped_start, clipped_end), dash, out);
        }
    }
}

/// Build clipped marker points from data points.
pub(crate) fn build_scatter_points(
    points: &[Point],
    transform: &Transform,
    clip: ScreenRect,
    out: &mut Vec<ScreenPoint>,
) {
    out.clear();
    for point in points {
        let Some(screen) = transform.data_to_screen(*point) else {
            continue;
        };
        if screen.x >= clip.min.x
            && screen.x <= clip.max.x
            && screen.y >= clip.min.y
            && screen.y <= clip.max.y
        {
            out.push(screen);
        }
    }
}

fn dash_segment(segment: LineSegment, dash: Option<Dash>, out: &mut Vec<LineSegment>) {
    let length = segment.length();
    let Some(dash) = dash.filter(|d| d.on > 0.0 && d.off >= 0.0 && length > 0.0) else {
        out.push(segment);
        return;
    };
    let dx = (segment.end.x - segment.start.x) / length;
    let dy = (segment.end.y - segment.start.y) / length;
    let at = |t: f32| ScreenPoint::new(segment.start.x + dx * t, segment.start.y + dy * t);
    let mut t = 0.0;
    while t < length {
        let stop = (t + dash.on).min(length);
        out.push(LineSegment::new(at(t), at(stop)));
        t = stop + dash.off;
    }
}

fn clip_segment(
    mut start: ScreenPoint,
    mut end: ScreenPoint,
    rect: ScreenRect,
) -> Option<(ScreenPoint, ScreenPoint)> {
    const LEFT: u8 = 1;
    const RIGHT: u8 = 2;
    const TOP: u8 = 4;
    const BOTTOM: u8 = 8;

    let mut out_start = region_code(start, rect, LEFT, RIGHT, TOP, BOTTOM);
    let mut out_end = region_code(end, rect, LEFT, RIGHT, TOP, BOTTOM);

    loop {
        if (out_start | out_end) == 0 {
            return Some((start, end));
        }
        if (out_start & out_end) != 0 {
            return None;
        }

        let out_code = if out_start != 0 { out_start } else { out_end };
        let (mut x, mut y) = (0.0_f32, 0.0_f32);

        if (out_code & TOP) != 0 {
            x = start.x + (end.x - start.x) * (rect.min.y - start.y) / (end.y - start.y);
            y = rect.min.y;
        } else if (out_code & BOTTOM) != 0 {
            x = start.x + (end.x - start.x) * (rect.max.y - start.y) / (end.y - start.y);
            y = rect.max.y;
        } else if (out_code & RIGHT) != 0 {
            y = start.y + (end.y - start.y) * (rect.max.x - start.x) / (end.x - start.x);
            x = rect.max.x;
        } else if (out_code & LEFT) != 0 {
            y = start.y + (end.y - start.y) * (rect.min.x - start.x) / (end.x - start.x);
            x = rect.min.x;
        }

        let new_point = ScreenPoint::new(x, y);
        if out_code == out_start {
            start = new_point;
            out_start = region_code(start, rect, LEFT, RIGHT, TOP, BOTTOM);
        } else {
            end = new_point;
            out_end = region_code(end, rect, LEFT, RIGHT, TOP, BOTTOM);
        }
    }
}

fn region_code(
    point: ScreenPoint,
    rect: ScreenRect,
    left: u8,
    right: u8,
    top: u8,
    bottom: u8,
) -> u8 {
    let mut code = 0;
    if point.x < rect.min.x {
        code |= left;
    } else if point.x > rect.max.x {
        code |= right;
    }
    if point.y < rect.min.y {
        code |= top;
    } else if point.y > rect.max.y {
        code |= bottom;
    }
    code
}
