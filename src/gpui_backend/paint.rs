use gpui::{
    App, BorderStyle, Bounds, ContentMask, Corners, Edges, Hsla, PathBuilder, Pixels, TextRun,
    Window, font, point, px, quad,
};

use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{
    Color, LineSegment, LineStyle, MarkerShape, MarkerStyle, RectStyle, RenderCommand, RenderList,
    TextStyle,
};

const CROSS_STROKE: f32 = 1.5;

/// Paints a figure's commands in order.
///
/// The figure opens at most one clip region at a time (the plot area), so
/// the painter tracks a single optional mask.
struct FigurePainter<'a> {
    window: &'a mut Window,
    cx: &'a mut App,
    clip: Option<ContentMask<Pixels>>,
}

pub(crate) fn paint_figure(figure: &RenderList, window: &mut Window, cx: &mut App) {
    let mut painter = FigurePainter {
        window,
        cx,
        clip: None,
    };
    for command in figure.commands() {
        painter.paint(command);
    }
}

impl FigurePainter<'_> {
    fn paint(&mut self, command: &RenderCommand) {
        match command {
            RenderCommand::ClipRect(rect) => {
                self.clip = Some(ContentMask {
                    bounds: to_bounds(*rect),
                });
            }
            RenderCommand::ClipEnd => self.clip = None,
            RenderCommand::LineSegments { segments, style } => self.strokes(segments, *style),
            RenderCommand::Polygon { points, fill } => self.fill_outline(points, *fill),
            RenderCommand::Points { points, style } => self.markers(points, *style),
            RenderCommand::Rect { rect, style } => self.rect(*rect, *style),
            RenderCommand::Text {
                position,
                text,
                style,
            } => self.text(*position, text, style),
        }
    }

    fn strokes(&mut self, segments: &[LineSegment], style: LineStyle) {
        let mut builder = PathBuilder::stroke(px(style.width.max(0.5)));
        for segment in segments {
            builder.move_to(to_point(segment.start));
            builder.line_to(to_point(segment.end));
        }
        self.path(builder, style.color);
    }

    fn fill_outline(&mut self, points: &[ScreenPoint], fill: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut builder = PathBuilder::fill();
        builder.move_to(to_point(*first));
        for pt in rest {
            builder.line_to(to_point(*pt));
        }
        self.path(builder, fill);
    }

    fn markers(&mut self, points: &[ScreenPoint], style: MarkerStyle) {
        let half = style.size.max(2.0) * 0.5;
        match style.shape {
            MarkerShape::Circle => {
                let color = to_hsla(style.color);
                let quads: Vec<_> = points
                    .iter()
                    .map(|pt| {
                        let rect = ScreenRect::new(
                            ScreenPoint::new(pt.x - half, pt.y - half),
                            ScreenPoint::new(pt.x + half, pt.y + half),
                        );
                        quad(
                            to_bounds(rect),
                            Corners::all(px(half)),
                            color,
                            Edges::all(px(0.0)),
                            color,
                            BorderStyle::default(),
                        )
                    })
                    .collect();
                self.masked(|window| {
                    for marker in quads {
                        window.paint_quad(marker);
                    }
                });
            }
            MarkerShape::Cross => {
                let mut builder = PathBuilder::stroke(px(CROSS_STROKE));
                for pt in points {
                    builder.move_to(to_point(ScreenPoint::new(pt.x - half, pt.y - half)));
                    builder.line_to(to_point(ScreenPoint::new(pt.x + half, pt.y + half)));
                    builder.move_to(to_point(ScreenPoint::new(pt.x - half, pt.y + half)));
                    builder.line_to(to_point(ScreenPoint::new(pt.x + half, pt.y - half)));
                }
                self.path(builder, style.color);
            }
        }
    }

    /// Background, plot frame and legend box. A zero stroke width paints a
    /// plain fill; a transparent fill paints only the border.
    fn rect(&mut self, rect: ScreenRect, style: RectStyle) {
        let stroke_width = if style.stroke.a > 0.0 {
            style.stroke_width.max(0.0)
        } else {
            0.0
        };
        let background = quad(
            to_bounds(rect),
            Corners::all(px(0.0)),
            to_hsla(style.fill),
            Edges::all(px(stroke_width)),
            to_hsla(style.stroke),
            BorderStyle::default(),
        );
        self.masked(|window| window.paint_quad(background));
    }

    /// `position` is the top-left corner of the line box, so the shaped line
    /// is painted there directly.
    fn text(&mut self, position: ScreenPoint, text: &str, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        let run = TextRun {
            len: text.len(),
            font: font(".SystemUIFont"),
            color: to_hsla(style.color),
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        let line = self
            .window
            .text_system()
            .shape_line(text.to_string().into(), px(style.size), &[run], None);
        let line_height = line.ascent + line.descent;
        let clip = self.clip.clone();
        let cx = &mut *self.cx;
        self.window.with_content_mask(clip, |window| {
            if let Err(err) = line.paint(to_point(position), line_height, window, cx) {
                tracing::warn!(%err, text, "failed to paint label");
            }
        });
    }

    fn path(&mut self, builder: PathBuilder, color: Color) {
        match builder.build() {
            Ok(path) => self.masked(|window| window.paint_path(path, to_hsla(color))),
            Err(err) => tracing::trace!(%err, "skipped empty path"),
        }
    }

    fn masked(&mut self, f: impl FnOnce(&mut Window)) {
        self.window.with_content_mask(self.clip.clone(), f);
    }
}

pub(crate) fn to_hsla(color: Color) -> Hsla {
    Hsla::from(gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    })
}

fn to_point(pt: ScreenPoint) -> gpui::Point<Pixels> {
    point(px(pt.x), px(pt.y))
}

fn to_bounds(rect: ScreenRect) -> Bounds<Pixels> {
    Bounds::from_corners(to_point(rect.min), to_point(rect.max))
}
