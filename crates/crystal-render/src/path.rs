//! Vector paths and their tessellation into triangles.
//!
//! Paths are built from move/line/curve commands and tessellated with
//! lyon into vertex/index buffers that any backend can consume.

use lyon::math::point as lyon_point;
use lyon::path::Path as LyonPath;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillRule as LyonFillRule, FillTessellator, FillVertex,
    FillVertexConstructor, LineCap as LyonLineCap, LineJoin as LyonLineJoin, StrokeOptions,
    StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

use crate::paint::{FillRule, LineCap, LineJoin, Stroke};
use crate::types::{CornerRadii, Point, Rect};

/// Commands that make up a path.
#[derive(Debug, Clone, Copy)]
pub enum PathCommand {
    /// Move to a point without drawing.
    MoveTo(Point),
    /// Draw a line to a point.
    LineTo(Point),
    /// Draw a quadratic bezier curve.
    QuadTo { control: Point, end: Point },
    /// Draw a cubic bezier curve.
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Close the current subpath.
    Close,
}

/// A 2D path built from line and bezier segments.
#[derive(Debug, Clone, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Move to a point without drawing.
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    /// Draw a line to a point.
    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    /// Draw a quadratic bezier curve.
    pub fn quad_to(&mut self, control: Point, end: Point) -> &mut Self {
        self.commands.push(PathCommand::QuadTo { control, end });
        self
    }

    /// Draw a cubic bezier curve.
    pub fn cubic_to(&mut self, control1: Point, control2: Point, end: Point) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            end,
        });
        self
    }

    /// Close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Get the path commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Create a rectangular path.
    pub fn rect(rect: Rect) -> Self {
        let mut path = Self::new();
        path.move_to(Point::new(rect.left(), rect.top()))
            .line_to(Point::new(rect.right(), rect.top()))
            .line_to(Point::new(rect.right(), rect.bottom()))
            .line_to(Point::new(rect.left(), rect.bottom()))
            .close();
        path
    }

    /// Create a rounded rectangle path.
    ///
    /// Corners are cubic beziers whose control points are pinned to the
    /// corner of the rectangle, giving the slightly square shoulder
    /// characteristic of classic themed buttons rather than a circular
    /// arc. A zero radius degenerates to the corner point itself.
    pub fn rounded_rect(rect: Rect, radii: CornerRadii) -> Self {
        let (x, y) = (rect.left(), rect.top());
        let (w, h) = (rect.width(), rect.height());
        let tl = radii.top_left;
        let tr = radii.top_right;
        let br = radii.bottom_right;
        let bl = radii.bottom_left;

        let mut path = Self::new();
        path.move_to(Point::new(x, y + tl));
        path.cubic_to(
            Point::new(x, y),
            Point::new(x + tl, y),
            Point::new(x + tl, y),
        );
        path.line_to(Point::new(x + w - tr, y));
        path.cubic_to(
            Point::new(x + w, y),
            Point::new(x + w, y + tr),
            Point::new(x + w, y + tr),
        );
        path.line_to(Point::new(x + w, y + h - br));
        path.cubic_to(
            Point::new(x + w, y + h),
            Point::new(x + w - br, y + h),
            Point::new(x + w - br, y + h),
        );
        path.line_to(Point::new(x + bl, y + h));
        path.cubic_to(
            Point::new(x, y + h),
            Point::new(x, y + h - bl),
            Point::new(x, y + h - bl),
        );
        path.close();
        path
    }

    /// Create an ellipse path inscribed in the given rectangle.
    pub fn ellipse(rect: Rect) -> Self {
        // Cubic bezier circle approximation constant.
        const KAPPA: f32 = 0.552_284_8;

        let cx = rect.center().x;
        let cy = rect.center().y;
        let rx = rect.width() / 2.0;
        let ry = rect.height() / 2.0;
        let ox = rx * KAPPA;
        let oy = ry * KAPPA;

        let mut path = Self::new();
        path.move_to(Point::new(cx + rx, cy));
        path.cubic_to(
            Point::new(cx + rx, cy + oy),
            Point::new(cx + ox, cy + ry),
            Point::new(cx, cy + ry),
        );
        path.cubic_to(
            Point::new(cx - ox, cy + ry),
            Point::new(cx - rx, cy + oy),
            Point::new(cx - rx, cy),
        );
        path.cubic_to(
            Point::new(cx - rx, cy - oy),
            Point::new(cx - ox, cy - ry),
            Point::new(cx, cy - ry),
        );
        path.cubic_to(
            Point::new(cx + ox, cy - ry),
            Point::new(cx + rx, cy - oy),
            Point::new(cx + rx, cy),
        );
        path.close();
        path
    }

    /// Create a circle path.
    pub fn circle(center: Point, radius: f32) -> Self {
        Self::ellipse(Rect::new(
            center.x - radius,
            center.y - radius,
            radius * 2.0,
            radius * 2.0,
        ))
    }

    /// Compute the bounding box of the path.
    ///
    /// Control points are included, so the box is conservative for
    /// curved segments. Returns `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        let mut min = Point::new(f32::INFINITY, f32::INFINITY);
        let mut max = Point::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        let mut any = false;

        let mut extend = |p: &Point| {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            any = true;
        };

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => extend(p),
                PathCommand::QuadTo { control, end } => {
                    extend(control);
                    extend(end);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    extend(control1);
                    extend(control2);
                    extend(end);
                }
                PathCommand::Close => {}
            }
        }

        any.then(|| Rect::from_corners(min, max))
    }
}

/// Tessellated path output: triangle soup for a backend to rasterize.
#[derive(Debug, Clone, Default)]
pub struct TessellatedPath {
    /// Vertex positions (x, y).
    pub vertices: Vec<[f32; 2]>,
    /// Triangle indices.
    pub indices: Vec<u32>,
}

impl TessellatedPath {
    /// Create a new empty tessellated path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the tessellation is empty.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of triangles in the tessellation.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Convert our Path to lyon's Path format.
pub fn to_lyon_path(path: &Path) -> LyonPath {
    let mut builder = LyonPath::builder();
    let mut open = false;

    for cmd in path.commands() {
        match cmd {
            PathCommand::MoveTo(p) => {
                if open {
                    builder.end(false);
                }
                builder.begin(lyon_point(p.x, p.y));
                open = true;
            }
            PathCommand::LineTo(p) => {
                builder.line_to(lyon_point(p.x, p.y));
            }
            PathCommand::QuadTo { control, end } => {
                builder.quadratic_bezier_to(
                    lyon_point(control.x, control.y),
                    lyon_point(end.x, end.y),
                );
            }
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => {
                builder.cubic_bezier_to(
                    lyon_point(control1.x, control1.y),
                    lyon_point(control2.x, control2.y),
                    lyon_point(end.x, end.y),
                );
            }
            PathCommand::Close => {
                builder.end(true);
                open = false;
            }
        }
    }

    if open {
        builder.end(false);
    }
    builder.build()
}

fn to_lyon_fill_rule(rule: FillRule) -> LyonFillRule {
    match rule {
        FillRule::NonZero => LyonFillRule::NonZero,
        FillRule::EvenOdd => LyonFillRule::EvenOdd,
    }
}

fn to_lyon_line_cap(cap: LineCap) -> LyonLineCap {
    match cap {
        LineCap::Butt => LyonLineCap::Butt,
        LineCap::Round => LyonLineCap::Round,
        LineCap::Square => LyonLineCap::Square,
    }
}

fn to_lyon_line_join(join: LineJoin) -> LyonLineJoin {
    match join {
        LineJoin::Miter => LyonLineJoin::Miter,
        LineJoin::Round => LyonLineJoin::Round,
        LineJoin::Bevel => LyonLineJoin::Bevel,
    }
}

struct FillVertexCtor;

impl FillVertexConstructor<[f32; 2]> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> [f32; 2] {
        [vertex.position().x, vertex.position().y]
    }
}

struct StrokeVertexCtor;

impl StrokeVertexConstructor<[f32; 2]> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> [f32; 2] {
        [vertex.position().x, vertex.position().y]
    }
}

/// Tessellate a path for filling.
pub fn tessellate_fill(path: &Path, fill_rule: FillRule, tolerance: f32) -> TessellatedPath {
    if path.is_empty() {
        return TessellatedPath::new();
    }

    let lyon_path = to_lyon_path(path);

    let mut buffers: VertexBuffers<[f32; 2], u32> = VertexBuffers::new();
    let mut tessellator = FillTessellator::new();

    let options = FillOptions::default()
        .with_fill_rule(to_lyon_fill_rule(fill_rule))
        .with_tolerance(tolerance);

    let result = tessellator.tessellate_path(
        &lyon_path,
        &options,
        &mut BuffersBuilder::new(&mut buffers, FillVertexCtor),
    );

    if let Err(e) = result {
        tracing::warn!("fill tessellation failed: {e:?}");
        return TessellatedPath::new();
    }

    TessellatedPath {
        vertices: buffers.vertices,
        indices: buffers.indices,
    }
}

/// Tessellate a path for stroking.
pub fn tessellate_stroke(path: &Path, stroke: &Stroke, tolerance: f32) -> TessellatedPath {
    if path.is_empty() {
        return TessellatedPath::new();
    }

    let lyon_path = to_lyon_path(path);

    let mut buffers: VertexBuffers<[f32; 2], u32> = VertexBuffers::new();
    let mut tessellator = StrokeTessellator::new();

    let options = StrokeOptions::default()
        .with_line_width(stroke.width)
        .with_line_cap(to_lyon_line_cap(stroke.cap))
        .with_line_join(to_lyon_line_join(stroke.join))
        .with_miter_limit(stroke.miter_limit)
        .with_tolerance(tolerance);

    let result = tessellator.tessellate_path(
        &lyon_path,
        &options,
        &mut BuffersBuilder::new(&mut buffers, StrokeVertexCtor),
    );

    if let Err(e) = result {
        tracing::warn!("stroke tessellation failed: {e:?}");
        return TessellatedPath::new();
    }

    TessellatedPath {
        vertices: buffers.vertices,
        indices: buffers.indices,
    }
}

/// Default tessellation tolerance.
///
/// Smaller values produce more accurate curves but more vertices.
pub const DEFAULT_TOLERANCE: f32 = 0.1;
