//! Hit regions built from vector paths.
//!
//! A `Region` captures the filled area of a path as a triangle set so
//! that point containment can be answered without re-tessellating on
//! every mouse move.

use crate::paint::FillRule;
use crate::path::{tessellate_fill, Path, TessellatedPath, DEFAULT_TOLERANCE};
use crate::types::{Point, Rect};

/// The filled area of a path, queryable for point containment.
#[derive(Debug, Clone, Default)]
pub struct Region {
    triangles: TessellatedPath,
    bounds: Option<Rect>,
}

impl Region {
    /// An empty region containing no points.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a region from the filled area of a path.
    pub fn from_path(path: &Path) -> Self {
        let triangles = tessellate_fill(path, FillRule::NonZero, DEFAULT_TOLERANCE);
        let bounds = compute_bounds(&triangles);
        Self { triangles, bounds }
    }

    /// Build a rectangular region.
    pub fn from_rect(rect: Rect) -> Self {
        Self::from_path(&Path::rect(rect))
    }

    /// Check if the region contains no area.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The bounding box of the region, if it is non-empty.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Test whether a point lies inside the region.
    pub fn contains(&self, point: Point) -> bool {
        match self.bounds {
            Some(b) if b.inflate(0.001).contains(point) => {}
            _ => return false,
        }

        let verts = &self.triangles.vertices;
        self.triangles.indices.chunks_exact(3).any(|tri| {
            point_in_triangle(
                point,
                verts[tri[0] as usize],
                verts[tri[1] as usize],
                verts[tri[2] as usize],
            )
        })
    }
}

fn compute_bounds(triangles: &TessellatedPath) -> Option<Rect> {
    if triangles.is_empty() {
        return None;
    }
    let mut min = Point::new(f32::INFINITY, f32::INFINITY);
    let mut max = Point::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
    for &[x, y] in &triangles.vertices {
        min.x = min.x.min(x);
        min.y = min.y.min(y);
        max.x = max.x.max(x);
        max.y = max.y.max(y);
    }
    Some(Rect::from_corners(min, max))
}

/// Barycentric sign test, inclusive of edges.
fn point_in_triangle(p: Point, a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> bool {
    let sign = |p1: [f32; 2], p2: [f32; 2]| -> f32 {
        (p.x - p2[0]) * (p1[1] - p2[1]) - (p1[0] - p2[0]) * (p.y - p2[1])
    };

    let d1 = sign(a, b);
    let d2 = sign(b, c);
    let d3 = sign(c, a);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CornerRadii;

    #[test]
    fn test_empty_region() {
        let region = Region::empty();
        assert!(region.is_empty());
        assert!(region.bounds().is_none());
        assert!(!region.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_rect_region() {
        let region = Region::from_rect(Rect::new(0.0, 0.0, 100.0, 40.0));
        assert!(!region.is_empty());
        assert!(region.contains(Point::new(50.0, 20.0)));
        assert!(region.contains(Point::new(0.0, 0.0)));
        assert!(!region.contains(Point::new(150.0, 20.0)));
        assert!(!region.contains(Point::new(50.0, -5.0)));
    }

    #[test]
    fn test_rounded_rect_region_excludes_corners() {
        let path = Path::rounded_rect(Rect::new(0.0, 0.0, 100.0, 40.0), CornerRadii::uniform(10.0));
        let region = Region::from_path(&path);

        assert!(region.contains(Point::new(50.0, 20.0)));
        // Center of the corner arc area is inside
        assert!(region.contains(Point::new(10.0, 10.0)));
        // The extreme corner point is shaved off by the radius
        assert!(!region.contains(Point::new(0.5, 0.5)));
    }

    #[test]
    fn test_region_bounds() {
        let region = Region::from_rect(Rect::new(10.0, 20.0, 30.0, 40.0));
        let bounds = region.bounds().unwrap();
        assert_eq!(bounds, Rect::new(10.0, 20.0, 30.0, 40.0));
    }
}
