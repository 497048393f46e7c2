use crate::core::data::canvas::CanvasSize;
use crate::core::data::point::ScreenPoint;
use crate::core::fractals::sierpinski::depth::SierpinskiDepth;

const MARGIN: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: ScreenPoint,
    pub b: ScreenPoint,
    pub c: ScreenPoint,
}

/// The outermost triangle: apex at the top centre, base along the bottom,
/// inset from the canvas edges.
#[must_use]
pub fn root_triangle(canvas: CanvasSize) -> Triangle {
    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());

    Triangle {
        a: ScreenPoint::new(width * 0.5, MARGIN),
        b: ScreenPoint::new(MARGIN, height - MARGIN),
        c: ScreenPoint::new(width - MARGIN, height - MARGIN),
    }
}

/// Number of leaf triangles produced at `depth`.
#[must_use]
pub fn leaf_count(depth: SierpinskiDepth) -> usize {
    3_usize.pow(u32::from(depth.get()))
}

/// Calls `visit` on every leaf triangle of the subdivision, corner
/// sub-triangles first `(A, AB, CA)`, then `(AB, B, BC)`, then `(CA, BC, C)`.
/// The central inverted triangle is never produced.
pub fn subdivide<F: FnMut(&Triangle)>(triangle: &Triangle, depth: SierpinskiDepth, visit: &mut F) {
    subdivide_levels(triangle, depth.get(), visit);
}

fn subdivide_levels<F: FnMut(&Triangle)>(triangle: &Triangle, levels: u8, visit: &mut F) {
    if levels == 0 {
        visit(triangle);
        return;
    }

    let Triangle { a, b, c } = *triangle;
    let ab = a.midpoint(b);
    let bc = b.midpoint(c);
    let ca = c.midpoint(a);

    subdivide_levels(&Triangle { a, b: ab, c: ca }, levels - 1, visit);
    subdivide_levels(&Triangle { a: ab, b, c: bc }, levels - 1, visit);
    subdivide_levels(&Triangle { a: ca, b: bc, c }, levels - 1, visit);
}
