use crate::model::shot::Point;

#[inline]
fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::default();
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

/// Convex hull by Andrew's monotone chain, counter-clockwise, without
/// collinear vertices.
///
/// Degenerate input comes back short: one vertex for coincident points, two
/// (the extremes) for collinear points.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y)));
    pts.dedup();
    if pts.len() <= 2 {
        return pts;
    }

    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0
        {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0
        {
            upper.pop();
        }
        upper.push(p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Shoelace area of a simple polygon given in order.
pub fn polygon_area(vertices: &[Point]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for (i, a) in vertices.iter().enumerate() {
        let b = vertices[(i + 1) % vertices.len()];
        twice += a.x * b.y - b.x * a.y;
    }
    0.5 * twice.abs()
}

/// Distance from `p` to the segment `a`-`b`, projection clamped to the segment.
pub fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let vx = b.x - a.x;
    let vy = b.y - a.y;
    let len2 = vx * vx + vy * vy;
    if len2 == 0.0 {
        return p.distance_to(&a);
    }
    let t = (((p.x - a.x) * vx + (p.y - a.y) * vy) / len2).clamp(0.0, 1.0);
    p.distance_to(&Point::new(a.x + t * vx, a.y + t * vy))
}

/// Inclusive containment test against a counter-clockwise hull.
pub fn hull_contains(hull: &[Point], p: Point) -> bool {
    if hull.len() < 3 {
        return false;
    }
    (0..hull.len()).all(|i| cross(hull[i], hull[(i + 1) % hull.len()], p) >= 0.0)
}

/// Zero inside the hull, otherwise the distance to its nearest edge.
///
/// Short hulls are treated as the point or segment they describe.
pub fn distance_to_hull(hull: &[Point], p: Point) -> f64 {
    match hull.len() {
        0 => f64::INFINITY,
        1 => p.distance_to(&hull[0]),
        2 => point_segment_distance(p, hull[0], hull[1]),
        n => {
            if hull_contains(hull, p) {
                return 0.0;
            }
            (0..n)
                .map(|i| point_segment_distance(p, hull[i], hull[(i + 1) % n]))
                .fold(f64::INFINITY, f64::min)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/geometry.rs"]
mod tests;
