use crate::model::Point;
use super::math::seg_distance_sq;

/// Douglas-Peucker over an open polyline; endpoints are always kept.
pub fn rdp(points: &[Point], eps: f64) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let eps2 = eps * eps;
    fn rec(slice: &[Point], eps2: f64, out: &mut Vec<Point>) {
        let n = slice.len();
        if n <= 2 {
            out.push(slice[0]);
            return;
        }
        let a = slice[0];
        let b = slice[n - 1];
        let mut idx = 0usize;
        let mut md2 = 0.0f64;
        for (i, &p) in slice.iter().enumerate().take(n - 1).skip(1) {
            let (d2, _) = seg_distance_sq(p, a, b);
            if d2 > md2 {
                md2 = d2;
                idx = i;
            }
        }
        if md2 > eps2 {
            rec(&slice[..=idx], eps2, out);
            rec(&slice[idx..], eps2, out);
        } else {
            out.push(a);
        }
    }
    let mut out = Vec::new();
    rec(points, eps2, &mut out);
    out.extend(points.last().copied());
    out
}

/// Cleans an implicitly closed ring: drops repeated vertices, then simplifies with the
/// ring closed so the seam vertex is treated like any other.
pub fn clean_ring(ring: &[Point], eps: f64) -> Vec<Point> {
    let mut pts: Vec<Point> = Vec::with_capacity(ring.len() + 1);
    for &p in ring {
        if pts.last() != Some(&p) {
            pts.push(p);
        }
    }
    while pts.len() > 1 && pts.first() == pts.last() {
        pts.pop();
    }
    if pts.len() < 3 {
        return pts;
    }
    pts.push(pts[0]);
    let mut out = rdp(&pts, eps);
    out.pop();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point { Point::new(x, y) }

    #[test]
    fn rdp_drops_near_collinear_points() {
        let line = [pt(0.0, 0.0), pt(5.0, 0.5), pt(10.0, 0.0)];
        assert_eq!(rdp(&line, 1.1), vec![pt(0.0, 0.0), pt(10.0, 0.0)]);
        assert_eq!(rdp(&line, 0.1).len(), 3);
    }

    #[test]
    fn clean_ring_keeps_square_corners() {
        let ring = [pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(5.0, 10.2), pt(0.0, 10.0), pt(0.0, 0.0)];
        assert_eq!(clean_ring(&ring, 1.1), vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0)]);
    }

    #[test]
    fn clean_ring_degenerate_input() {
        assert_eq!(clean_ring(&[pt(1.0, 1.0), pt(1.0, 1.0)], 1.1), vec![pt(1.0, 1.0)]);
        assert!(clean_ring(&[], 1.1).is_empty());
    }
}
