use crate::model::Point;
use super::tolerance::clamp01;

/// Squared distance from `p` to segment `ab`, and the clamped parameter of the foot point.
pub fn seg_distance_sq(p: Point, a: Point, b: Point) -> (f64, f64) {
    let vx = b.x - a.x; let vy = b.y - a.y;
    let wx = p.x - a.x; let wy = p.y - a.y;
    let vv = vx*vx + vy*vy;
    let t = if vv > 0.0 { clamp01((wx*vx + wy*vy) / vv) } else { 0.0 };
    let dx = p.x - (a.x + t * vx); let dy = p.y - (a.y + t * vy);
    (dx*dx + dy*dy, t)
}

pub fn point_to_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    seg_distance_sq(p, a, b).0.sqrt()
}

/// Nearest ring segment `(i, i+1 mod n)` to `p`. Ties keep the earlier segment.
pub fn nearest_segment(ring: &[Point], p: Point) -> Option<(usize, f64)> {
    let n = ring.len();
    let mut best: Option<(usize, f64)> = None;
    for i in 0..n {
        let d = point_to_segment_distance(p, ring[i], ring[(i + 1) % n]);
        if best.map_or(true, |(_, bd)| d < bd) { best = Some((i, d)); }
    }
    best
}
