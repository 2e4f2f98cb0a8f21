// Segment-segment intersection in pixel space with tolerances.
// Classifies proper crossings, endpoint touches, and collinear overlaps.

use crate::model::Point;
use super::tolerance::{near_zero, EPS_DENOM, EPS_POS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegIntersection {
    None,
    // Interior crossing (not at endpoints within tolerance)
    Proper,
    // Touch at an endpoint of either segment
    Touch,
    // Collinear with a shared span
    CollinearOverlap,
}

#[inline]
fn orient(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

fn collinear_overlap(a: Point, b: Point, c: Point, d: Point) -> SegIntersection {
    // Project on the dominant axis of AB
    let (pa1, pa2, pc1, pc2) = if (b.x - a.x).abs() >= (b.y - a.y).abs() {
        (a.x, b.x, c.x, d.x)
    } else {
        (a.y, b.y, c.y, d.y)
    };
    let (lo_a, hi_a) = (pa1.min(pa2), pa1.max(pa2));
    let (lo_c, hi_c) = (pc1.min(pc2), pc1.max(pc2));
    if hi_a < lo_c - EPS_POS || hi_c < lo_a - EPS_POS {
        SegIntersection::None
    } else {
        SegIntersection::CollinearOverlap
    }
}

pub fn intersect_segments(a: Point, b: Point, c: Point, d: Point) -> SegIntersection {
    let o1 = orient(a, b, c);
    let o2 = orient(a, b, d);
    let o3 = orient(c, d, a);
    let o4 = orient(c, d, b);

    if near_zero(o1, EPS_POS) && near_zero(o2, EPS_POS) && near_zero(o3, EPS_POS) && near_zero(o4, EPS_POS) {
        return collinear_overlap(a, b, c, d);
    }

    let straddle_ab = (o1 > 0.0 && o2 < 0.0) || (o1 < 0.0 && o2 > 0.0) || near_zero(o1, EPS_POS) || near_zero(o2, EPS_POS);
    let straddle_cd = (o3 > 0.0 && o4 < 0.0) || (o3 < 0.0 && o4 > 0.0) || near_zero(o3, EPS_POS) || near_zero(o4, EPS_POS);
    if !(straddle_ab && straddle_cd) {
        return SegIntersection::None;
    }

    let (rx, ry) = (b.x - a.x, b.y - a.y);
    let (sx, sy) = (d.x - c.x, d.y - c.y);
    let rxs = rx * sy - ry * sx;
    if near_zero(rxs, EPS_DENOM) {
        return SegIntersection::None;
    }
    let (qx, qy) = (c.x - a.x, c.y - a.y);
    let t = (qx * sy - qy * sx) / rxs;
    let u = (qx * ry - qy * rx) / rxs;

    let eps = 1e-9;
    let is_touch = near_zero(t, eps) || near_zero(1.0 - t, eps) || near_zero(u, eps) || near_zero(1.0 - u, eps);
    if is_touch {
        SegIntersection::Touch
    } else if (-eps..=1.0 + eps).contains(&t) && (-eps..=1.0 + eps).contains(&u) {
        SegIntersection::Proper
    } else {
        SegIntersection::None
    }
}

/// True when no two non-adjacent edges of the (implicitly closed) ring meet.
pub fn ring_is_simple(ring: &[Point]) -> bool {
    let n = ring.len();
    if n < 4 {
        return true;
    }
    for i in 0..n {
        let (a, b) = (ring[i], ring[(i + 1) % n]);
        for j in (i + 2)..n {
            // Edge n-1 shares vertex 0 with edge 0.
            if i == 0 && j == n - 1 {
                continue;
            }
            let (c, d) = (ring[j], ring[(j + 1) % n]);
            if intersect_segments(a, b, c, d) != SegIntersection::None {
                return false;
            }
        }
    }
    true
}
