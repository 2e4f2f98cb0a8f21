use crate::model::Point;

#[inline]
fn sign(x: f64) -> f64 {
    if x < 0.0 { -1.0 } else { 1.0 }
}

#[inline]
fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() { x } else { 0.0 }
}

// Tangent at p1 that keeps the curve monotone in y between its neighbours (Fritsch-Carlson).
fn interior_tangent(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let s0 = finite_or_zero((p1.y - p0.y) / h0);
    let s1 = finite_or_zero((p2.y - p1.y) / h1);
    let p = finite_or_zero((s0 * h1 + s1 * h0) / (h0 + h1));
    finite_or_zero((sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs()))
}

fn end_tangent(p0: Point, p1: Point, t: f64) -> f64 {
    let h = p1.x - p0.x;
    if h != 0.0 { (3.0 * (p1.y - p0.y) / h - t) / 2.0 } else { t }
}

/// SVG path data for a monotone-in-x cubic through `points`.
pub fn monotone_x_path(points: &[Point]) -> String {
    match points {
        [] => String::new(),
        [a] => format!("M {} {}", a.x, a.y),
        [a, b] => format!("M {} {} L {} {}", a.x, a.y, b.x, b.y),
        _ => {
            let n = points.len();
            let mut tangents = vec![0.0f64; n];
            for i in 1..n - 1 {
                tangents[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
            }
            tangents[0] = end_tangent(points[0], points[1], tangents[1]);
            tangents[n - 1] = end_tangent(points[n - 2], points[n - 1], tangents[n - 2]);

            let mut d = format!("M {} {}", points[0].x, points[0].y);
            for i in 0..n - 1 {
                let (a, b) = (points[i], points[i + 1]);
                let dx = (b.x - a.x) / 3.0;
                d.push_str(&format!(
                    " C {} {}, {} {}, {} {}",
                    a.x + dx,
                    a.y + dx * tangents[i],
                    b.x - dx,
                    b.y - dx * tangents[i + 1],
                    b.x,
                    b.y
                ));
            }
            d
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point { Point::new(x, y) }

    #[test]
    fn short_inputs() {
        assert_eq!(monotone_x_path(&[]), "");
        assert_eq!(monotone_x_path(&[pt(1.0, 2.0)]), "M 1 2");
        assert_eq!(monotone_x_path(&[pt(0.0, 0.0), pt(10.0, 5.0)]), "M 0 0 L 10 5");
    }

    #[test]
    fn one_cubic_per_span() {
        let d = monotone_x_path(&[pt(0.0, 0.0), pt(10.0, 10.0), pt(20.0, 0.0), pt(30.0, 10.0)]);
        assert!(d.starts_with("M 0 0"));
        assert_eq!(d.matches(" C ").count(), 3);
        assert!(d.ends_with("30 10"));
    }

    #[test]
    fn vertical_runs_stay_finite() {
        let d = monotone_x_path(&[pt(0.0, 0.0), pt(0.0, 10.0), pt(0.0, 20.0)]);
        assert!(!d.contains("NaN") && !d.contains("inf"));
    }
}
