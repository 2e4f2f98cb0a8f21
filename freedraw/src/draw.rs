use crate::geometry::curve::monotone_x_path;
use crate::model::{LatLng, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawState {
    Armed,
    Drawing { last: Point },
    Done,
}

/// One freehand gesture, fed a point per pointer move.
#[derive(Clone, Debug)]
pub struct DrawSession {
    state: DrawState,
    points: Vec<LatLng>,
}

impl Default for DrawSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSession {
    pub fn new() -> Self {
        DrawSession { state: DrawState::Armed, points: Vec::new() }
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    /// Records a point. Returns the path of the segment from the previous point, if any.
    pub fn feed(&mut self, point: Point, lat_lng: LatLng) -> Option<String> {
        match self.state {
            DrawState::Done => None,
            DrawState::Armed => {
                self.points.push(lat_lng);
                self.state = DrawState::Drawing { last: point };
                None
            }
            DrawState::Drawing { last } if last == point => None,
            DrawState::Drawing { last } => {
                self.points.push(lat_lng);
                self.state = DrawState::Drawing { last: point };
                Some(monotone_x_path(&[last, point]))
            }
        }
    }

    /// Ends the gesture. The stroke is handed back only when `create` is set and not empty.
    pub fn finish(&mut self, create: bool) -> Option<Vec<LatLng>> {
        if std::mem::replace(&mut self.state, DrawState::Done) == DrawState::Done {
            return None;
        }
        let points = std::mem::take(&mut self.points);
        (create && !points.is_empty()).then_some(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_point_arms_without_drawing() {
        let mut s = DrawSession::new();
        assert_eq!(s.feed(Point::new(0.0, 0.0), LatLng::new(0.0, 0.0)), None);
        assert_eq!(s.state(), DrawState::Drawing { last: Point::new(0.0, 0.0) });
        let d = s.feed(Point::new(10.0, 0.0), LatLng::new(0.0, 10.0));
        assert_eq!(d.as_deref(), Some("M 0 0 L 10 0"));
        assert_eq!(s.points().len(), 2);
    }

    #[test]
    fn repeated_points_are_skipped() {
        let mut s = DrawSession::new();
        s.feed(Point::new(1.0, 1.0), LatLng::new(-1.0, 1.0));
        assert_eq!(s.feed(Point::new(1.0, 1.0), LatLng::new(-1.0, 1.0)), None);
        assert_eq!(s.points().len(), 1);
    }

    #[test]
    fn finish_is_one_shot() {
        let mut s = DrawSession::new();
        s.feed(Point::new(1.0, 1.0), LatLng::new(-1.0, 1.0));
        assert_eq!(s.finish(true).map(|p| p.len()), Some(1));
        assert_eq!(s.finish(true), None);
        assert_eq!(s.feed(Point::new(2.0, 2.0), LatLng::new(-2.0, 2.0)), None);
    }

    #[test]
    fn cancelled_session_yields_nothing() {
        let mut s = DrawSession::new();
        s.feed(Point::new(1.0, 1.0), LatLng::new(-1.0, 1.0));
        s.feed(Point::new(5.0, 1.0), LatLng::new(-1.0, 5.0));
        assert_eq!(s.finish(false), None);
        assert_eq!(s.state(), DrawState::Done);
    }
}
