use crate::mode::Mode;
use crate::model::{Event, LatLng, MarkerId, Point, PolygonId};

/// Everything FreeDraw needs from the host mapping library.
///
/// Ids are allocated by FreeDraw; implementations keep their own overlay objects keyed by them.
pub trait MapAdapter {
    fn lat_lng_to_container_point(&self, lat_lng: LatLng) -> Point;
    fn container_point_to_lat_lng(&self, point: Point) -> LatLng;

    fn set_dragging(&mut self, enabled: bool);
    fn set_class(&mut self, class: &str, present: bool);

    fn add_polygon(&mut self, id: PolygonId, lat_lngs: &[LatLng], smooth_factor: f64);
    fn set_polygon_lat_lngs(&mut self, id: PolygonId, lat_lngs: &[LatLng]);
    /// Lets the host style polygons for the active edit/append/delete affordances.
    fn set_polygon_mode(&mut self, id: PolygonId, mode: Mode);
    fn remove_polygon(&mut self, id: PolygonId);

    fn add_marker(&mut self, id: MarkerId, lat_lng: LatLng, enabled: bool);
    fn move_marker(&mut self, id: MarkerId, lat_lng: LatLng);
    fn set_marker_enabled(&mut self, id: MarkerId, enabled: bool);
    fn remove_marker(&mut self, id: MarkerId);

    fn create_stroke_layer(&mut self);
    fn remove_stroke_layer(&mut self);
    fn draw_stroke(&mut self, d: &str, stroke_width: f64);
    fn clear_stroke(&mut self);

    fn fire(&mut self, event: &Event);
}

pub(crate) fn to_pixels<A: MapAdapter + ?Sized>(adapter: &A, lat_lngs: &[LatLng]) -> Vec<Point> {
    lat_lngs.iter().map(|&ll| adapter.lat_lng_to_container_point(ll)).collect()
}

pub(crate) fn to_lat_lngs<A: MapAdapter + ?Sized>(adapter: &A, points: &[Point]) -> Vec<LatLng> {
    points.iter().map(|&p| adapter.container_point_to_lat_lng(p)).collect()
}
