use std::collections::{BTreeMap, BTreeSet};

use crate::adapter::MapAdapter;
use crate::mode::Mode;
use crate::model::{Event, LatLng, MarkerId, Point, PolygonId};
use crate::projection::Projection;

#[derive(Clone, Debug, PartialEq)]
pub struct PolygonOverlay {
    pub lat_lngs: Vec<LatLng>,
    pub smooth_factor: f64,
    pub mode: Mode,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerOverlay {
    pub lat_lng: LatLng,
    pub enabled: bool,
}

/// In-memory map that records what FreeDraw asks of it.
#[derive(Clone, Debug)]
pub struct HeadlessMap {
    projection: Projection,
    dragging: bool,
    classes: BTreeSet<String>,
    polygons: BTreeMap<PolygonId, PolygonOverlay>,
    markers: BTreeMap<MarkerId, MarkerOverlay>,
    stroke_layer: bool,
    stroke: Vec<String>,
    events: Vec<Event>,
}

impl HeadlessMap {
    pub fn new(projection: Projection) -> Self {
        HeadlessMap {
            projection,
            dragging: true,
            classes: BTreeSet::new(),
            polygons: BTreeMap::new(),
            markers: BTreeMap::new(),
            stroke_layer: false,
            stroke: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn planar() -> Self {
        Self::new(Projection::planar())
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn polygon(&self, id: PolygonId) -> Option<&PolygonOverlay> {
        self.polygons.get(&id)
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    pub fn marker(&self, id: MarkerId) -> Option<&MarkerOverlay> {
        self.markers.get(&id)
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn has_stroke_layer(&self) -> bool {
        self.stroke_layer
    }

    /// Path segments drawn since the stroke was last cleared.
    pub fn stroke(&self) -> &[String] {
        &self.stroke
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

impl MapAdapter for HeadlessMap {
    fn lat_lng_to_container_point(&self, lat_lng: LatLng) -> Point {
        self.projection.project(lat_lng)
    }

    fn container_point_to_lat_lng(&self, point: Point) -> LatLng {
        self.projection.unproject(point)
    }

    fn set_dragging(&mut self, enabled: bool) {
        self.dragging = enabled;
    }

    fn set_class(&mut self, class: &str, present: bool) {
        if present {
            self.classes.insert(class.to_string());
        } else {
            self.classes.remove(class);
        }
    }

    fn add_polygon(&mut self, id: PolygonId, lat_lngs: &[LatLng], smooth_factor: f64) {
        self.polygons.insert(
            id,
            PolygonOverlay { lat_lngs: lat_lngs.to_vec(), smooth_factor, mode: Mode::NONE },
        );
    }

    fn set_polygon_lat_lngs(&mut self, id: PolygonId, lat_lngs: &[LatLng]) {
        if let Some(p) = self.polygons.get_mut(&id) {
            p.lat_lngs = lat_lngs.to_vec();
        }
    }

    fn set_polygon_mode(&mut self, id: PolygonId, mode: Mode) {
        if let Some(p) = self.polygons.get_mut(&id) {
            p.mode = mode;
        }
    }

    fn remove_polygon(&mut self, id: PolygonId) {
        self.polygons.remove(&id);
    }

    fn add_marker(&mut self, id: MarkerId, lat_lng: LatLng, enabled: bool) {
        self.markers.insert(id, MarkerOverlay { lat_lng, enabled });
    }

    fn move_marker(&mut self, id: MarkerId, lat_lng: LatLng) {
        if let Some(m) = self.markers.get_mut(&id) {
            m.lat_lng = lat_lng;
        }
    }

    fn set_marker_enabled(&mut self, id: MarkerId, enabled: bool) {
        if let Some(m) = self.markers.get_mut(&id) {
            m.enabled = enabled;
        }
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.markers.remove(&id);
    }

    fn create_stroke_layer(&mut self) {
        self.stroke_layer = true;
    }

    fn remove_stroke_layer(&mut self) {
        self.stroke_layer = false;
        self.stroke.clear();
    }

    fn draw_stroke(&mut self, d: &str, _stroke_width: f64) {
        self.stroke.push(d.to_string());
    }

    fn clear_stroke(&mut self) {
        self.stroke.clear();
    }

    fn fire(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}
