//! `MapAdapter` over a JavaScript map object plus a table of host hooks.
//!
//! Projection, panning and container classes go to the map itself, using the method names
//! of the selected flavor. Everything FreeDraw draws (polygons, markers, the stroke) and every
//! event goes through `hooks`, so the host owns the actual overlay objects.

use freedraw::{Event, Flavor, LatLng, MapAdapter, MarkerId, Mode, Point, PolygonId};
use log::warn;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::interop::{call, get, lat_lng_obj, lat_lngs_arr, new_obj, point_obj, read_lat_lng, read_point, set_kv};

pub struct JsMap {
    map: JsValue,
    hooks: JsValue,
    projection: JsValue,
    flavor: Flavor,
}

impl JsMap {
    /// `hooks.projection`, when present, replaces the map for coordinate conversion; a Google
    /// host passes its overlay projection there.
    pub fn new(map: JsValue, hooks: JsValue, flavor: Flavor) -> JsMap {
        let projection = match get(&hooks, "projection") {
            p if p.is_object() => p,
            _ => map.clone(),
        };
        JsMap { map, hooks, projection, flavor }
    }

    fn map_call(&self, target: &JsValue, name: &str, args: &[JsValue]) -> JsValue {
        call(target, name, args).unwrap_or_else(|e| {
            warn!("{} map: {name} threw {e:?}", self.flavor.as_str());
            JsValue::UNDEFINED
        })
    }

    fn hook(&self, name: &str, args: &[JsValue]) {
        if let Err(e) = call(&self.hooks, name, args) {
            warn!("hook {name} threw {e:?}");
        }
    }

    fn container(&self) -> JsValue {
        match self.flavor {
            Flavor::Leaflet => self.map_call(&self.map, "getContainer", &[]),
            Flavor::Google => self.map_call(&self.map, "getDiv", &[]),
        }
    }
}

fn id(v: u32) -> JsValue {
    JsValue::from_f64(v as f64)
}

impl MapAdapter for JsMap {
    fn lat_lng_to_container_point(&self, lat_lng: LatLng) -> Point {
        let method = match self.flavor {
            Flavor::Leaflet => "latLngToContainerPoint",
            Flavor::Google => "fromLatLngToContainerPixel",
        };
        read_point(&self.map_call(&self.projection, method, &[lat_lng_obj(lat_lng)]))
    }

    fn container_point_to_lat_lng(&self, point: Point) -> LatLng {
        let ll = match self.flavor {
            Flavor::Leaflet => {
                let pair = js_sys::Array::of2(&JsValue::from_f64(point.x), &JsValue::from_f64(point.y));
                self.map_call(&self.projection, "containerPointToLatLng", &[pair.into()])
            }
            Flavor::Google => self.map_call(&self.projection, "fromContainerPixelToLatLng", &[point_obj(point)]),
        };
        read_lat_lng(&ll)
    }

    fn set_dragging(&mut self, enabled: bool) {
        match self.flavor {
            Flavor::Leaflet => {
                let dragging = get(&self.map, "dragging");
                self.map_call(&dragging, if enabled { "enable" } else { "disable" }, &[]);
            }
            Flavor::Google => {
                let opts = new_obj();
                set_kv(&opts, "draggable", &JsValue::from_bool(enabled));
                self.map_call(&self.map, "setOptions", &[opts.into()]);
            }
        }
    }

    fn set_class(&mut self, class: &str, present: bool) {
        let class_list = get(&self.container(), "classList");
        self.map_call(&class_list, "toggle", &[JsValue::from_str(class), JsValue::from_bool(present)]);
    }

    fn add_polygon(&mut self, polygon: PolygonId, lat_lngs: &[LatLng], smooth_factor: f64) {
        self.hook("addPolygon", &[id(polygon), lat_lngs_arr(lat_lngs), JsValue::from_f64(smooth_factor)]);
    }

    fn set_polygon_lat_lngs(&mut self, polygon: PolygonId, lat_lngs: &[LatLng]) {
        self.hook("setPolygonLatLngs", &[id(polygon), lat_lngs_arr(lat_lngs)]);
    }

    fn set_polygon_mode(&mut self, polygon: PolygonId, mode: Mode) {
        self.hook("setPolygonMode", &[id(polygon), JsValue::from_f64(mode.bits() as f64)]);
    }

    fn remove_polygon(&mut self, polygon: PolygonId) {
        self.hook("removePolygon", &[id(polygon)]);
    }

    fn add_marker(&mut self, marker: MarkerId, lat_lng: LatLng, enabled: bool) {
        self.hook("addMarker", &[id(marker), lat_lng_obj(lat_lng), JsValue::from_bool(enabled)]);
    }

    fn move_marker(&mut self, marker: MarkerId, lat_lng: LatLng) {
        self.hook("moveMarker", &[id(marker), lat_lng_obj(lat_lng)]);
    }

    fn set_marker_enabled(&mut self, marker: MarkerId, enabled: bool) {
        self.hook("setMarkerEnabled", &[id(marker), JsValue::from_bool(enabled)]);
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        self.hook("removeMarker", &[id(marker)]);
    }

    fn create_stroke_layer(&mut self) {
        self.hook("createStrokeLayer", &[]);
    }

    fn remove_stroke_layer(&mut self) {
        self.hook("removeStrokeLayer", &[]);
    }

    fn draw_stroke(&mut self, d: &str, stroke_width: f64) {
        self.hook("drawStroke", &[JsValue::from_str(d), JsValue::from_f64(stroke_width)]);
    }

    fn clear_stroke(&mut self) {
        self.hook("clearStroke", &[]);
    }

    fn fire(&mut self, event: &Event) {
        match event.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
            Ok(v) => self.hook("fire", &[v]),
            Err(e) => warn!("{} event not delivered: {e}", event.name()),
        }
    }
}
