#![allow(dead_code)]

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::JsValue;

/// A planar fake map plus recording hooks: pixel (x, y) is lat/lng (-y, x). The map speaks
/// either the Leaflet or the Google method names.
pub struct FakeHost {
    pub map: JsValue,
    pub hooks: JsValue,
    host: JsValue,
}

const HOST: &str = r#"
    const classes = new Set();
    const container = { classList: { toggle(c, on) { on ? classes.add(c) : classes.delete(c); } } };
    let map, isDragging, projection;
    if (flavor === "google") {
        let draggable = true;
        map = {
            getDiv: () => container,
            setOptions(o) { if ("draggable" in o) draggable = o.draggable; },
            classes,
        };
        projection = {
            fromLatLngToContainerPixel: (ll) => ({ x: ll.lng, y: -ll.lat }),
            fromContainerPixelToLatLng: (p) => ({ lat: () => -p.y, lng: () => p.x }),
        };
        isDragging = () => draggable;
    } else {
        map = {
            latLngToContainerPoint: (ll) => ({ x: ll.lng, y: -ll.lat }),
            containerPointToLatLng: (p) => {
                const [x, y] = Array.isArray(p) ? p : [p.x, p.y];
                return { lat: -y, lng: x };
            },
            dragging: { on: true, enable() { this.on = true; }, disable() { this.on = false; } },
            getContainer: () => container,
            classes,
        };
        isDragging = () => map.dragging.on;
    }
    const polygons = new Map();
    const markers = new Map();
    const hooks = {
        projection,
        events: [],
        strokes: [],
        addPolygon(id, latLngs) { polygons.set(id, latLngs); },
        setPolygonLatLngs(id, latLngs) { polygons.set(id, latLngs); },
        removePolygon(id) { polygons.delete(id); },
        addMarker(id, latLng, enabled) { markers.set(id, { latLng, enabled }); },
        moveMarker(id, latLng) { markers.get(id).latLng = latLng; },
        setMarkerEnabled(id, enabled) { markers.get(id).enabled = enabled; },
        removeMarker(id) { markers.delete(id); },
        drawStroke(d) { this.strokes.push(d); },
        clearStroke() { this.strokes = []; },
        fire(event) { this.events.push(event); },
        polygonCount: () => polygons.size,
        markerCount: () => markers.size,
    };
    return { map, hooks, isDragging };
"#;

impl FakeHost {
    pub fn new() -> FakeHost {
        FakeHost::with_flavor("leaflet")
    }

    pub fn google() -> FakeHost {
        FakeHost::with_flavor("google")
    }

    fn with_flavor(flavor: &str) -> FakeHost {
        let host = Function::new_with_args("flavor", HOST).call1(&JsValue::NULL, &JsValue::from_str(flavor)).unwrap();
        FakeHost { map: get(&host, "map"), hooks: get(&host, "hooks"), host }
    }

    pub fn dragging(&self) -> bool {
        let f: Function = get(&self.host, "isDragging").into();
        f.call0(&JsValue::NULL).unwrap().as_bool().unwrap()
    }

    pub fn has_class(&self, class: &str) -> bool {
        let classes: js_sys::Set = get(&self.map, "classes").into();
        classes.has(&JsValue::from_str(class))
    }

    pub fn count(&self, what: &str) -> u32 {
        let f: Function = get(&self.hooks, what).into();
        f.call0(&self.hooks).unwrap().as_f64().unwrap() as u32
    }

    pub fn events(&self) -> Array {
        get(&self.hooks, "events").into()
    }

    pub fn strokes(&self) -> Array {
        get(&self.hooks, "strokes").into()
    }
}

pub fn get(v: &JsValue, k: &str) -> JsValue {
    Reflect::get(v, &JsValue::from_str(k)).unwrap()
}

/// `[{lat, lng}, ...]` for the given pixel coordinates.
pub fn lat_lngs(points: &[(f64, f64)]) -> JsValue {
    let arr = Array::new();
    for &(x, y) in points {
        let o = js_sys::Object::new();
        Reflect::set(&o, &"lat".into(), &JsValue::from_f64(-y)).unwrap();
        Reflect::set(&o, &"lng".into(), &JsValue::from_f64(x)).unwrap();
        arr.push(&o);
    }
    arr.into()
}

pub fn options(json: &str) -> JsValue {
    js_sys::JSON::parse(json).unwrap()
}

pub fn is_ok(v: &JsValue) -> bool {
    Reflect::get(v, &JsValue::from_str("ok")).ok().and_then(|x| x.as_bool()).unwrap_or(false)
}

pub fn is_err(v: &JsValue, code: &str) -> bool {
    if is_ok(v) {
        return false;
    }
    if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
        if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
            return c.as_string().map_or(false, |s| s == code);
        }
    }
    false
}
