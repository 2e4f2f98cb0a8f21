use freedraw::{LatLng, Point};
use js_sys::{Array, Function, Object, Reflect, Uint32Array};
use wasm_bindgen::{JsCast, JsValue};

pub fn new_obj() -> Object {
    Object::new()
}

pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}

pub fn get(obj: &JsValue, k: &str) -> JsValue {
    Reflect::get(obj, &JsValue::from_str(k)).unwrap_or(JsValue::UNDEFINED)
}

pub fn arr_u32(slice: &[u32]) -> Uint32Array {
    let arr = Uint32Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice);
    arr
}

/// Calls `obj[name](...args)`. A missing method yields `Ok(undefined)`.
pub fn call(obj: &JsValue, name: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
    let Ok(f) = get(obj, name).dyn_into::<Function>() else {
        return Ok(JsValue::UNDEFINED);
    };
    let argv: Array = args.iter().collect();
    Reflect::apply(&f, obj, &argv)
}

/// Reads a numeric property, calling it first when it is a getter function
/// (`latLng.lat()` on some map libraries).
pub fn number(obj: &JsValue, k: &str) -> f64 {
    let v = get(obj, k);
    let v = match v.dyn_ref::<Function>() {
        Some(f) => f.call0(obj).unwrap_or(JsValue::UNDEFINED),
        None => v,
    };
    v.as_f64().unwrap_or(f64::NAN)
}

pub fn lat_lng_obj(ll: LatLng) -> JsValue {
    let o = new_obj();
    set_kv(&o, "lat", &JsValue::from_f64(ll.lat));
    set_kv(&o, "lng", &JsValue::from_f64(ll.lng));
    if let Some(alt) = ll.alt {
        set_kv(&o, "alt", &JsValue::from_f64(alt));
    }
    o.into()
}

pub fn lat_lngs_arr(lat_lngs: &[LatLng]) -> JsValue {
    lat_lngs.iter().map(|&ll| lat_lng_obj(ll)).collect::<Array>().into()
}

pub fn point_obj(p: Point) -> JsValue {
    let o = new_obj();
    set_kv(&o, "x", &JsValue::from_f64(p.x));
    set_kv(&o, "y", &JsValue::from_f64(p.y));
    o.into()
}

pub fn read_lat_lng(v: &JsValue) -> LatLng {
    let mut ll = LatLng::new(number(v, "lat"), number(v, "lng"));
    if let Some(alt) = get(v, "alt").as_f64() {
        ll.alt = Some(alt);
    }
    ll
}

/// Accepts `{x, y}` or an `[x, y]` pair.
pub fn read_point(v: &JsValue) -> Point {
    if Array::is_array(v) {
        let a = Array::from(v);
        return Point::new(
            a.get(0).as_f64().unwrap_or(f64::NAN),
            a.get(1).as_f64().unwrap_or(f64::NAN),
        );
    }
    Point::new(number(v, "x"), number(v, "y"))
}

/// An array of lat/lng objects, or `None` when `v` is not an array.
pub fn read_lat_lngs(v: &JsValue) -> Option<Vec<LatLng>> {
    Array::is_array(v).then(|| Array::from(v).iter().map(|ll| read_lat_lng(&ll)).collect())
}
