use std::sync::Once;

use freedraw::{Mode, Options, Point};
use js_sys::Uint32Array;
use log::{info, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;

use crate::error;
use crate::interop::{arr_u32, new_obj, read_lat_lngs, set_kv};
use crate::FreeDraw;

static START: Once = Once::new();

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `log` output to the browser console. Safe to call more than once.
#[wasm_bindgen]
pub fn init_logging() {
    START.call_once(|| {
        // Fails only when the host already installed a logger.
        let _ = console_log::init_with_level(log::Level::Info);
    });
}

/// The mode flags by name, for hosts that prefer constants over numbers.
#[wasm_bindgen]
pub fn modes() -> JsValue {
    let o = new_obj();
    for (name, mode) in [
        ("NONE", Mode::NONE),
        ("CREATE", Mode::CREATE),
        ("EDIT", Mode::EDIT),
        ("DELETE", Mode::DELETE),
        ("APPEND", Mode::APPEND),
        ("EDIT_APPEND", Mode::EDIT_APPEND),
        ("ALL", Mode::ALL),
    ] {
        set_kv(&o, name, &JsValue::from_f64(mode.bits() as f64));
    }
    o.into()
}

fn parse_options(v: &JsValue) -> Result<Options, JsValue> {
    if v.is_undefined() || v.is_null() {
        return Ok(Options::default());
    }
    let options: Options = serde_wasm_bindgen::from_value(v.clone())
        .map_err(|e| error::error_obj("invalid_option", e.to_string(), None))?;
    options.validate().map_err(|e| error::from_core_obj(&e))?;
    Ok(options)
}

fn to_js<T: Serialize>(v: &T) -> JsValue {
    v.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

fn finite(x: f64, y: f64) -> Option<Point> {
    let p = Point::new(x, y);
    p.is_finite().then_some(p)
}

#[wasm_bindgen]
impl FreeDraw {
    /// Attaches to `map`. Throws `{code, message, data}` when `options` is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(map: JsValue, hooks: JsValue, options: JsValue) -> Result<FreeDraw, JsValue> {
        let options = parse_options(&options)?;
        info!("attaching freedraw ({} map, mode {:?})", options.flavor.as_str(), options.mode);
        Ok(FreeDraw::rs_new(map, hooks, options))
    }

    /// Removes every polygon and the stroke layer. The instance is unusable afterwards.
    pub fn detach(self) {
        self.inner.detach();
    }

    // Polygons
    pub fn create(&mut self, lat_lngs: JsValue) -> Uint32Array {
        let Some(lat_lngs) = read_lat_lngs(&lat_lngs) else {
            warn!("create: expected an array of lat/lngs");
            return arr_u32(&[]);
        };
        match self.inner.create(&lat_lngs) {
            Ok(ids) => arr_u32(&ids),
            Err(e) => {
                warn!("create: {e}");
                arr_u32(&[])
            }
        }
    }
    pub fn create_res(&mut self, lat_lngs: JsValue, options: JsValue) -> JsValue {
        let Some(lat_lngs) = read_lat_lngs(&lat_lngs) else {
            return error::invalid_argument("latLngs", "an array");
        };
        let options = if options.is_undefined() {
            self.inner.options().clone()
        } else {
            match parse_options(&options) {
                Ok(o) => o,
                Err(e) => return error::fail(e),
            }
        };
        match self.inner.create_with(&lat_lngs, &options) {
            Ok(ids) => error::ok(arr_u32(&ids).into()),
            Err(e) => error::from_core(&e),
        }
    }
    pub fn remove(&mut self, id: u32) -> bool {
        self.inner.remove(id)
    }
    pub fn remove_res(&mut self, id: u32) -> JsValue {
        if self.inner.polygon(id).is_none() {
            return error::invalid_id("polygon", id);
        }
        error::ok(JsValue::from_bool(self.inner.remove(id)))
    }
    pub fn clear(&mut self) {
        self.inner.clear();
    }
    pub fn size(&self) -> u32 {
        self.inner.size() as u32
    }
    pub fn all(&self) -> Uint32Array {
        arr_u32(&self.inner.all())
    }
    /// Closed rings of every polygon.
    pub fn lat_lngs(&self) -> JsValue {
        to_js(&self.inner.rings())
    }
    pub fn polygon_lat_lngs_res(&self, id: u32) -> JsValue {
        match self.inner.polygon(id) {
            Some(p) => error::ok(to_js(&p.ring())),
            None => error::invalid_id("polygon", id),
        }
    }

    // Mode
    pub fn mode(&self) -> u8 {
        self.inner.mode().bits()
    }
    pub fn set_mode(&mut self, mode: u8) -> u8 {
        self.inner.set_mode(Mode::from_bits(mode)).bits()
    }

    // Pointer input, in container pixels
    pub fn is_drawing(&self) -> bool {
        self.inner.is_drawing()
    }
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        match finite(x, y) {
            Some(p) => self.inner.pointer_down(p),
            None => false,
        }
    }
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if let Some(p) = finite(x, y) {
            self.inner.pointer_move(p);
        }
    }
    pub fn pointer_up(&mut self) {
        self.inner.pointer_up();
    }
    pub fn pointer_leave(&mut self) {
        self.inner.pointer_leave();
    }
    pub fn cancel(&mut self) {
        self.inner.cancel();
    }
    /// Returns the event type that was fired ("remove" or "append"), if any.
    pub fn polygon_click(&mut self, id: u32, x: f64, y: f64) -> Option<String> {
        let p = finite(x, y)?;
        self.inner.polygon_click(id, p).map(|t| t.as_str().to_string())
    }
    pub fn polygon_click_res(&mut self, id: u32, x: f64, y: f64) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        if self.inner.polygon(id).is_none() {
            return error::invalid_id("polygon", id);
        }
        match self.inner.polygon_click(id, Point::new(x, y)) {
            Some(t) => error::ok(JsValue::from_str(t.as_str())),
            None => error::ok(JsValue::NULL),
        }
    }
    pub fn edge_mouse_down(&mut self, marker: u32) -> bool {
        self.inner.edge_mouse_down(marker)
    }

    // Snapshot
    pub fn to_json(&self) -> JsValue {
        to_js(&self.inner.to_json())
    }
    pub fn load_json_res(&mut self, v: JsValue) -> JsValue {
        let value = match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(value) => value,
            Err(e) => return error::err("json_parse", e.to_string(), None),
        };
        match self.inner.load_json(value) {
            Ok(n) => error::ok(JsValue::from_f64(n as f64)),
            Err(e) => error::from_core(&e),
        }
    }
}
