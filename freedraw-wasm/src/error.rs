use freedraw::FreeDrawError;
use wasm_bindgen::prelude::*;

use crate::interop::{new_obj, set_kv};

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    fail(error_obj(code, message, data))
}

/// Wraps an error object built by `error_obj` in the envelope.
pub fn fail(error: JsValue) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    set_kv(&root, "error", &error);
    root.into()
}

/// The `{code, message, data}` part on its own, thrown by the constructor.
pub fn error_obj(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data {
        set_kv(&e, "data", &d);
    }
    e.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn invalid_id(kind: &str, id: u32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "kind", &JsValue::from_str(kind));
    set_kv(&d, "id", &JsValue::from_f64(id as f64));
    err("invalid_id", format!("invalid {} id", kind), Some(d.into()))
}

#[inline]
pub fn invalid_argument(param: &str, expected: &str) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    err("invalid_argument", format!("parameter '{}' must be {}", param, expected), Some(d.into()))
}

fn core_data(e: &FreeDrawError) -> Option<JsValue> {
    let d = new_obj();
    match e {
        FreeDrawError::NonFinite { param } => set_kv(&d, "param", &JsValue::from_str(param)),
        FreeDrawError::InvalidOption { name, .. } => set_kv(&d, "option", &JsValue::from_str(name)),
        _ => return None,
    }
    Some(d.into())
}

pub fn from_core(e: &FreeDrawError) -> JsValue {
    err(e.code(), e.to_string(), core_data(e))
}

pub fn from_core_obj(e: &FreeDrawError) -> JsValue {
    error_obj(e.code(), e.to_string(), core_data(e))
}
