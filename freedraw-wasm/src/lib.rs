use wasm_bindgen::prelude::*;
mod api;
mod error;
mod host;
mod interop;

pub use host::JsMap;

#[wasm_bindgen]
pub struct FreeDraw {
    pub(crate) inner: freedraw::FreeDraw<JsMap>,
}

impl FreeDraw {
    pub fn rs_new(map: JsValue, hooks: JsValue, options: freedraw::Options) -> FreeDraw {
        let adapter = JsMap::new(map, hooks, options.flavor);
        FreeDraw { inner: freedraw::FreeDraw::new(adapter, options) }
    }
}
