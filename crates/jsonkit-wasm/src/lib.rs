//! WASM bindings for jsonkit-core.
//!
//! Exposes `normalize`, `quote`, and `is_valid` as `#[wasm_bindgen]`
//! functions callable from JavaScript/TypeScript. Built with
//! `wasm-bindgen-cli`:
//!
//! ```sh
//! cargo build -p jsonkit-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/jsonkit_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

/// Decode a JSON document and re-emit it in minimal form.
///
/// Throws a JS error carrying the kind, byte offset, and message if the
/// input is not valid JSON.
#[wasm_bindgen]
pub fn normalize(json: &str) -> std::result::Result<String, JsValue> {
    jsonkit_core::normalize(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Quote `text` as a JSON string literal.
#[wasm_bindgen]
pub fn quote(text: &str) -> String {
    jsonkit_core::encode_str(text)
}

/// Whether `json` is a single valid JSON document.
#[wasm_bindgen]
pub fn is_valid(json: &str) -> bool {
    jsonkit_core::decode(json).is_ok()
}
