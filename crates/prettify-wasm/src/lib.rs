//! WASM bindings for the prettify highlighter.
//!
//! Exposes `prettify()` to JavaScript via wasm-bindgen.
//! Returns a JS object `{ markup, lineCount }` or throws on invalid
//! configuration. The widget calls this once per solution body and uses
//! `lineCount` to pre-compute the container height before inserting the
//! markup into the DOM.

use prettify_html::PrettyConfig;
use wasm_bindgen::prelude::*;

/// Highlight source text into ordered-list span markup.
///
/// `config` may be `undefined`/`null` (defaults apply) or an object with
/// `{ trimSpace, tabLength, commentLinks }`. A config that is not an
/// object of non-negative integers and booleans throws a JS error before
/// any scanning happens.
#[wasm_bindgen]
pub fn prettify(source: &str, config: JsValue) -> Result<JsValue, JsError> {
    let config: PrettyConfig = if config.is_undefined() || config.is_null() {
        PrettyConfig::default()
    } else if !config.is_object() || js_sys::Array::is_array(&config) {
        // Arrays deserialize into a struct as leniently as objects do;
        // reject anything that is not a plain object before scanning.
        return Err(JsError::new(
            "Invalid prettify configuration: expected an object",
        ));
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid prettify configuration: {e}")))?
    };

    let out = prettify_html::prettify(source, &config);

    // Plain JS object { markup, lineCount }
    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"markup".into(), &out.markup.into())
        .map_err(|_| JsError::new("Failed to set markup property"))?;
    js_sys::Reflect::set(
        &js_obj,
        &"lineCount".into(),
        &(out.line_count as u32).into(),
    )
    .map_err(|_| JsError::new("Failed to set lineCount property"))?;

    Ok(js_obj.into())
}

/// Get the highlighter version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
