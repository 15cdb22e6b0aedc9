use wasm_bindgen::prelude::*;

use crate::api_error::ApiError;
use crate::flatten;
use crate::tree::path;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON)]
    fn parse(s: &str) -> JsValue;
}

fn to_js(value: &serde_json::Value) -> JsValue {
    match serde_json::to_string(value) {
        Ok(json_str) => parse(&json_str),
        Err(_) => JsValue::NULL,
    }
}

/// Flatten a JSON `errors` tree into an array of message lines.
#[wasm_bindgen]
pub fn flatten_errors(json: &str) -> JsValue {
    let parsed: serde_json::Value = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(_) => return error_result("Invalid JSON"),
    };
    let lines = flatten::flatten_value(&parsed);
    to_js(&serde_json::Value::from(lines))
}

/// Build `{name, message, code}` from a full JSON response body.
#[wasm_bindgen]
pub fn api_error_from_json(json: &str) -> JsValue {
    match ApiError::from_json(json) {
        Ok(err) => serde_wasm_bindgen::to_value(&err).unwrap_or(JsValue::NULL),
        Err(e) => error_result(&e.to_string()),
    }
}

#[wasm_bindgen]
pub fn join_key_path(prefix: &str, key: &str) -> String {
    path::join_key_path(prefix, key)
}

fn error_result(msg: &str) -> JsValue {
    let obj = serde_json::json!({"error": msg});
    to_js(&obj)
}
