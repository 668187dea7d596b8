use serde_json::Value;
use wallet_adapter_common::ProviderError;
use wasm_bindgen::{JsCast, JsValue};

// EIP-1193 style code most extensions use for a dismissed popup
const USER_REJECTED_CODE: f64 = 4001.0;

pub fn reflect_get(target: &JsValue, key: &str) -> Result<JsValue, ProviderError> {
    js_sys::Reflect::get(target, &JsValue::from_str(key)).map_err(js_error)
}

/// `None` for missing, `undefined` and `null` properties.
pub fn property(target: &JsValue, key: &str) -> Option<JsValue> {
    reflect_get(target, key)
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

pub fn function(target: &JsValue, key: &str) -> Option<js_sys::Function> {
    property(target, key).and_then(|value| value.dyn_into::<js_sys::Function>().ok())
}

pub fn js_error(err: JsValue) -> ProviderError {
    let message = property(&err, "message")
        .and_then(|message| message.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"));

    let code = property(&err, "code").and_then(|code| code.as_f64());

    if code == Some(USER_REJECTED_CODE) || message.to_lowercase().contains("rejected") {
        ProviderError::UserRejected(message)
    } else {
        ProviderError::Native(message)
    }
}

/// Converts a native event argument. Public key objects become their base58
/// string, anything else goes through serde.
pub fn js_to_json(value: &JsValue) -> Value {
    if let Some(to_base58) = function(value, "toBase58") {
        if let Some(encoded) = to_base58.call0(value).ok().and_then(|v| v.as_string()) {
            return Value::String(encoded);
        }
    }

    serde_wasm_bindgen::from_value(value.clone()).unwrap_or(Value::Null)
}
