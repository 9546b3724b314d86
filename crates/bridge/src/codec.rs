//! JSON method codec.
//!
//! Calls travel as `{"method": ..., "args": ...}`. Replies are a one-element
//! array `[result]` on success, a three-element array `[code, message, details]`
//! for a remote error, and an empty payload when the method is not implemented.

use serde_json::Value;

use crate::{BridgeError, MethodCall, MethodResponse, Result};

pub struct JsonMethodCodec;

impl JsonMethodCodec {
    pub fn encode_method_call(call: &MethodCall) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(call)?)
    }

    pub fn decode_method_call(bytes: &[u8]) -> Result<MethodCall> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn encode_response(response: &MethodResponse) -> Vec<u8> {
        match response {
            MethodResponse::Success(value) => {
                // Serializing a `Value` cannot fail.
                serde_json::to_vec(&Value::Array(vec![value.clone()])).unwrap_or_default()
            }
            MethodResponse::NotImplemented => Vec::new(),
        }
    }

    pub fn decode_response(bytes: &[u8]) -> Result<MethodResponse> {
        if bytes.is_empty() {
            return Ok(MethodResponse::NotImplemented);
        }
        let envelope: Value = serde_json::from_slice(bytes)?;
        let mut items = match envelope {
            Value::Array(items) => items,
            other => {
                return Err(BridgeError::MalformedEnvelope(format!(
                    "expected array, got {other}"
                )))
            }
        };
        match items.len() {
            1 => Ok(MethodResponse::Success(items.remove(0))),
            3 => {
                let details = items.pop().unwrap_or(Value::Null);
                let message = items.pop().unwrap_or(Value::Null);
                let code = items.pop().unwrap_or(Value::Null);
                Err(BridgeError::Remote {
                    code: value_to_string(code),
                    message: value_to_string(message),
                    details,
                })
            }
            n => Err(BridgeError::MalformedEnvelope(format!(
                "expected 1 or 3 elements, got {n}"
            ))),
        }
    }
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
