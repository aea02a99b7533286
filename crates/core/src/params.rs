//! Helpers for extracting typed parameters from a `serde_json::Value` object.
//!
//! Numeric helpers never fail: a missing key or a value of the wrong type
//! yields the default. Colors are stricter since a typo in a hex string is
//! almost always a mistake worth reporting.

use crate::color::Color;
use crate::error::EngineError;
use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// JSON integers are accepted and converted.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing or
/// not a non-negative integer.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Extracts a hex color from `params[name]`.
///
/// Missing keys (and `null`) give `default`. A non-string value is a
/// `ParamTypeMismatch`; a malformed string is an `InvalidColor`.
pub fn param_color(params: &Value, name: &str, default: Color) -> Result<Color, EngineError> {
    match params.get(name) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::String(s)) => Color::from_hex(s),
        Some(other) => Err(EngineError::ParamTypeMismatch {
            name: name.to_owned(),
            expected: "hex color string".into(),
            got: json_type_name(other).into(),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
