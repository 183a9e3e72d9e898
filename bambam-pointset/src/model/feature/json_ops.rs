use serde_json::Value;

/// coerces a JSON value into an attribute magnitude.
///
/// integers saturate at the i32 bounds rather than keeping their low 32 bits,
/// floats truncate toward zero, numeric strings are parsed, booleans become
/// 1 or 0. any other value is 0.
pub fn as_magnitude(value: &Value) -> i32 {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            None => n.as_f64().map(|f| f as i32).unwrap_or_default(),
        },
        Value::String(s) => parse_magnitude(s.trim()),
        Value::Bool(b) => i32::from(*b),
        _ => 0,
    }
}

fn parse_magnitude(s: &str) -> i32 {
    match s.parse::<i32>() {
        Ok(i) => i,
        Err(_) => s.parse::<f64>().map(|f| f as i32).unwrap_or_default(),
    }
}

/// textual form of a JSON value used for feature identifiers. strings are
/// returned without quotes, other scalars as their JSON text ("null" included).
/// objects and arrays have no textual form and become an empty string.
pub fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => String::new(),
        other => other.to_string(),
    }
}

/// true if the textual form of the value equals `expected`, ignoring ASCII case
pub fn text_eq_ignore_case(value: &Value, expected: &str) -> bool {
    as_text(value).eq_ignore_ascii_case(expected)
}
