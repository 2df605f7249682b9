use serde_json::{Map, Value};

/// Parse a request body into a field map based on the Content-Type header.
///
/// JSON is the default; form-urlencoded bodies are accepted too. Anything that
/// does not produce a non-empty object is rejected.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Map<String, Value>, String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err("Empty body".to_string());
    }

    let ct = content_type.unwrap_or("application/json");

    let value = if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(body)?
    } else {
        serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))?
    };

    match value {
        Value::Object(map) if !map.is_empty() => Ok(map),
        Value::Object(_) => Err("Empty object".to_string()),
        _ => Err("Body is not an object".to_string()),
    }
}

fn parse_form_urlencoded(body: &[u8]) -> Result<Value, String> {
    let body_str = std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;

    let map: Map<String, Value> = form_urlencoded::parse(body_str.as_bytes())
        .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
        .collect();

    Ok(Value::Object(map))
}
