use serde_json::Value as JsonValue;

use crate::executor::request::HttpResponseParts;

/// Body as JSON, falling back to the raw text as a string value when it does
/// not parse (empty bodies included).
pub fn parse_body_json(resp: &HttpResponseParts) -> JsonValue {
    let text = String::from_utf8_lossy(&resp.body);
    serde_json::from_str(&text).unwrap_or_else(|_| JsonValue::String(text.into_owned()))
}

/// Splits a response into output records: one per element of a top-level
/// array, otherwise the whole value. Non-2xx responses are failures.
pub fn decode_records(resp: &HttpResponseParts) -> Result<Vec<JsonValue>, String> {
    if !resp.is_success() {
        return Err(format!("request failed with status code {}", resp.status));
    }
    Ok(match parse_body_json(resp) {
        JsonValue::Array(items) => items,
        v => vec![v],
    })
}
