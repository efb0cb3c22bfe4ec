use std::path::Path;

use serde_json::Value;

/// Reads input items from a JSON or YAML file. A top-level array holds one
/// item per element; any other value is a single item.
pub fn load_items(path: Option<&Path>) -> Result<Vec<Value>, String> {
    let Some(path) = path else {
        return Ok(vec![Value::Object(serde_json::Map::new())]);
    };
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read items from {}: {e}", path.display()))?;
    let value: Value = if let Ok(v) = serde_json::from_str(&content) {
        v
    } else if let Ok(v) = serde_yaml::from_str(&content) {
        v
    } else {
        return Err(format!("{} is neither valid JSON nor YAML", path.display()));
    };
    Ok(match value {
        Value::Array(items) => items,
        other => vec![other],
    })
}

pub fn parse_data(data: &str) -> Result<Value, String> {
    serde_json::from_str(data).map_err(|e| format!("--data is not valid JSON: {e}"))
}

/// Applies `KEY=VALUE` pairs to every object item as string fields.
pub fn merge_set_fields(items: &mut [Value], set_fields: &[String]) -> Result<(), String> {
    if set_fields.is_empty() {
        return Ok(());
    }
    let mut pairs = Vec::with_capacity(set_fields.len());
    for s in set_fields {
        let (k, v) = s
            .split_once('=')
            .ok_or_else(|| format!("invalid --set value '{s}', expected KEY=VALUE"))?;
        pairs.push((k.to_string(), v.to_string()));
    }
    for item in items.iter_mut() {
        if let Some(map) = item.as_object_mut() {
            for (k, v) in &pairs {
                map.insert(k.clone(), Value::String(v.clone()));
            }
        }
    }
    Ok(())
}
