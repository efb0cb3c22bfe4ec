use std::collections::BTreeMap;

use mcp_trigger_core::InvocationParameters;

#[derive(Debug, Clone)]
pub struct HttpRequestParts {
    pub method: String,
    pub url: url::Url,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct HttpResponseParts {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpResponseParts {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Builds the POST for one item. The error is the failure message recorded
/// for the item.
pub fn build_post_request(params: &InvocationParameters) -> Result<HttpRequestParts, String> {
    let target = params.target_url();
    let url = url::Url::parse(&target).map_err(|e| format!("invalid URL '{target}': {e}"))?;
    let body = serde_json::to_vec(&params.payload)
        .map_err(|e| format!("failed to serialize payload: {e}"))?;

    Ok(HttpRequestParts {
        method: "POST".to_string(),
        url,
        headers: BTreeMap::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )]),
        body,
    })
}
