use serde_json::Value;

use crate::request::compose_target_url;

pub const DEFAULT_BASE_URL: &str = "https://n8n.timepulseai.com.br/mcp/";
pub const DEFAULT_WORKFLOW_ID: &str = "71b6fb6c-d752-4e8d-b747-ae80271f22a7";

pub const BASE_URL_KEY: &str = "mcpBaseUrl";
pub const WORKFLOW_ID_KEY: &str = "mcpWorkflowId";
pub const ENDPOINT_KEY: &str = "endpointToTrigger";
pub const DATA_KEY: &str = "dataToSend";

/// Node-level configuration as the host stores it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeParameters {
    pub mcp_base_url: String,
    pub mcp_workflow_id: String,
    pub endpoint_to_trigger: String,
    pub data_to_send: Value,
}

impl Default for NodeParameters {
    fn default() -> Self {
        Self {
            mcp_base_url: DEFAULT_BASE_URL.to_string(),
            mcp_workflow_id: DEFAULT_WORKFLOW_ID.to_string(),
            endpoint_to_trigger: String::new(),
            data_to_send: Value::Object(serde_json::Map::new()),
        }
    }
}

impl NodeParameters {
    /// Resolves the parameters for one input item.
    ///
    /// Object items may override any of the four node parameters by key; string
    /// parameters are only overridden by string values. Non-object items use the
    /// node values unchanged.
    pub fn for_item(&self, item: &Value) -> InvocationParameters {
        let mut params = InvocationParameters {
            base_url: self.mcp_base_url.clone(),
            workflow_id: self.mcp_workflow_id.clone(),
            endpoint: self.endpoint_to_trigger.clone(),
            payload: self.data_to_send.clone(),
        };

        let Some(obj) = item.as_object() else {
            return params;
        };
        if let Some(Value::String(s)) = obj.get(BASE_URL_KEY) {
            params.base_url = s.clone();
        }
        if let Some(Value::String(s)) = obj.get(WORKFLOW_ID_KEY) {
            params.workflow_id = s.clone();
        }
        if let Some(Value::String(s)) = obj.get(ENDPOINT_KEY) {
            params.endpoint = s.clone();
        }
        if let Some(v) = obj.get(DATA_KEY) {
            params.payload = v.clone();
        }
        params
    }
}

/// Everything needed to perform one outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationParameters {
    pub base_url: String,
    pub workflow_id: String,
    pub endpoint: String,
    pub payload: Value,
}

impl InvocationParameters {
    pub fn target_url(&self) -> String {
        compose_target_url(&self.base_url, &self.workflow_id, &self.endpoint)
    }

    pub fn has_endpoint(&self) -> bool {
        !self.endpoint.is_empty()
    }
}
