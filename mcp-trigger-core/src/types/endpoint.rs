use crate::error::CatalogError;

/// A tool registered on the MCP service, identified by its raw token
/// (underscores in place of spaces).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EndpointDescriptor {
    pub name: String,
}

impl EndpointDescriptor {
    pub fn new(name: impl Into<String>) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        Ok(Self { name })
    }

    pub fn display_name(&self) -> String {
        self.name.replace('_', " ")
    }
}

/// One entry of the selectable endpoint list shown to the host.
///
/// `value` is the raw token used in request URLs; `name` is for display only.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SelectableOption {
    pub name: String,
    pub value: String,
}

impl SelectableOption {
    pub fn placeholder(label: &str) -> Self {
        Self {
            name: label.to_string(),
            value: String::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

impl From<&EndpointDescriptor> for SelectableOption {
    fn from(d: &EndpointDescriptor) -> Self {
        Self {
            name: d.display_name(),
            value: d.name.clone(),
        }
    }
}
