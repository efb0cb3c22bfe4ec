use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("endpoint descriptor has an empty name")]
    EmptyName,
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}
