use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Isomer(#[from] isomer_core::IsomerError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
