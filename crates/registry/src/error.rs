use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
