use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpendlogError {
    #[error("Invalid value: {0}")]
    Validation(String),
    #[error("No expense at position {0}")]
    NoSuchExpense(usize),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Corrupt expense file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),
}
