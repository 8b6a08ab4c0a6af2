use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Credential store error: {0}")]
    Credentials(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
