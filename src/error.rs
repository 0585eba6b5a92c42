use thiserror::Error;

#[derive(Error, Debug)]
pub enum BulletinError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server returned HTTP {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Login response did not contain an access token")]
    MissingToken,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid server URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, BulletinError>;
