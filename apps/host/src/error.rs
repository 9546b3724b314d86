use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Map services API key is empty")]
    EmptyApiKey,

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Bridge error: {0}")]
    Bridge(#[from] bridge::BridgeError),
}

pub type Result<T> = std::result::Result<T, HostError>;
