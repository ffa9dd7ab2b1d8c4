use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Service returned status {0}")]
    Service(u16),

    #[error("Transport failure: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;
