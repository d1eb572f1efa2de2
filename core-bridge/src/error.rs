use backend_traits::error::BackendError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Capability missing: {capability} - {message}")]
    CapabilityMissing { capability: String, message: String },

    #[error("Backend fault: {0}")]
    Backend(#[from] BackendError),
}

pub type Result<T> = std::result::Result<T, Error>;
