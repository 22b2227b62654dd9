use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorShape {
    pub error_message: String,
    pub error_type: String,
}

#[derive(Error, Debug)]
pub enum AddonError {
    #[error("Upstream request failed: {reason}")]
    UpstreamError { reason: String },

    #[error("Upstream response carried no auth signature")]
    MissingSignature,

    #[error("Link could not be resolved: {url}")]
    UnresolvedLink { url: String },

    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    #[error("Internal error: {reason}")]
    InternalError { reason: String },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AddonError {
    pub fn to_error_shape(&self) -> ErrorShape {
        ErrorShape {
            error_message: self.to_string(),
            error_type: self.error_type().to_string(),
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AddonError::UpstreamError { .. } => "UpstreamError",
            AddonError::MissingSignature => "UpstreamError",
            AddonError::UnresolvedLink { .. } => "UpstreamError",
            AddonError::ConfigError { .. } => "ConfigError",
            AddonError::InternalError { .. } => "InternalError",
            AddonError::JsonError(_) => "DataError",
            AddonError::IoError(_) => "DataError",
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            AddonError::UpstreamError { .. } => 502,
            AddonError::MissingSignature => 502,
            AddonError::UnresolvedLink { .. } => 502,
            AddonError::ConfigError { .. } => 500,
            AddonError::InternalError { .. } => 500,
            AddonError::JsonError(_) => 500,
            AddonError::IoError(_) => 500,
        }
    }
}
