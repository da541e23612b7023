use thiserror::Error;

/// Errors from turning frames into requests and responses into frames.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed frame: {0}")]
    Decode(String),

    #[error("failed to encode response: {0}")]
    Encode(String),
}

/// Errors from the external classification and engagement collaborators.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway unavailable: {0}")]
    Unavailable(String),

    #[error("gateway returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid gateway response: {0}")]
    InvalidResponse(String),
}

/// Errors raised while resolving the process configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {reason}")]
    Read { path: String, reason: String },

    #[error("failed to parse config file '{path}': {reason}")]
    Parse { path: String, reason: String },

    #[error("invalid value for {var}: '{value}'")]
    InvalidEnv { var: String, value: String },
}
