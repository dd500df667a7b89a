use thiserror::Error;

/// Failures of a single gateway round-trip.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// Connection refused, timeout, TLS failure and friends.
    #[error("transport error on {endpoint}: {reason}")]
    Transport { endpoint: String, reason: String },

    /// The server answered with a non-success status.
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: String, status: u16 },

    /// The body could not be decoded into the expected payload.
    #[error("could not decode {endpoint} response: {reason}")]
    Decode { endpoint: String, reason: String },
}

impl GatewayError {
    /// 4xx answers mean the server refused the action; everything else is a transport problem.
    pub fn is_rejection(&self) -> bool {
        matches!(self, GatewayError::Status { status, .. } if (400..500).contains(status))
    }

    pub fn endpoint(&self) -> &str {
        match self {
            GatewayError::Transport { endpoint, .. }
            | GatewayError::Status { endpoint, .. }
            | GatewayError::Decode { endpoint, .. } => endpoint,
        }
    }
}

/// Errors surfaced by the view layer.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// View configuration that cannot drive pagination or selection.
    #[error("invalid view configuration: {0}")]
    Config(String),
}
