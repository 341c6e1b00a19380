use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid upstream '{0}': expected host:port")]
    InvalidUpstream(String),

    #[error("Upstream pool '{0}' has no servers")]
    EmptyUpstreamPool(&'static str),

    #[error("Could not resolve upstream {0}")]
    UnresolvableUpstream(String),

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport I/O error with {server}: {reason}")]
    TransportIo { server: String, reason: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Response ID mismatch from {server}: expected {expected}, got {actual}")]
    ResponseIdMismatch {
        server: String,
        expected: u16,
        actual: u16,
    },

    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl DomainError {
    /// Failures of a single upstream exchange. These never escape a request.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::UnresolvableUpstream(_)
                | Self::TransportTimeout { .. }
                | Self::TransportIo { .. }
                | Self::InvalidDnsResponse(_)
                | Self::ResponseIdMismatch { .. }
        )
    }
}
