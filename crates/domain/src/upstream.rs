use crate::DomainError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// An upstream resolver given as `host:port`. The host may be a name that is
/// resolved at exchange time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UpstreamEndpoint {
    host: Arc<str>,
    port: u16,
}

impl UpstreamEndpoint {
    pub fn new(host: impl Into<Arc<str>>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl FromStr for UpstreamEndpoint {
    type Err = DomainError;

    /// Exactly one `:` must separate host and port.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let (host, port) = match (parts.next(), parts.next(), parts.next()) {
            (Some(host), Some(port), None) => (host, port),
            _ => return Err(DomainError::InvalidUpstream(s.to_string())),
        };

        if host.is_empty() {
            return Err(DomainError::InvalidUpstream(s.to_string()));
        }

        let port = port
            .parse::<u16>()
            .map_err(|_| DomainError::InvalidUpstream(s.to_string()))?;

        Ok(Self::new(host, port))
    }
}

impl fmt::Display for UpstreamEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolKind {
    Special,
    Normal,
}

impl PoolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Special => "special",
            Self::Normal => "normal",
        }
    }
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, non-empty list of endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamPool {
    kind: PoolKind,
    endpoints: Vec<UpstreamEndpoint>,
}

impl UpstreamPool {
    pub fn new(kind: PoolKind, endpoints: Vec<UpstreamEndpoint>) -> Result<Self, DomainError> {
        if endpoints.is_empty() {
            return Err(DomainError::EmptyUpstreamPool(kind.as_str()));
        }
        Ok(Self { kind, endpoints })
    }

    pub fn parse<S: AsRef<str>>(kind: PoolKind, servers: &[S]) -> Result<Self, DomainError> {
        let endpoints = servers
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<UpstreamEndpoint>, _>>()?;
        Self::new(kind, endpoints)
    }

    pub fn kind(&self) -> PoolKind {
        self.kind
    }

    pub fn endpoints(&self) -> &[UpstreamEndpoint] {
        &self.endpoints
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Always false for a constructed pool.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Out-of-range indexes wrap around.
    pub fn get(&self, index: usize) -> &UpstreamEndpoint {
        &self.endpoints[index % self.endpoints.len()]
    }
}
