use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use crate::dns::transport::UdpTransport;
use async_trait::async_trait;
use hickory_proto::op::Query;
use hickory_proto::rr::Record;
use masq_dns_application::ports::UpstreamExchange;
use masq_dns_domain::{DomainError, UpstreamEndpoint};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

/// Sends single-question queries to upstream resolvers over UDP
pub struct DnsForwarder {
    timeout: Duration,
}

impl DnsForwarder {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// IP hosts are used as-is; names are looked up on every exchange.
    async fn resolve(endpoint: &UpstreamEndpoint) -> Result<SocketAddr, DomainError> {
        if let Ok(ip) = endpoint.host().parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, endpoint.port()));
        }

        tokio::net::lookup_host((endpoint.host(), endpoint.port()))
            .await
            .map_err(|e| {
                DomainError::UnresolvableUpstream(format!("{}: {}", endpoint, e))
            })?
            .next()
            .ok_or_else(|| DomainError::UnresolvableUpstream(endpoint.to_string()))
    }
}

#[async_trait]
impl UpstreamExchange for DnsForwarder {
    async fn exchange(
        &self,
        endpoint: &UpstreamEndpoint,
        query: &Query,
    ) -> Result<Vec<Record>, DomainError> {
        let server_addr = Self::resolve(endpoint).await?;
        let (id, request_bytes) = MessageBuilder::build_query(query)?;

        debug!(
            upstream = %endpoint,
            server = %server_addr,
            domain = %query.name(),
            record_type = ?query.query_type(),
            "Forwarding query"
        );

        let transport = UdpTransport::new(server_addr);
        let response_bytes = transport.send(&request_bytes, self.timeout).await?;
        let message = ResponseParser::parse_response(&response_bytes, id, &endpoint.to_string())?;

        Ok(message.answers().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_ip_endpoint() {
        let endpoint: UpstreamEndpoint = "127.0.0.1:8600".parse().unwrap();
        let addr = DnsForwarder::resolve(&endpoint).await.unwrap();
        assert_eq!(addr, "127.0.0.1:8600".parse::<SocketAddr>().unwrap());
    }

    #[tokio::test]
    async fn test_resolve_localhost_endpoint() {
        let endpoint: UpstreamEndpoint = "localhost:8600".parse().unwrap();
        let addr = DnsForwarder::resolve(&endpoint).await.unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8600);
    }

    #[tokio::test]
    async fn test_resolve_unknown_host_fails() {
        let endpoint: UpstreamEndpoint = "no-such-host.invalid:53".parse().unwrap();
        let result = DnsForwarder::resolve(&endpoint).await;
        assert!(matches!(result, Err(DomainError::UnresolvableUpstream(_))));
    }
}
