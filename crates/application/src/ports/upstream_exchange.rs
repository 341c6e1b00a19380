use async_trait::async_trait;
use hickory_proto::op::Query;
use hickory_proto::rr::Record;
use masq_dns_domain::{DomainError, UpstreamEndpoint};

#[async_trait]
pub trait UpstreamExchange: Send + Sync {
    /// Sends `query` to `endpoint` in a single round trip and returns the
    /// answer section. Timeouts belong to the implementation.
    async fn exchange(
        &self,
        endpoint: &UpstreamEndpoint,
        query: &Query,
    ) -> Result<Vec<Record>, DomainError>;
}
