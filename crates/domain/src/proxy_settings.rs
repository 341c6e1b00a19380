use crate::config::{normalize_suffix, Config};
use crate::upstream::{PoolKind, UpstreamPool};
use crate::DomainError;
use std::time::Duration;

/// Normalized suffixes used by the matcher and the rewriter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasqueradeRules {
    masqueraded_domain: String,
    upstream_domain: String,
    upstream_domains: Vec<String>,
}

impl MasqueradeRules {
    pub fn new<S: AsRef<str>>(
        masqueraded_domain: &str,
        upstream_domain: &str,
        upstream_domains: &[S],
    ) -> Self {
        Self {
            masqueraded_domain: normalize_suffix(masqueraded_domain),
            upstream_domain: normalize_suffix(upstream_domain),
            upstream_domains: upstream_domains
                .iter()
                .map(|s| normalize_suffix(s.as_ref()))
                .collect(),
        }
    }

    pub fn masqueraded_domain(&self) -> &str {
        &self.masqueraded_domain
    }

    pub fn upstream_domain(&self) -> &str {
        &self.upstream_domain
    }

    pub fn upstream_domains(&self) -> &[String] {
        &self.upstream_domains
    }
}

/// Immutable runtime configuration shared by every request.
#[derive(Debug, Clone)]
pub struct ProxySettings {
    pub rules: MasqueradeRules,
    pub special: UpstreamPool,
    pub normal: UpstreamPool,
    pub exchange_timeout: Duration,
}

impl ProxySettings {
    pub fn new(rules: MasqueradeRules, special: UpstreamPool, normal: UpstreamPool) -> Self {
        Self {
            rules,
            special,
            normal,
            exchange_timeout: Duration::from_millis(2000),
        }
    }

    pub fn with_exchange_timeout(mut self, timeout: Duration) -> Self {
        self.exchange_timeout = timeout;
        self
    }

    /// Fails on any malformed endpoint or empty pool.
    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        let rules = MasqueradeRules::new(
            &config.masquerade.masqueraded_domain,
            &config.masquerade.upstream_domain,
            &config.masquerade.upstream_domains,
        );
        let special = UpstreamPool::parse(PoolKind::Special, &config.upstreams.special)?;
        let normal = UpstreamPool::parse(PoolKind::Normal, &config.upstreams.normal)?;

        Ok(Self::new(rules, special, normal).with_exchange_timeout(Duration::from_millis(
            config.upstreams.exchange_timeout_ms,
        )))
    }

    pub fn pool(&self, kind: PoolKind) -> &UpstreamPool {
        match kind {
            PoolKind::Special => &self.special,
            PoolKind::Normal => &self.normal,
        }
    }
}
