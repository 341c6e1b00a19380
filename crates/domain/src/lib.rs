//! masq-dns domain layer
pub mod config;
pub mod errors;
pub mod name_rewriter;
pub mod proxy_settings;
pub mod suffix_matcher;
pub mod upstream;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use proxy_settings::{MasqueradeRules, ProxySettings};
pub use suffix_matcher::{classify, QueryClass};
pub use upstream::{PoolKind, UpstreamEndpoint, UpstreamPool};
