use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Servers for internal (service discovery) names.
    #[serde(default = "default_special")]
    pub special: Vec<String>,

    /// Servers for everything else, also used as fallback.
    #[serde(default = "default_normal")]
    pub normal: Vec<String>,

    #[serde(default = "default_exchange_timeout_ms")]
    pub exchange_timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            special: default_special(),
            normal: default_normal(),
            exchange_timeout_ms: default_exchange_timeout_ms(),
        }
    }
}

fn default_special() -> Vec<String> {
    vec!["localhost:8600".to_string()]
}

fn default_normal() -> Vec<String> {
    vec!["1.1.1.1:53".to_string()]
}

fn default_exchange_timeout_ms() -> u64 {
    2000
}
