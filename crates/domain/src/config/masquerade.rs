use serde::{Deserialize, Serialize};

/// Domain suffixes driving classification and rewriting.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MasqueradeConfig {
    /// Suffix presented to clients.
    #[serde(default = "default_masqueraded_domain")]
    pub masqueraded_domain: String,

    /// Suffix the special pool actually serves.
    #[serde(default = "default_upstream_domain")]
    pub upstream_domain: String,

    /// Extra suffixes routed to the special pool without rewriting.
    #[serde(default = "default_upstream_domains")]
    pub upstream_domains: Vec<String>,
}

impl MasqueradeConfig {
    pub fn normalize(&mut self) {
        self.masqueraded_domain = normalize_suffix(&self.masqueraded_domain);
        self.upstream_domain = normalize_suffix(&self.upstream_domain);
        for suffix in &mut self.upstream_domains {
            *suffix = normalize_suffix(suffix);
        }
    }
}

impl Default for MasqueradeConfig {
    fn default() -> Self {
        Self {
            masqueraded_domain: default_masqueraded_domain(),
            upstream_domain: default_upstream_domain(),
            upstream_domains: default_upstream_domains(),
        }
    }
}

/// Makes a suffix both dot-prefixed and dot-terminated.
pub fn normalize_suffix(suffix: &str) -> String {
    let mut normalized = String::with_capacity(suffix.len() + 2);
    if !suffix.starts_with('.') {
        normalized.push('.');
    }
    normalized.push_str(suffix);
    if !normalized.ends_with('.') {
        normalized.push('.');
    }
    normalized
}

fn default_masqueraded_domain() -> String {
    ".example.com.".to_string()
}

fn default_upstream_domain() -> String {
    ".service.consul.".to_string()
}

fn default_upstream_domains() -> Vec<String> {
    vec!["service.consul.".to_string(), ".consul.".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_both_dots() {
        assert_eq!(normalize_suffix("example.com"), ".example.com.");
        assert_eq!(normalize_suffix(".example.com"), ".example.com.");
        assert_eq!(normalize_suffix("example.com."), ".example.com.");
        assert_eq!(normalize_suffix(".example.com."), ".example.com.");
    }

    #[test]
    fn test_normalize_empty_and_root() {
        assert_eq!(normalize_suffix(""), ".");
        assert_eq!(normalize_suffix("."), ".");
    }

    #[test]
    fn test_normalize_config_touches_every_suffix() {
        let mut config = MasqueradeConfig {
            masqueraded_domain: "corp.example".to_string(),
            upstream_domain: "service.consul".to_string(),
            upstream_domains: vec!["consul".to_string(), ".node.consul.".to_string()],
        };
        config.normalize();

        assert_eq!(config.masqueraded_domain, ".corp.example.");
        assert_eq!(config.upstream_domain, ".service.consul.");
        assert_eq!(config.upstream_domains, vec![".consul.", ".node.consul."]);
    }
}
