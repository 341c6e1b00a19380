//! Suffix substitution between the masqueraded and the internal domain.
//!
//! Both directions replace the *first* occurrence of the suffix string,
//! wherever it sits in the name. A name carrying the suffix text as an inner
//! label gets that label rewritten instead of its tail, so the two functions
//! are only inverses when the suffix occurs once, at the end.

use crate::MasqueradeRules;

/// Client name to the name asked of the special pool.
pub fn to_upstream(name: &str, rules: &MasqueradeRules) -> String {
    name.replacen(rules.masqueraded_domain(), rules.upstream_domain(), 1)
}

/// Upstream answer owner name back to what the client asked for.
pub fn to_client(name: &str, rules: &MasqueradeRules) -> String {
    name.replacen(rules.upstream_domain(), rules.masqueraded_domain(), 1)
}
