use crate::MasqueradeRules;
use std::fmt;

/// Where a query name belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryClass {
    /// Ends with the masqueraded suffix; rewritten both ways.
    Masqueraded,
    /// Ends with one of the extra upstream suffixes; routed, never rewritten.
    InternalOther,
    Normal,
}

impl QueryClass {
    /// Whether the first attempt goes to the special pool.
    pub fn is_special(&self) -> bool {
        matches!(self, Self::Masqueraded | Self::InternalOther)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Masqueraded => "masqueraded",
            Self::InternalOther => "internal",
            Self::Normal => "normal",
        }
    }
}

impl fmt::Display for QueryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-sensitive suffix classification. The masqueraded suffix wins over
/// the extra upstream suffixes.
pub fn classify(query_name: &str, rules: &MasqueradeRules) -> QueryClass {
    if query_name.ends_with(rules.masqueraded_domain()) {
        QueryClass::Masqueraded
    } else if has_suffix_in(query_name, rules.upstream_domains()) {
        QueryClass::InternalOther
    } else {
        QueryClass::Normal
    }
}

fn has_suffix_in(name: &str, suffixes: &[String]) -> bool {
    suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
}
