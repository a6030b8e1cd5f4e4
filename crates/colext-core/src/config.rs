//! Library-wide defaults that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::spec::SortDirection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtConfig {
    /// Direction used by `SortSpec::with_config`.
    #[serde(default)]
    pub default_direction: SortDirection,

    /// Stable sorts keep equal elements in source order; unstable sorts
    /// leave their relative order unspecified.
    #[serde(default = "default_stable_sort")]
    pub stable_sort: bool,
}

fn default_stable_sort() -> bool {
    true
}

impl Default for ExtConfig {
    fn default() -> Self {
        Self {
            default_direction: SortDirection::Ascending,
            stable_sort: default_stable_sort(),
        }
    }
}

impl ExtConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `COLEXT_DEFAULT_DIRECTION`: `asc`/`ascending`/`desc`/`descending`
    /// - `COLEXT_STABLE_SORT`: `true`/`false`/`1`/`0`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(s) = lookup("COLEXT_DEFAULT_DIRECTION") {
            if let Ok(v) = s.parse::<SortDirection>() {
                cfg.default_direction = v;
            }
        }

        if let Some(s) = lookup("COLEXT_STABLE_SORT") {
            if let Ok(v) = parse_flag(&s) {
                cfg.stable_sort = v;
            }
        }

        cfg
    }

    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::Config(e.to_string()))
    }
}

fn parse_flag(s: &str) -> Result<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config(format!("not a boolean flag: '{}'", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_spellings() {
        assert!(parse_flag("ON").unwrap());
        assert!(!parse_flag(" 0 ").unwrap());
        assert!(parse_flag("maybe").is_err());
    }
}
