//! Sort specifications: which fields, in which single direction.
//!
//! Example (YAML):
//! ```yaml
//! fields: ["Name", "Age"]
//! direction: desc
//! ```
//!
//! `direction` may be omitted and defaults to ascending.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::ExtConfig;
use crate::error::{Error, Result};
use crate::schema::fold_case;

/// One direction for every key; per-key directions are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, SortDirection::Descending)
    }

    /// Apply this direction to an ascending comparison result.
    pub fn apply(&self, ord: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(Error::Spec(format!("unknown sort direction '{}'", other))),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("ascending"),
            SortDirection::Descending => f.write_str("descending"),
        }
    }
}

impl<'de> Deserialize<'de> for SortDirection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub fields: Vec<String>,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(mut self, descending: bool) -> Self {
        self.direction = SortDirection::from_descending(descending);
        self
    }

    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Take the direction from `cfg`.
    pub fn with_config(self, cfg: &ExtConfig) -> Self {
        self.with_direction(cfg.default_direction)
    }

    /// Field names with case-insensitive duplicates removed, first
    /// occurrence kept, original spelling preserved.
    pub fn distinct_fields(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.fields
            .iter()
            .filter(|name| seen.insert(fold_case(name)))
            .map(String::as_str)
            .collect()
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_yaml(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }
}
