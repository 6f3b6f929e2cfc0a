//! Raw calculator inputs
//!
//! Form values arrive as free text. Numbers are read with the same
//! leniency as a browser `parseFloat`: leading whitespace is skipped, the
//! longest numeric prefix is used and anything after it is ignored. A value
//! with no numeric prefix is treated as absent.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Parse the numeric prefix of `raw`, browser `parseFloat` style
///
/// Returns `None` where `parseFloat` would return `NaN`.
pub fn parse_float(raw: &str) -> Option<f64> {
    static PREFIX: OnceLock<regex_lite::Regex> = OnceLock::new();
    let prefix = PREFIX.get_or_init(|| {
        regex_lite::Regex::new(r"^[+-]?(?:Infinity|(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)")
            .expect("float prefix pattern is valid")
    });

    let m = prefix.find(raw.trim_start())?;
    m.as_str().parse::<f64>().ok()
}

// ============================================================================
// Gender
// ============================================================================

/// Gender as used by the regression formulas and rating tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Interpret a raw form value
    ///
    /// Only the exact string `male` selects [`Gender::Male`]; anything else,
    /// including an empty value, is treated as female.
    pub fn from_input(raw: Option<&str>) -> Self {
        match raw {
            Some("male") => Gender::Male,
            _ => Gender::Female,
        }
    }

    /// Regression indicator: 1 for male, 0 for female
    pub fn indicator(&self) -> f64 {
        match self {
            Gender::Male => 1.0,
            Gender::Female => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Input map
// ============================================================================

/// Raw form values keyed by field key (`age`, `weight`, `runTime`, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputValues(HashMap<String, String>);

impl InputValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Raw value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Numeric value for `key`, `None` if missing or unparseable
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(parse_float)
    }

    /// Gender selected in the form
    pub fn gender(&self) -> Gender {
        Gender::from_input(self.get("gender"))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for InputValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<HashMap<String, String>> for InputValues {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}
