use std::time::Duration;

use serde::Deserialize;

/// CORS configuration
///
/// The defaults mirror what browser clients of the task endpoints need:
/// any origin, `POST` plus pre-flight `OPTIONS`, and the `Content-Type` header.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Attach CORS headers at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Allowed origins (wildcard "*" or explicit list)
    #[serde(default)]
    pub origins: AnyOrArray,
    /// Allowed HTTP methods (wildcard "*" or explicit list)
    #[serde(default = "default_methods")]
    pub methods: AnyOrArray,
    /// Allowed request headers (wildcard "*" or explicit list)
    #[serde(default = "default_headers")]
    pub headers: AnyOrArray,
    /// Max age for the pre-flight cache in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            origins: AnyOrArray::Any,
            methods: default_methods(),
            headers: default_headers(),
            max_age: None,
        }
    }
}

impl CorsConfig {
    /// Get max age as Duration
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }
}

/// Either a wildcard "*" or explicit list of values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnyOrArray {
    /// Match any value
    #[default]
    Any,
    /// Explicit list
    List(Vec<String>),
}

impl<'de> Deserialize<'de> for AnyOrArray {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        let values = match Raw::deserialize(deserializer)? {
            Raw::One(value) => vec![value],
            Raw::Many(values) => values,
        };

        if values.iter().any(|v| v == "*") {
            Ok(Self::Any)
        } else {
            Ok(Self::List(values))
        }
    }
}

const fn default_enabled() -> bool {
    true
}

fn default_methods() -> AnyOrArray {
    AnyOrArray::List(vec!["POST".to_owned(), "OPTIONS".to_owned()])
}

fn default_headers() -> AnyOrArray {
    AnyOrArray::List(vec!["Content-Type".to_owned()])
}
