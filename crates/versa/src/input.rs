//! Construction inputs: structured records and dynamically typed values

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::component::{parse_component, Component};
use crate::error::{Result, VersionError};

/// Structured record describing a version.
///
/// Numeric parts are plain integers here. When the record arrives as JSON (or
/// through any self-describing serde format) they may also be numeric strings
/// such as `"3"`, and `prerelease`/`metadata` may be missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Components {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Vec<String>,
    pub metadata: Vec<String>,
}

impl Components {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Components {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            metadata: Vec::new(),
        }
    }

    pub fn with_prerelease<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerelease = segments.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_metadata<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Read a record from a JSON object, coercing numeric strings
    pub fn from_json_map(map: &Map<String, Value>) -> Result<Self> {
        Ok(Components {
            major: component_from_json(Component::Major, map.get("major"))?,
            minor: component_from_json(Component::Minor, map.get("minor"))?,
            patch: component_from_json(Component::Patch, map.get("patch"))?,
            prerelease: segments_from_json("prerelease", map.get("prerelease"))?,
            metadata: segments_from_json("metadata", map.get("metadata"))?,
        })
    }
}

impl TryFrom<Map<String, Value>> for Components {
    type Error = VersionError;

    fn try_from(map: Map<String, Value>) -> Result<Self> {
        Components::from_json_map(&map)
    }
}

fn component_from_json(component: Component, value: Option<&Value>) -> Result<u64> {
    let invalid = |text: String| VersionError::InvalidComponentValue {
        component,
        value: text,
    };

    match value {
        None => Err(invalid("<missing>".to_string())),
        Some(Value::String(text)) => parse_component(component, text),
        Some(Value::Number(number)) => {
            if let Some(n) = number.as_u64() {
                return Ok(n);
            }
            // `u64::MAX as f64` rounds up to 2^64, which itself does not fit.
            match number.as_f64() {
                Some(f) if f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => Ok(f as u64),
                _ => Err(invalid(number.to_string())),
            }
        }
        Some(other) => Err(invalid(other.to_string())),
    }
}

fn segments_from_json(section: &'static str, value: Option<&Value>) -> Result<Vec<String>> {
    let items = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(VersionError::InvalidIdentifier {
                section,
                identifier: other.to_string(),
            })
        }
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(segment) => Ok(segment.clone()),
            other => Err(VersionError::InvalidIdentifier {
                section,
                identifier: other.to_string(),
            }),
        })
        .collect()
}

/// Anything a [`crate::Version`] can be built from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum VersionInput {
    /// A SemVer string such as `v1.2.3-beta+build`
    Text(String),
    /// A structured record
    Record(Components),
}

impl TryFrom<Value> for VersionInput {
    type Error = VersionError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(VersionInput::Text(text)),
            Value::Object(map) => Components::from_json_map(&map).map(VersionInput::Record),
            other => Err(VersionError::InvalidInputType {
                found: json_type_name(&other),
            }),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<&str> for VersionInput {
    fn from(text: &str) -> Self {
        VersionInput::Text(text.to_string())
    }
}

impl From<String> for VersionInput {
    fn from(text: String) -> Self {
        VersionInput::Text(text)
    }
}

impl From<Components> for VersionInput {
    fn from(components: Components) -> Self {
        VersionInput::Record(components)
    }
}
