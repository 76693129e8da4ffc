//! Decoded configuration documents and layered key lookup.
//!
//! A [`Configuration`] holds an ordered list of [`PropertySource`]s, highest
//! precedence first. Every lookup walks the sources in that order and stops at
//! the first source that defines the key.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};
use strum::IntoStaticStr;

use crate::error::KeyNotFoundError;

/// A fetched configuration snapshot. Read-only once decoded.
///
/// Absent and `null` fields both decode to their empty value.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    profiles: Vec<String>,
    label: Option<String>,
    version: Option<String>,
    state: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    property_sources: Vec<PropertySource>,
}

/// One named layer of key/value properties.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PropertySource {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    source: IndexMap<String, PropertyValue>,
}

/// A property value as found in the JSON document.
#[derive(Clone, Debug, PartialEq, Deserialize, IntoStaticStr)]
#[serde(untagged)]
#[strum(serialize_all = "lowercase")]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<PropertyValue>),
    Map(IndexMap<String, PropertyValue>),
}

impl Configuration {
    pub fn new(
        name: impl Into<String>,
        profiles: Vec<String>,
        property_sources: Vec<PropertySource>,
    ) -> Self {
        Self {
            name: name.into(),
            profiles,
            property_sources,
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn property_sources(&self) -> &[PropertySource] {
        &self.property_sources
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.property_sources
            .iter()
            .any(|source| source.source.contains_key(key))
    }

    /// Value from the first property source defining `key`.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        let (source, value) = self
            .property_sources
            .iter()
            .find_map(|source| source.get(key).map(|value| (source, value)))?;

        tracing::debug!(
            key,
            source = %source.name,
            kind = value.kind(),
            "Found configuration"
        );
        Some(value)
    }

    pub fn get_required(&self, key: &str) -> Result<&PropertyValue, KeyNotFoundError> {
        self.get(key).ok_or_else(|| KeyNotFoundError {
            key: key.to_owned(),
        })
    }

    /// Like [`Configuration::get`], falling back to `default` (returned as is)
    /// when no source defines `key`.
    pub fn get_defaulted<'a>(
        &'a self,
        key: &str,
        default: &'a PropertyValue,
    ) -> &'a PropertyValue {
        self.get(key).unwrap_or(default)
    }
}

impl PropertySource {
    pub fn new(name: impl Into<String>, source: IndexMap<String, PropertyValue>) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &IndexMap<String, PropertyValue> {
        &self.source
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.source.get(key)
    }
}

impl PropertyValue {
    /// Lowercase variant name, e.g. `"string"` or `"map"`.
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[PropertyValue]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, PropertyValue>> {
        match self {
            Self::Map(values) => Some(values),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl PartialEq<&str> for PropertyValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}
