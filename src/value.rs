//! Typed configuration values and string coercion

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EnvBindError;

/// A configuration value with its type inferred from the declared default.
///
/// Environment variables are plain strings; the variant of the *default*
/// value decides how the raw string is coerced when the variable is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Boolean value (`true`/`yes`/`1`/`on` and `false`/`no`/`0`/`off`)
    Bool(bool),
    /// Signed integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Plain string value, taken verbatim from the environment
    Str(String),
}

/// The type of a [`ConfigValue`], used to drive coercion and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Str,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "str",
        };
        f.write_str(name)
    }
}

impl ConfigValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            ConfigValue::Bool(_) => ValueKind::Bool,
            ConfigValue::Int(_) => ValueKind::Int,
            ConfigValue::Float(_) => ValueKind::Float,
            ConfigValue::Str(_) => ValueKind::Str,
        }
    }

    /// Coerce a raw environment string into a value of the given kind.
    ///
    /// Booleans accept `true`/`yes`/`1`/`on` and `false`/`no`/`0`/`off`,
    /// case-insensitively, so `FOO=False` resolves to `false`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvBindError::Parse`] when the raw string cannot be
    /// interpreted as the requested kind. `env_name` is only used to build
    /// the error message.
    pub fn coerce(kind: ValueKind, raw: &str, env_name: &str) -> Result<Self, EnvBindError> {
        match kind {
            ValueKind::Bool => match raw.to_lowercase().as_str() {
                "true" | "yes" | "1" | "on" => Ok(ConfigValue::Bool(true)),
                "false" | "no" | "0" | "off" => Ok(ConfigValue::Bool(false)),
                _ => Err(EnvBindError::parse_error(
                    env_name,
                    kind,
                    format!("'{raw}' is not a recognized boolean"),
                )),
            },
            ValueKind::Int => raw
                .parse::<i64>()
                .map(ConfigValue::Int)
                .map_err(|e| EnvBindError::parse_error(env_name, kind, e)),
            ValueKind::Float => raw
                .parse::<f64>()
                .map(ConfigValue::Float)
                .map_err(|e| EnvBindError::parse_error(env_name, kind, e)),
            ValueKind::Str => Ok(ConfigValue::Str(raw.to_string())),
        }
    }

    /// Returns the boolean value, or `None` for other kinds.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer value, or `None` for other kinds.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float value, or `None` for other kinds.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the string value, or `None` for other kinds.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Converts the value into a `serde_json::Value`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ConfigValue::Bool(b) => serde_json::Value::from(*b),
            ConfigValue::Int(i) => serde_json::Value::from(*i),
            ConfigValue::Float(f) => serde_json::Value::from(*f),
            ConfigValue::Str(s) => serde_json::Value::from(s.clone()),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{b}"),
            ConfigValue::Int(i) => write!(f, "{i}"),
            ConfigValue::Float(v) => write!(f, "{v}"),
            ConfigValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Int(value.into())
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Str(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Str(value)
    }
}
