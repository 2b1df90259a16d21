//! Error types for environment variable binding

use crate::value::ValueKind;

/// Errors that can occur when declaring or loading a configuration group.
///
/// Covers three failure scenarios:
/// - Declaring the same field twice in one group
/// - Type coercion failures when resolving an environment variable
/// - Overrides naming fields the group never declared
#[derive(Debug, thiserror::Error)]
pub enum EnvBindError {
    /// A field name appears more than once in a group declaration.
    #[error("field '{field}' is declared more than once in group '{group}'")]
    DuplicateField {
        /// Name of the group being declared
        group: String,
        /// The repeated field name
        field: String,
    },

    /// Failed to coerce an environment variable value into the field's kind.
    ///
    /// The kind is inferred from the field's declared default; resolution is
    /// all-or-nothing, so a single coercion failure fails the whole load.
    #[error("failed to parse environment variable '{name}' as {kind}: {message}")]
    Parse {
        /// Name of the environment variable being parsed
        name: String,
        /// Kind that coercion was attempted for
        kind: ValueKind,
        /// Error message from the underlying parser
        message: String,
    },

    /// An override was supplied for a field the group does not declare.
    ///
    /// A loaded group carries exactly its declared field set, so overrides
    /// cannot introduce new fields.
    #[error("group '{group}' has no field named '{field}'")]
    UnknownField {
        /// Name of the group being reloaded
        group: String,
        /// The undeclared field name
        field: String,
    },
}

impl EnvBindError {
    /// Create a coercion error (used by the resolver)
    #[doc(hidden)]
    pub fn parse_error(
        name: impl Into<String>,
        kind: ValueKind,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::Parse {
            name: name.into(),
            kind,
            message: message.to_string(),
        }
    }

    /// Create a duplicate-field declaration error
    #[doc(hidden)]
    pub fn duplicate_field(group: impl Into<String>, field: impl Into<String>) -> Self {
        Self::DuplicateField {
            group: group.into(),
            field: field.into(),
        }
    }

    /// Create an unknown-field override error
    #[doc(hidden)]
    pub fn unknown_field(group: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            group: group.into(),
            field: field.into(),
        }
    }
}
