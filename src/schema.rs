//! Group declaration, prefix derivation and eager loading

use std::collections::BTreeMap;

use crate::binding::Binding;
use crate::de;
use crate::error::EnvBindError;
use crate::value::ConfigValue;

/// Reserved group name that derives the empty prefix, compared
/// case-insensitively.
const ROOT_GROUP: &str = "root";

/// A single declared field: its name and literal default.
///
/// The default's [`kind`](ConfigValue::kind) decides how the corresponding
/// environment variable is coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    name: String,
    default: ConfigValue,
}

impl FieldSpec {
    /// The field name, exactly as declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared default value.
    pub fn default(&self) -> &ConfigValue {
        &self.default
    }
}

/// Builder for declaring a configuration group.
///
/// The declarative entry point of the crate: name the group, declare its
/// fields with literal defaults, then either [`load`](Builder::load) it
/// eagerly or stop at [`schema`](Builder::schema) to defer resolution.
///
/// # Example
///
/// ```rust
/// use envbind::Builder;
///
/// # fn main() -> Result<(), envbind::EnvBindError> {
/// std::env::set_var("SERVER_PORT", "3000");
/// let server = Builder::new("SERVER")
///     .field("HOST", "127.0.0.1")
///     .field("PORT", 8080)
///     .load()?;
/// assert_eq!(server.get("PORT").and_then(|v| v.as_int()), Some(3000));
/// # std::env::remove_var("SERVER_PORT");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    name: String,
    prefix: Option<String>,
    fields: Vec<FieldSpec>,
}

impl Builder {
    /// Start declaring a group with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: None,
            fields: Vec::new(),
        }
    }

    /// Set an explicit environment prefix, overriding derivation.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Declare a field with a literal default value.
    ///
    /// Field names are used exactly as written; the environment variable
    /// name becomes `prefix + name`.
    pub fn field(mut self, name: impl Into<String>, default: impl Into<ConfigValue>) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            default: default.into(),
        });
        self
    }

    /// Finish the declaration without touching the environment.
    ///
    /// Validates the field set and derives the prefix. Use this when eager
    /// loading is unwanted, e.g. to load the same schema repeatedly in
    /// tests.
    ///
    /// # Errors
    ///
    /// Returns [`EnvBindError::DuplicateField`] when a field name repeats.
    pub fn schema(self) -> Result<Schema, EnvBindError> {
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(EnvBindError::duplicate_field(&self.name, &field.name));
            }
        }

        let prefix = match self.prefix {
            Some(prefix) => prefix,
            None => derive_prefix(&self.name),
        };

        Ok(Schema {
            name: self.name,
            prefix,
            fields: self.fields,
        })
    }

    /// Finish the declaration and load it from the environment immediately.
    ///
    /// Equivalent to `schema()?.load()`; this is the default path, matching
    /// declare-then-construct-eagerly usage.
    pub fn load(self) -> Result<Binding, EnvBindError> {
        self.schema()?.load()
    }
}

/// Derive the environment prefix from a group name.
///
/// `name + "_"`, except the reserved name `root` (any casing) derives the
/// empty prefix.
fn derive_prefix(name: &str) -> String {
    if name.eq_ignore_ascii_case(ROOT_GROUP) {
        String::new()
    } else {
        format!("{name}_")
    }
}

/// A validated group declaration with its derived prefix.
///
/// Performs no environment access; the prefix is fixed at construction and
/// immutable thereafter. [`load`](Schema::load) resolves the declared fields
/// into a [`Binding`].
#[derive(Debug, Clone)]
pub struct Schema {
    name: String,
    prefix: String,
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// The group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The environment prefix, explicit or derived.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The declared fields, in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// The environment variable name for a field: `prefix + field name`.
    pub fn env_name(&self, field: &str) -> String {
        format!("{}{}", self.prefix, field)
    }

    /// Resolve every declared field against the environment.
    ///
    /// Unset variables fall back to their defaults; set variables are
    /// coerced to the default's kind. All-or-nothing: the first coercion
    /// failure aborts the load.
    pub fn load(&self) -> Result<Binding, EnvBindError> {
        self.load_with(std::iter::empty::<(String, ConfigValue)>())
    }

    /// Resolve the group with explicit overrides layered on top.
    ///
    /// An override wins over both the environment and the default for its
    /// field; remaining fields resolve normally.
    ///
    /// # Errors
    ///
    /// Returns [`EnvBindError::UnknownField`] when an override names a field
    /// the group does not declare, and [`EnvBindError::Parse`] on coercion
    /// failure.
    pub fn load_with<I, K, V>(&self, overrides: I) -> Result<Binding, EnvBindError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ConfigValue>,
    {
        let mut overrides: BTreeMap<String, ConfigValue> = overrides
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        for name in overrides.keys() {
            if !self.fields.iter().any(|f| f.name == *name) {
                return Err(EnvBindError::unknown_field(&self.name, name));
            }
        }

        let mut values = BTreeMap::new();
        for field in &self.fields {
            let value = match overrides.remove(field.name()) {
                Some(value) => value,
                None => de::resolve_field(&self.env_name(field.name()), field.default())?,
            };
            values.insert(field.name().to_string(), value);
        }

        tracing::debug!(group = %self.name, prefix = %self.prefix, "loaded group");
        Ok(Binding::new(self.clone(), values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_derived_prefix_appends_underscore() {
        let schema = Builder::new("STUFF").field("FOO", 1).schema().unwrap();
        assert_eq!(schema.prefix(), "STUFF_");
        assert_eq!(schema.env_name("FOO"), "STUFF_FOO");
    }

    #[test]
    fn test_root_name_derives_empty_prefix() {
        for name in ["root", "Root", "ROOT"] {
            let schema = Builder::new(name).field("TOP", true).schema().unwrap();
            assert_eq!(schema.prefix(), "", "name = {name}");
            assert_eq!(schema.env_name("TOP"), "TOP");
        }
    }

    #[test]
    fn test_explicit_prefix_wins_over_derivation() {
        let schema = Builder::new("CUSTOM_PREFIX")
            .prefix("PRE_")
            .field("P1", 9)
            .schema()
            .unwrap();
        assert_eq!(schema.prefix(), "PRE_");
        assert_eq!(schema.env_name("P1"), "PRE_P1");
    }

    #[test]
    fn test_explicit_empty_prefix() {
        let schema = Builder::new("ANY").prefix("").field("X", 1).schema().unwrap();
        assert_eq!(schema.prefix(), "");
        assert_eq!(schema.env_name("X"), "X");
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let result = Builder::new("DUP").field("A", 1).field("A", 2).schema();
        match result {
            Err(EnvBindError::DuplicateField { group, field }) => {
                assert_eq!(group, "DUP");
                assert_eq!(field, "A");
            }
            other => panic!("expected DuplicateField, got {other:?}"),
        }
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let schema = Builder::new("ORDERED")
            .field("B", 1)
            .field("A", 2)
            .schema()
            .unwrap();
        let names: Vec<_> = schema.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    #[serial]
    fn test_load_with_override() {
        env::set_var("OVR_FOO", "3");
        env::remove_var("OVR_BAR");

        let schema = Builder::new("OVR")
            .field("FOO", 1)
            .field("BAR", 2)
            .schema()
            .unwrap();
        let binding = schema.load_with([("FOO", 99)]).unwrap();

        // Override wins over the environment, BAR resolves normally.
        assert_eq!(binding.get("FOO"), Some(&ConfigValue::Int(99)));
        assert_eq!(binding.get("BAR"), Some(&ConfigValue::Int(2)));

        env::remove_var("OVR_FOO");
    }

    #[test]
    #[serial]
    fn test_load_with_unknown_field() {
        let schema = Builder::new("STRICT").field("A", 1).schema().unwrap();
        let result = schema.load_with([("MISSING", 5)]);
        assert!(matches!(result, Err(EnvBindError::UnknownField { .. })));
    }
}
