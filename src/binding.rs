//! Resolved configuration groups

use std::collections::{BTreeMap, BTreeSet};

use crate::error::EnvBindError;
use crate::schema::Schema;
use crate::value::ConfigValue;

/// Include/exclude filter for the value-map views.
///
/// The default filter keeps every field. Include is applied first, then
/// exclude; a field listed in both is excluded.
#[derive(Debug, Clone, Default)]
pub struct FieldFilter {
    include: Option<BTreeSet<String>>,
    exclude: BTreeSet<String>,
}

impl FieldFilter {
    /// A filter that keeps every field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the named fields.
    pub fn include<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include
            .get_or_insert_with(BTreeSet::new)
            .extend(fields.into_iter().map(Into::into));
        self
    }

    /// Drop the named fields.
    pub fn exclude<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(fields.into_iter().map(Into::into));
        self
    }

    fn keeps(&self, field: &str) -> bool {
        if let Some(include) = &self.include {
            if !include.contains(field) {
                return false;
            }
        }
        !self.exclude.contains(field)
    }
}

/// A loaded configuration group: one resolved value per declared field.
///
/// Produced by [`Builder::load`](crate::Builder::load) or
/// [`Schema::load`](crate::Schema::load). The resolved field set always
/// matches the declaration exactly. A binding is a plain snapshot; re-run
/// resolution with [`reload`](Binding::reload) when the environment changes.
#[derive(Debug, Clone)]
pub struct Binding {
    schema: Schema,
    values: BTreeMap<String, ConfigValue>,
}

impl Binding {
    pub(crate) fn new(schema: Schema, values: BTreeMap<String, ConfigValue>) -> Self {
        Self { schema, values }
    }

    /// The group name.
    pub fn name(&self) -> &str {
        self.schema.name()
    }

    /// The environment prefix this group was resolved with.
    pub fn prefix(&self) -> &str {
        self.schema.prefix()
    }

    /// The schema this binding was loaded from.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The resolved value of a field, or `None` when not declared.
    pub fn get(&self, field: &str) -> Option<&ConfigValue> {
        self.values.get(field)
    }

    /// Map of field name to resolved value.
    pub fn values(&self) -> BTreeMap<String, ConfigValue> {
        self.values.clone()
    }

    /// Like [`values`](Binding::values), restricted by a [`FieldFilter`].
    pub fn values_filtered(&self, filter: &FieldFilter) -> BTreeMap<String, ConfigValue> {
        self.values
            .iter()
            .filter(|(name, _)| filter.keeps(name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Map of `prefix + field name` to resolved value.
    ///
    /// Computed on demand; keys match the environment variable names the
    /// group resolves from.
    pub fn prefixed_values(&self) -> BTreeMap<String, ConfigValue> {
        self.prefixed_values_filtered(&FieldFilter::default())
    }

    /// Like [`prefixed_values`](Binding::prefixed_values), restricted by a
    /// [`FieldFilter`]. The filter names fields, not prefixed keys.
    pub fn prefixed_values_filtered(&self, filter: &FieldFilter) -> BTreeMap<String, ConfigValue> {
        self.values
            .iter()
            .filter(|(name, _)| filter.keeps(name))
            .map(|(name, value)| (self.schema.env_name(name), value.clone()))
            .collect()
    }

    /// Re-run resolution against the current environment.
    pub fn reload(&self) -> Result<Binding, EnvBindError> {
        self.schema.load()
    }

    /// Re-run resolution with explicit overrides layered on top.
    ///
    /// # Errors
    ///
    /// Returns [`EnvBindError::UnknownField`] for overrides naming
    /// undeclared fields, and [`EnvBindError::Parse`] on coercion failure.
    pub fn reload_with<I, K, V>(&self, overrides: I) -> Result<Binding, EnvBindError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ConfigValue>,
    {
        self.schema.load_with(overrides)
    }

    /// Serialize the resolved fields as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.values
                .iter()
                .map(|(name, value)| (name.clone(), value.to_json()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Builder;
    use serial_test::serial;
    use std::env;

    fn sample() -> Binding {
        Builder::new("BIND_TEST")
            .field("FOO", 1)
            .field("BAR", 2)
            .field("NAME", "x")
            .load()
            .unwrap()
    }

    #[test]
    #[serial]
    fn test_values_and_prefixed_values_agree() {
        env::remove_var("BIND_TEST_FOO");
        env::remove_var("BIND_TEST_BAR");
        env::remove_var("BIND_TEST_NAME");

        let binding = sample();
        let values = binding.values();
        let prefixed = binding.prefixed_values();

        assert_eq!(values.len(), prefixed.len());
        for (name, value) in &values {
            assert_eq!(prefixed.get(&format!("BIND_TEST_{name}")), Some(value));
        }
    }

    #[test]
    #[serial]
    fn test_filter_include() {
        env::remove_var("BIND_TEST_FOO");
        env::remove_var("BIND_TEST_BAR");
        env::remove_var("BIND_TEST_NAME");

        let binding = sample();
        let filter = FieldFilter::new().include(["FOO"]);
        let values = binding.values_filtered(&filter);
        assert_eq!(values.len(), 1);
        assert_eq!(values.get("FOO"), Some(&ConfigValue::Int(1)));
    }

    #[test]
    #[serial]
    fn test_filter_exclude() {
        env::remove_var("BIND_TEST_FOO");
        env::remove_var("BIND_TEST_BAR");
        env::remove_var("BIND_TEST_NAME");

        let binding = sample();
        let filter = FieldFilter::new().exclude(["NAME"]);
        let prefixed = binding.prefixed_values_filtered(&filter);
        assert_eq!(prefixed.len(), 2);
        assert!(!prefixed.contains_key("BIND_TEST_NAME"));
    }

    #[test]
    #[serial]
    fn test_filter_include_and_exclude_same_field() {
        env::remove_var("BIND_TEST_FOO");
        env::remove_var("BIND_TEST_BAR");
        env::remove_var("BIND_TEST_NAME");

        let binding = sample();
        let filter = FieldFilter::new().include(["FOO", "BAR"]).exclude(["FOO"]);
        let values = binding.values_filtered(&filter);
        assert_eq!(values.len(), 1);
        assert!(values.contains_key("BAR"));
    }

    #[test]
    #[serial]
    fn test_reload_picks_up_environment_change() {
        env::remove_var("BIND_TEST_FOO");
        env::remove_var("BIND_TEST_BAR");
        env::remove_var("BIND_TEST_NAME");

        let binding = sample();
        assert_eq!(binding.get("FOO"), Some(&ConfigValue::Int(1)));

        env::set_var("BIND_TEST_FOO", "10");
        let reloaded = binding.reload().unwrap();
        assert_eq!(reloaded.get("FOO"), Some(&ConfigValue::Int(10)));
        // The original snapshot is untouched.
        assert_eq!(binding.get("FOO"), Some(&ConfigValue::Int(1)));

        env::remove_var("BIND_TEST_FOO");
    }

    #[test]
    #[serial]
    fn test_reload_with_overrides() {
        env::remove_var("BIND_TEST_FOO");
        env::remove_var("BIND_TEST_BAR");
        env::remove_var("BIND_TEST_NAME");

        let binding = sample();
        let reloaded = binding.reload_with([("BAR", 77)]).unwrap();
        assert_eq!(reloaded.get("BAR"), Some(&ConfigValue::Int(77)));
        assert_eq!(reloaded.get("FOO"), Some(&ConfigValue::Int(1)));
    }

    #[test]
    #[serial]
    fn test_to_json() {
        env::remove_var("BIND_TEST_FOO");
        env::remove_var("BIND_TEST_BAR");
        env::remove_var("BIND_TEST_NAME");

        let binding = sample();
        assert_eq!(
            binding.to_json(),
            serde_json::json!({"FOO": 1, "BAR": 2, "NAME": "x"})
        );
    }
}
