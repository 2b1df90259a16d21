//! Explicit scopes and the flattening populator

use std::collections::BTreeMap;

use crate::binding::Binding;
use crate::value::ConfigValue;

/// A named slot in a [`Scope`]: either a loaded group or a flat value.
#[derive(Debug, Clone)]
pub enum Entry {
    /// A loaded configuration group
    Binding(Binding),
    /// A flat value, typically produced by [`Scope::populate`]
    Value(ConfigValue),
}

impl From<Binding> for Entry {
    fn from(binding: Binding) -> Self {
        Entry::Binding(binding)
    }
}

impl From<ConfigValue> for Entry {
    fn from(value: ConfigValue) -> Self {
        Entry::Value(value)
    }
}

/// A mutable name-to-entry mapping supplied by the caller.
///
/// The populator target: bindings inserted here can be flattened into flat
/// values named like their environment variables, alongside whatever other
/// values the caller keeps in the scope. Iteration order is sorted by name.
///
/// # Example
///
/// ```rust
/// use envbind::{Builder, Scope};
///
/// # fn main() -> Result<(), envbind::EnvBindError> {
/// std::env::set_var("APP_PORT", "9000");
/// let app = Builder::new("APP").field("PORT", 8080).load()?;
///
/// let mut scope = Scope::new();
/// scope.insert_binding("app", app);
/// scope.populate();
///
/// assert_eq!(
///     scope.get_value("APP_PORT").and_then(|v| v.as_int()),
///     Some(9000),
/// );
/// # std::env::remove_var("APP_PORT");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scope {
    entries: BTreeMap<String, Entry>,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a loaded group under a scope name.
    ///
    /// The scope name is independent of the group name; an existing entry
    /// under the same name is replaced.
    pub fn insert_binding(&mut self, name: impl Into<String>, binding: Binding) {
        self.entries.insert(name.into(), Entry::Binding(binding));
    }

    /// Insert a flat value under a scope name.
    pub fn insert_value(&mut self, name: impl Into<String>, value: impl Into<ConfigValue>) {
        self.entries.insert(name.into(), Entry::Value(value.into()));
    }

    /// The entry under a name, if any.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// The flat value under a name, or `None` when absent or a binding.
    pub fn get_value(&self, name: &str) -> Option<&ConfigValue> {
        match self.entries.get(name) {
            Some(Entry::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// The binding under a name, or `None` when absent or a flat value.
    pub fn get_binding(&self, name: &str) -> Option<&Binding> {
        match self.entries.get(name) {
            Some(Entry::Binding(binding)) => Some(binding),
            _ => None,
        }
    }

    /// Remove an entry, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<Entry> {
        self.entries.remove(name)
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Iterate entry names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the scope holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten every binding in the scope into flat value entries.
    ///
    /// Takes a snapshot of the prefixed value maps of all bindings currently
    /// present, then merges them in scope iteration order; later entries win
    /// on key collision (collision precedence across groups is unspecified
    /// and should not be relied on). The bindings themselves stay in the
    /// scope, so the operation is idempotent while the environment is
    /// unchanged. A scope without bindings is left untouched.
    pub fn populate(&mut self) {
        let snapshots: Vec<BTreeMap<String, ConfigValue>> = self
            .entries
            .values()
            .filter_map(|entry| match entry {
                Entry::Binding(binding) => Some(binding.prefixed_values()),
                Entry::Value(_) => None,
            })
            .collect();

        let mut merged = 0usize;
        for snapshot in snapshots {
            for (name, value) in snapshot {
                self.entries.insert(name, Entry::Value(value));
                merged += 1;
            }
        }
        tracing::debug!(entries = merged, "populated scope");
    }
}
