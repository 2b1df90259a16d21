//! Environment variable resolution for declared fields

use std::env;

use crate::error::EnvBindError;
use crate::value::ConfigValue;

/// Resolve a field against the environment, falling back to its default.
///
/// Reads `env_name`; when unset the declared default is returned unchanged,
/// when set the raw string is coerced into the default's kind. A value that
/// is not valid unicode is treated as unset.
pub(crate) fn resolve_field(
    env_name: &str,
    default: &ConfigValue,
) -> Result<ConfigValue, EnvBindError> {
    match get_env_value(env_name) {
        Some(raw) => {
            let value = ConfigValue::coerce(default.kind(), &raw, env_name)?;
            tracing::debug!(name = env_name, value = %value, "resolved from environment");
            Ok(value)
        }
        None => {
            tracing::debug!(name = env_name, value = %default, "using declared default");
            Ok(default.clone())
        }
    }
}

/// Get an environment variable value, or `None` when unset or non-unicode.
pub(crate) fn get_env_value(env_name: &str) -> Option<String> {
    env::var(env_name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_resolve_field_env_set() {
        env::set_var("RESOLVE_TEST_VAR", "42");
        let value = resolve_field("RESOLVE_TEST_VAR", &ConfigValue::Int(7)).unwrap();
        assert_eq!(value, ConfigValue::Int(42));
        env::remove_var("RESOLVE_TEST_VAR");
    }

    #[test]
    #[serial]
    fn test_resolve_field_use_default() {
        env::remove_var("RESOLVE_TEST_MISSING");
        let value = resolve_field("RESOLVE_TEST_MISSING", &ConfigValue::Int(7)).unwrap();
        assert_eq!(value, ConfigValue::Int(7));
    }

    #[test]
    #[serial]
    fn test_resolve_field_bool_string() {
        env::set_var("RESOLVE_TEST_BOOL", "False");
        let value = resolve_field("RESOLVE_TEST_BOOL", &ConfigValue::Bool(true)).unwrap();
        assert_eq!(value, ConfigValue::Bool(false));
        env::remove_var("RESOLVE_TEST_BOOL");
    }

    #[test]
    #[serial]
    fn test_resolve_field_parse_error() {
        env::set_var("RESOLVE_TEST_BAD", "not_a_number");
        let result = resolve_field("RESOLVE_TEST_BAD", &ConfigValue::Int(0));
        assert!(matches!(result, Err(EnvBindError::Parse { .. })));
        env::remove_var("RESOLVE_TEST_BAD");
    }

    #[test]
    #[serial]
    fn test_resolve_field_str_verbatim() {
        env::set_var("RESOLVE_TEST_STR", "postgres://localhost/db");
        let value = resolve_field("RESOLVE_TEST_STR", &ConfigValue::from("fallback")).unwrap();
        assert_eq!(value, ConfigValue::from("postgres://localhost/db"));
        env::remove_var("RESOLVE_TEST_STR");
    }
}
