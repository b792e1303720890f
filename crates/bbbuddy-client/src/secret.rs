//! Secret resolution for config values.
//!
//! The `secret` entry in `config.toml` does not have to hold the shared
//! secret itself: the `env::VAR` form defers to the environment so the
//! plain-text value never has to live in the file. Anything without the
//! prefix is used as-is.

use crate::error::{ApiError, ApiResult};

/// Resolves a configured secret value.
///
/// `env::VAR` reads `$VAR` at call time; any other value is returned
/// unchanged.
pub fn resolve(value: &str) -> ApiResult<String> {
    match value.strip_prefix("env::") {
        Some(var) => std::env::var(var).map_err(|_| {
            ApiError::Config(format!(
                "secret references unset environment variable '{}'",
                var
            ))
        }),
        None => Ok(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_value_is_returned_unchanged() {
        assert_eq!(
            resolve("5ea96baab0fabfab0deadc94197fd185").unwrap(),
            "5ea96baab0fabfab0deadc94197fd185"
        );
        assert_eq!(resolve("").unwrap(), "");
    }

    #[test]
    fn env_reference_reads_the_variable() {
        unsafe {
            std::env::set_var("_BBBUDDY_RESOLVE_TEST", "from-env");
        }
        assert_eq!(resolve("env::_BBBUDDY_RESOLVE_TEST").unwrap(), "from-env");
        unsafe {
            std::env::remove_var("_BBBUDDY_RESOLVE_TEST");
        }
    }

    #[test]
    fn unset_variable_is_a_config_error() {
        let err = resolve("env::_BBBUDDY_RESOLVE_TEST_UNSET").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
        assert!(err.to_string().contains("_BBBUDDY_RESOLVE_TEST_UNSET"));
    }
}
