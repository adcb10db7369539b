//! Environment variable parsing with warn-level logging for invalid values.

/// Variable holding a full PostgreSQL connection URL.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Variables composed into a PostgreSQL URL when `DATABASE_URL` is absent.
pub const PG_USER_VAR: &str = "PINREX_DB_USER";
pub const PG_PASSWORD_VAR: &str = "PINREX_DB_PASSWORD";
pub const PG_HOST_VAR: &str = "PINREX_DB_HOST";
pub const PG_PORT_VAR: &str = "PINREX_DB_PORT";
pub const PG_NAME_VAR: &str = "PINREX_DB_NAME";

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Read a non-empty environment variable.
pub fn env_non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

/// Resolve the PostgreSQL connection URL.
///
/// `DATABASE_URL` wins. Otherwise the URL is composed from `PINREX_DB_USER`,
/// `PINREX_DB_PASSWORD`, `PINREX_DB_HOST`, `PINREX_DB_PORT` (default 5432) and
/// `PINREX_DB_NAME`; user, host and name are required for that form.
pub fn postgres_url_from_env() -> Option<String> {
    if let Some(url) = env_non_empty(DATABASE_URL_VAR) {
        return Some(url);
    }
    let user = env_non_empty(PG_USER_VAR)?;
    let host = env_non_empty(PG_HOST_VAR)?;
    let name = env_non_empty(PG_NAME_VAR)?;
    let port: u16 = env_parse_with_default(PG_PORT_VAR, 5432);
    let credentials = match env_non_empty(PG_PASSWORD_VAR) {
        Some(password) => format!("{user}:{password}"),
        None => user,
    };
    Some(format!("postgresql://{credentials}@{host}:{port}/{name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(var: &str, value: &str) {
        // SAFETY: each test touches only its own uniquely named variables.
        unsafe { std::env::set_var(var, value) };
    }

    fn unset(var: &str) {
        // SAFETY: see `set`.
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "PINREX_TEST_ENV_PARSE_VALID_40121";
        set(var_name, "42");
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 42);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "PINREX_TEST_ENV_PARSE_INVALID_40122";
        set(var_name, "banana");
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "PINREX_TEST_ENV_PARSE_MISSING_40123";
        unset(var_name);
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_env_non_empty_ignores_blank() {
        let var_name = "PINREX_TEST_ENV_BLANK_40124";
        set(var_name, "   ");
        assert_eq!(env_non_empty(var_name), None);
        set(var_name, "value");
        assert_eq!(env_non_empty(var_name).as_deref(), Some("value"));
        unset(var_name);
    }
}
