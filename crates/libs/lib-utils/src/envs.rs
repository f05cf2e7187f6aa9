//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.
//!
//! The `_or` variants fall back to a default when the variable is unset but
//! still fail when it is set to something unparsable, so a typo in a
//! deployment surfaces at startup instead of being silently ignored.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.parse::<T>().map_err(|_| Error::WrongFormat(name))
}

/// Get an environment variable, or `default` when it is unset.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get and parse an environment variable, or `default` when it is unset.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match env::var(name) {
        Ok(val) => val.parse::<T>().map_err(|_| Error::WrongFormat(name)),
        Err(_) => Ok(default),
    }
}

/// Read a `1`/`0` style flag. Accepts `1`, `true`, `yes`, `on` (case-insensitive).
pub fn get_env_flag(name: &'static str, default: bool) -> bool {
    match env::var(name) {
        Ok(val) => matches!(
            val.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => default,
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name; the process environment is shared
    // between test threads.

    #[test]
    fn test_missing_env() {
        assert_eq!(
            get_env("LIB_UTILS_TEST_MISSING"),
            Err(Error::MissingEnv("LIB_UTILS_TEST_MISSING"))
        );
        assert_eq!(get_env_or("LIB_UTILS_TEST_MISSING", "fallback"), "fallback");
        assert_eq!(get_env_parse_or("LIB_UTILS_TEST_MISSING", 7u64), Ok(7));
    }

    #[test]
    fn test_parse_env() {
        env::set_var("LIB_UTILS_TEST_NUMBER", "42");
        assert_eq!(get_env_parse::<u64>("LIB_UTILS_TEST_NUMBER"), Ok(42));
        assert_eq!(get_env_parse_or("LIB_UTILS_TEST_NUMBER", 1u64), Ok(42));
    }

    #[test]
    fn test_wrong_format() {
        env::set_var("LIB_UTILS_TEST_BAD_NUMBER", "forty-two");
        assert_eq!(
            get_env_parse_or("LIB_UTILS_TEST_BAD_NUMBER", 1u64),
            Err(Error::WrongFormat("LIB_UTILS_TEST_BAD_NUMBER"))
        );
    }

    #[test]
    fn test_flag() {
        env::set_var("LIB_UTILS_TEST_FLAG_ON", "TRUE");
        env::set_var("LIB_UTILS_TEST_FLAG_OFF", "0");
        assert!(get_env_flag("LIB_UTILS_TEST_FLAG_ON", false));
        assert!(!get_env_flag("LIB_UTILS_TEST_FLAG_OFF", true));
        assert!(get_env_flag("LIB_UTILS_TEST_FLAG_UNSET", true));
    }
}
