//! Typed access to environment variables
//!
//! `envhelper` reads a named environment variable and coerces it into a
//! boolean, string, integer or a value from a fixed set, falling back to a
//! default when the variable is not set, or failing when a required variable
//! is missing.
//!
//! # Features
//!
//! - **Strict booleans**: only `1`, `true`, `0` and `false` are accepted
//! - **Lenient integers**: the leading base-10 integer is used (`42abc` is `42`)
//! - **Enumerated values**: restrict a variable to a declared set of strings
//! - **Required variables**: every accessor has a variant without a default
//! - **Injectable source**: [`EnvHelper`] reads from any [`EnvSource`], so
//!   lookups can be tested against an in-memory map
//!
//! A set but malformed value is always an error, never replaced by the default.
//!
//! # Example
//!
//! ```rust
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("DATABASE_URL", "postgres://localhost/db");
//! #     std::env::set_var("LOG_LEVEL", "debug");
//! let database_url = envhelper::required::string("DATABASE_URL")?;
//! let port = envhelper::int("PORT", 8080)?;
//! let debug = envhelper::bool("DEBUG", false)?;
//! let log_level = envhelper::enum_value("LOG_LEVEL", &["debug", "info", "warn"], "info")?;
//!
//! assert_eq!(database_url, "postgres://localhost/db");
//! assert_eq!(port, 8080);
//! assert!(!debug);
//! assert_eq!(log_level, "debug");
//! #     Ok(())
//! # }
//! ```
//!
//! # Accessors
//!
//! | Function | Unset | Errors |
//! |----------|-------|--------|
//! | [`bool`] | default | [`EnvError::InvalidBoolean`] |
//! | [`string`] | default | none |
//! | [`int`] | default | [`EnvError::InvalidInteger`] |
//! | [`enum_value`] | default | [`EnvError::InvalidDefault`], [`EnvError::InvalidEnumValue`] |
//! | [`required::bool`] | error | [`EnvError::MissingRequired`], [`EnvError::InvalidBoolean`] |
//! | [`required::string`] | error | [`EnvError::MissingRequired`] |
//! | [`required::int`] | error | [`EnvError::MissingRequired`], [`EnvError::InvalidInteger`] |
//! | [`required::enum_value`] | error | [`EnvError::MissingRequired`], [`EnvError::InvalidEnumValue`] |
//!
//! The free functions read the process environment. Use [`EnvHelper`] to
//! read from another [`EnvSource`] or to apply a prefix to every key.

mod de;
mod error;
mod helper;
mod source;

pub use error::EnvError;
pub use helper::{EnvHelper, Required};
pub use source::{EnvSource, ProcessEnv};

// Re-export for callers composing lookups with `?`
#[doc(hidden)]
pub use anyhow;

/// Read `key` as a boolean, or `default` if it is not set.
///
/// # Errors
///
/// [`EnvError::InvalidBoolean`] if the value is not `1`, `0`, `true` or `false`.
pub fn bool(key: &str, default: bool) -> Result<bool, EnvError> {
    EnvHelper::new().bool(key, default)
}

/// Read `key` verbatim, or `default` if it is not set.
pub fn string(key: &str, default: &str) -> Result<String, EnvError> {
    EnvHelper::new().string(key, default)
}

/// Read the leading integer of `key`, or `default` if it is not set.
///
/// # Errors
///
/// [`EnvError::InvalidInteger`] if the value does not start with an integer.
pub fn int(key: &str, default: i64) -> Result<i64, EnvError> {
    EnvHelper::new().int(key, default)
}

/// Read `key` restricted to `valid`, or `default` if it is not set.
///
/// # Errors
///
/// - [`EnvError::InvalidDefault`] if `default` is not in `valid`, even when
///   `key` is not set
/// - [`EnvError::InvalidEnumValue`] if the value is not in `valid`
pub fn enum_value(key: &str, valid: &[&str], default: &str) -> Result<String, EnvError> {
    EnvHelper::new().enum_value(key, valid, default)
}

/// Accessors for variables that must be set.
///
/// Each fails with [`EnvError::MissingRequired`] when the variable is not set.
pub mod required {
    use crate::{EnvError, EnvHelper};

    pub fn bool(key: &str) -> Result<bool, EnvError> {
        EnvHelper::new().required().bool(key)
    }

    /// An empty value counts as set.
    pub fn string(key: &str) -> Result<String, EnvError> {
        EnvHelper::new().required().string(key)
    }

    pub fn int(key: &str) -> Result<i64, EnvError> {
        EnvHelper::new().required().int(key)
    }

    pub fn enum_value(key: &str, valid: &[&str]) -> Result<String, EnvError> {
        EnvHelper::new().required().enum_value(key, valid)
    }
}
