//! Typed accessors over an [`EnvSource`]

use crate::de::{self, parse_bool, parse_int, parse_member};
use crate::error::EnvError;
use crate::source::{EnvSource, ProcessEnv};

/// Reads typed values from an [`EnvSource`].
///
/// Methods on `EnvHelper` take a default that is returned when the variable
/// is not set. [`EnvHelper::required`] gives the same accessors without a
/// default, failing with [`EnvError::MissingRequired`] instead.
///
/// A value that is set but malformed is always an error; it never falls back
/// to the default.
///
/// ```rust
/// use std::collections::HashMap;
/// use envhelper::EnvHelper;
///
/// let env: HashMap<String, String> = [("APP_PORT".to_string(), "9090".to_string())].into();
/// let helper = EnvHelper::with_source(env).with_prefix("APP_");
///
/// assert_eq!(helper.int("PORT", 8080).unwrap(), 9090);
/// assert!(!helper.bool("DEBUG", false).unwrap());
/// assert!(helper.required().string("NAME").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvHelper<S = ProcessEnv> {
    source: S,
    prefix: String,
}

impl EnvHelper<ProcessEnv> {
    /// Helper reading the environment of the running process.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: EnvSource> EnvHelper<S> {
    /// Helper reading from `source`.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            prefix: String::new(),
        }
    }

    /// Prepend `prefix` to every key looked up through this helper.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Accessors that fail when the variable is not set.
    pub fn required(&self) -> Required<'_, S> {
        Required { helper: self }
    }

    fn env_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    /// `true` for `1`/`true`, `false` for `0`/`false`, `default` if unset.
    ///
    /// # Errors
    ///
    /// [`EnvError::InvalidBoolean`] for any other value.
    pub fn bool(&self, key: &str, default: bool) -> Result<bool, EnvError> {
        de::deserialize_with_default(&self.source, &self.env_name(key), default, parse_bool)
    }

    /// Raw value, untouched, or `default` if unset.
    pub fn string(&self, key: &str, default: &str) -> Result<String, EnvError> {
        de::deserialize_with_default(
            &self.source,
            &self.env_name(key),
            default.to_string(),
            |_, value| Ok(value.to_string()),
        )
    }

    /// Leading base-10 integer of the value, or `default` if unset.
    ///
    /// Trailing characters after the digits are ignored, so `"42abc"` reads
    /// as `42`.
    ///
    /// # Errors
    ///
    /// [`EnvError::InvalidInteger`] if the value does not start with an
    /// integer.
    pub fn int(&self, key: &str, default: i64) -> Result<i64, EnvError> {
        de::deserialize_with_default(&self.source, &self.env_name(key), default, parse_int)
    }

    /// Value restricted to `valid`, or `default` if unset.
    ///
    /// # Errors
    ///
    /// - [`EnvError::InvalidDefault`] if `default` is not in `valid`, checked
    ///   before the environment is consulted
    /// - [`EnvError::InvalidEnumValue`] if the value is not in `valid`
    pub fn enum_value(&self, key: &str, valid: &[&str], default: &str) -> Result<String, EnvError> {
        let env_name = self.env_name(key);
        if !valid.contains(&default) {
            return Err(EnvError::invalid_default(env_name, default, valid));
        }
        de::deserialize_with_default(
            &self.source,
            &env_name,
            default.to_string(),
            |name, value| parse_member(name, value, valid),
        )
    }
}

/// Accessors of an [`EnvHelper`] that have no default.
///
/// Each fails with [`EnvError::MissingRequired`] when the variable is not
/// set, then applies the same coercion as its `EnvHelper` counterpart.
#[derive(Debug, Clone, Copy)]
pub struct Required<'a, S> {
    helper: &'a EnvHelper<S>,
}

impl<S: EnvSource> Required<'_, S> {
    pub fn bool(&self, key: &str) -> Result<bool, EnvError> {
        de::deserialize_required(&self.helper.source, &self.helper.env_name(key), parse_bool)
    }

    /// An empty value counts as set.
    pub fn string(&self, key: &str) -> Result<String, EnvError> {
        de::get_env_value(&self.helper.source, &self.helper.env_name(key))
    }

    pub fn int(&self, key: &str) -> Result<i64, EnvError> {
        de::deserialize_required(&self.helper.source, &self.helper.env_name(key), parse_int)
    }

    pub fn enum_value(&self, key: &str, valid: &[&str]) -> Result<String, EnvError> {
        de::deserialize_required(
            &self.helper.source,
            &self.helper.env_name(key),
            |name, value| parse_member(name, value, valid),
        )
    }
}
