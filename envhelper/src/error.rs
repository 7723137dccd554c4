//! Error types for typed environment variable access

/// Errors that can occur when reading a typed value from the environment.
///
/// Every variant names the environment variable (with any prefix applied)
/// that caused the failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    /// Required environment variable is not set.
    #[error("Environment variable '{name}' is required but not set")]
    MissingRequired {
        /// Name of the missing environment variable
        name: String,
    },

    /// Value is not one of `1`, `0`, `true`, `false`.
    #[error("Environment variable '{name}' is not a valid boolean value: '{value}'")]
    InvalidBoolean {
        /// Name of the environment variable
        name: String,
        /// Raw value that was rejected
        value: String,
    },

    /// Value has no leading base-10 integer.
    #[error("Environment variable '{name}' is not a valid integer value: '{value}'")]
    InvalidInteger {
        /// Name of the environment variable
        name: String,
        /// Raw value that was rejected
        value: String,
    },

    /// Default passed for an enumerated option is not one of its valid values.
    ///
    /// This is a programming error at the call site and is reported whether
    /// or not the variable is set.
    #[error(
        "Environment variable '{name}' does not have a valid default value '{default}'. Valid values are {}",
        .allowed.join(", ")
    )]
    InvalidDefault {
        /// Name of the environment variable
        name: String,
        /// Default that was supplied
        default: String,
        /// Declared valid values
        allowed: Vec<String>,
    },

    /// Value is not a member of the declared valid set.
    #[error(
        "Environment variable '{name}' is not valid: '{value}'. Valid values are {}",
        .allowed.join(", ")
    )]
    InvalidEnumValue {
        /// Name of the environment variable
        name: String,
        /// Raw value that was rejected
        value: String,
        /// Declared valid values
        allowed: Vec<String>,
    },
}

impl EnvError {
    pub(crate) fn missing(name: impl Into<String>) -> Self {
        Self::MissingRequired { name: name.into() }
    }

    pub(crate) fn invalid_boolean(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidBoolean {
            name: name.into(),
            value: value.into(),
        }
    }

    pub(crate) fn invalid_integer(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidInteger {
            name: name.into(),
            value: value.into(),
        }
    }

    pub(crate) fn invalid_default(
        name: impl Into<String>,
        default: impl Into<String>,
        allowed: &[&str],
    ) -> Self {
        Self::InvalidDefault {
            name: name.into(),
            default: default.into(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub(crate) fn invalid_enum_value(
        name: impl Into<String>,
        value: impl Into<String>,
        allowed: &[&str],
    ) -> Self {
        Self::InvalidEnumValue {
            name: name.into(),
            value: value.into(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Name of the environment variable this error refers to.
    pub fn name(&self) -> &str {
        match self {
            Self::MissingRequired { name }
            | Self::InvalidBoolean { name, .. }
            | Self::InvalidInteger { name, .. }
            | Self::InvalidDefault { name, .. }
            | Self::InvalidEnumValue { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message_names_variable() {
        let err = EnvError::missing("DATABASE_URL");
        assert_eq!(
            err.to_string(),
            "Environment variable 'DATABASE_URL' is required but not set"
        );
        assert_eq!(err.name(), "DATABASE_URL");
    }

    #[test]
    fn test_enum_message_lists_allowed_values() {
        let err = EnvError::invalid_enum_value("LOG_LEVEL", "trace", &["debug", "info", "warn"]);
        let message = err.to_string();
        assert!(message.contains("LOG_LEVEL"));
        assert!(message.contains("debug, info, warn"));
    }

    #[test]
    fn test_invalid_default_message_lists_allowed_values() {
        let err = EnvError::invalid_default("MODE", "z", &["a", "b"]);
        assert!(err.to_string().contains("a, b"));
        assert_eq!(err.name(), "MODE");
    }
}
